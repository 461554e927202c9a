use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::catalog::BulkSaved;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Tag already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Inserts `names` and revives `restore_ids` in one transaction.
    async fn create_and_restore(
        &self,
        names: Vec<String>,
        restore_ids: Vec<Uuid>,
    ) -> Result<BulkSaved<Tag>, TagRepositoryError>;

    /// Returns the number of rows flagged.
    async fn soft_delete_many(&self, ids: &[Uuid]) -> Result<u64, TagRepositoryError>;
}
