use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagQuery: Send + Sync {
    /// Every row, deleted or not, whose name matches one of `names`
    /// case-insensitively.
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<Tag>, TagQueryError>;

    async fn find_live_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, TagQueryError>;

    /// Live rows ordered by name, plus the total before paging.
    async fn list(
        &self,
        keyword: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<Tag>, u64), TagQueryError>;
}
