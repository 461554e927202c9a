use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::catalog::{to_title_case, CatalogRow, NamedInput};
use crate::shared::validation::char_len;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogRow for Tag {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagNameError {
    #[error("Tag name must not be empty")]
    Empty,

    #[error("Tag name must not exceed 50 characters")]
    TooLong,
}

/// Title-cased tag name, 1 to 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    pub fn new(raw: &str) -> Result<Self, TagNameError> {
        let name = to_title_case(raw);
        if name.is_empty() {
            return Err(TagNameError::Empty);
        }
        if char_len(&name) > 50 {
            return Err(TagNameError::TooLong);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NamedInput for TagName {
    fn name(&self) -> &str {
        &self.0
    }
}
