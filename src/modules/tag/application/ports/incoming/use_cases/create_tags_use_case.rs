use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::modules::tag::application::domain::entities::{Tag, TagName, TagNameError};

//
// ──────────────────────────────────────────────────────────
// Create Tags Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTagsCommand {
    names: Vec<TagName>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTagsCommandError {
    #[error("At least one tag is required")]
    Empty,

    #[error(transparent)]
    InvalidName(#[from] TagNameError),
}

impl CreateTagsCommand {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, CreateTagsCommandError> {
        if names.is_empty() {
            return Err(CreateTagsCommandError::Empty);
        }

        let names = names
            .iter()
            .map(|n| TagName::new(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { names })
    }

    pub fn into_names(self) -> Vec<TagName> {
        self.names
    }
}

impl<'de> Deserialize<'de> for CreateTagsCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            name: String,
        }

        let items = Vec::<Helper>::deserialize(deserializer)?;
        let names: Vec<String> = items.into_iter().map(|h| h.name).collect();
        CreateTagsCommand::new(&names).map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Outcome / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTagsOutcome {
    pub message: String,
    /// Created rows first, then restored ones.
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateTagsError {
    /// Every input matched a live tag.
    #[error("{message}")]
    NothingCreated { message: String, existing: Vec<Tag> },

    #[error("Tag name is already in use")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTagsUseCase: Send + Sync {
    async fn execute(&self, command: CreateTagsCommand)
        -> Result<CreateTagsOutcome, CreateTagsError>;
}
