use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::modules::account::application::domain::entities::ProfilePatch;
use crate::modules::account::application::domain::fields::{self, AccountFieldError};
use crate::modules::account::application::ports::outgoing::{
    AccountProfileView, AccountQuery, AccountRepository, AccountRepositoryError,
};

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    patch: ProfilePatch,
}

impl UpdateProfileCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        phone: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        dob: Option<&str>,
        address: Option<&str>,
        gender: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<Self, AccountFieldError> {
        Ok(Self {
            patch: ProfilePatch {
                phone: phone.map(fields::phone).transpose()?,
                first_name: first_name
                    .map(|v| fields::person_name(v, "First name"))
                    .transpose()?,
                last_name: last_name
                    .map(|v| fields::person_name(v, "Last name"))
                    .transpose()?,
                dob: dob.map(fields::dob).transpose()?,
                address: address.map(fields::address).transpose()?,
                gender: gender.map(fields::gender).transpose()?,
                avatar_url: avatar_url.map(fields::avatar_url).transpose()?,
            },
        })
    }

    pub fn patch(&self) -> &ProfilePatch {
        &self.patch
    }
}

impl<'de> Deserialize<'de> for UpdateProfileCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            phone: Option<String>,
            first_name: Option<String>,
            last_name: Option<String>,
            dob: Option<String>,
            address: Option<String>,
            gender: Option<String>,
            avatar_url: Option<String>,
        }

        let h = Helper::deserialize(deserializer)?;
        UpdateProfileCommand::new(
            h.phone.as_deref(),
            h.first_name.as_deref(),
            h.last_name.as_deref(),
            h.dob.as_deref(),
            h.address.as_deref(),
            h.gender.as_deref(),
            h.avatar_url.as_deref(),
        )
        .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User detail is not found")]
    NotFound,

    #[error("Phone is already in use")]
    PhoneAlreadyInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    /// Applies the patch to `account_id` and returns the refreshed profile.
    async fn execute(
        &self,
        account_id: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<AccountProfileView, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery,
    R: AccountRepository,
{
    async fn execute(
        &self,
        account_id: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<AccountProfileView, UpdateProfileError> {
        let current = self
            .query
            .get_profile(account_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::NotFound)?;

        if command.patch.is_empty() {
            return Ok(current);
        }

        self.repository
            .update_profile(account_id, command.patch)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::PhoneAlreadyInUse => UpdateProfileError::PhoneAlreadyInUse,
                AccountRepositoryError::NotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(account_id = %account_id, "Profile updated");

        self.query
            .get_profile(account_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::NotFound)
    }
}
