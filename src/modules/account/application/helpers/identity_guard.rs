use crate::modules::account::application::ports::outgoing::AccountQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityTaken {
    #[error("Email is already in use")]
    Email,

    #[error("Username is already in use")]
    Username,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Rejects an email or username already held by a live account.
pub async fn ensure_identity_free<Q: AccountQuery + ?Sized>(
    query: &Q,
    email: &str,
    username: &str,
) -> Result<(), IdentityTaken> {
    let by_email = query
        .find_by_email(email)
        .await
        .map_err(|e| IdentityTaken::RepositoryError(e.to_string()))?;
    if by_email.is_some() {
        return Err(IdentityTaken::Email);
    }

    let by_username = query
        .find_by_username(username)
        .await
        .map_err(|e| IdentityTaken::RepositoryError(e.to_string()))?;
    if by_username.is_some() {
        return Err(IdentityTaken::Username);
    }

    Ok(())
}
