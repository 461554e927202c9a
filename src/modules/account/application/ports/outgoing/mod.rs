pub mod account_query;
pub mod account_repository;
pub mod credential_generator;
pub mod password_hasher;

pub use account_query::{
    AccountListFilter, AccountListItem, AccountProfileView, AccountQuery, AccountQueryError,
    UserInfoView,
};
pub use account_repository::{AccountRepository, AccountRepositoryError, NewAccount};
pub use credential_generator::CredentialGenerator;
pub use password_hasher::{HashError, PasswordHasher};
