//! Field-level rules shared by the account commands.

use chrono::NaiveDate;

use crate::modules::account::application::domain::entities::{Gender, Role};
use crate::shared::validation::{
    is_http_url, is_strong_password, is_valid_email, is_valid_phone, is_valid_username,
    len_between, PASSWORD_POLICY_MESSAGE,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountFieldError {
    #[error("Email is not valid")]
    InvalidEmail,

    #[error("Username must be between 6 and 100 characters")]
    UsernameLength,

    #[error("Username must not contain special characters")]
    UsernameCharacters,

    #[error("{}", PASSWORD_POLICY_MESSAGE)]
    WeakPassword,

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Role is not valid")]
    InvalidRole,

    #[error("Code must be 6 digits")]
    InvalidCode,

    #[error("Phone must contain 9-10 digits.")]
    InvalidPhone,

    #[error("{0} must be between 1 and 50 characters")]
    NameLength(&'static str),

    #[error("Date of birth must be YYYY-MM-DD or DD/MM/YYYY")]
    InvalidDob,

    #[error("Address must be at most 255 characters")]
    AddressLength,

    #[error("Gender must be one of: MALE, FEMALE, OTHER")]
    InvalidGender,

    #[error("Avatar URL must be a valid URL")]
    InvalidAvatarUrl,
}

pub fn email(raw: &str) -> Result<String, AccountFieldError> {
    let email = raw.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AccountFieldError::InvalidEmail);
    }
    Ok(email)
}

pub fn username(raw: &str) -> Result<String, AccountFieldError> {
    let username = raw.trim();
    if !len_between(username, 6, 100) {
        return Err(AccountFieldError::UsernameLength);
    }
    if !is_valid_username(username) {
        return Err(AccountFieldError::UsernameCharacters);
    }
    Ok(username.to_string())
}

pub fn password(raw: &str) -> Result<String, AccountFieldError> {
    if !is_strong_password(raw) {
        return Err(AccountFieldError::WeakPassword);
    }
    Ok(raw.to_string())
}

pub fn non_empty(raw: &str, field: &'static str) -> Result<String, AccountFieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AccountFieldError::Empty(field));
    }
    Ok(value.to_string())
}

/// Absent role means USER.
pub fn role(raw: Option<&str>) -> Result<Role, AccountFieldError> {
    match raw {
        None => Ok(Role::User),
        Some(value) => value.parse().map_err(|_| AccountFieldError::InvalidRole),
    }
}

pub fn otp_code(raw: &str) -> Result<String, AccountFieldError> {
    let code = raw.trim();
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(AccountFieldError::InvalidCode);
    }
    Ok(code.to_string())
}

pub fn phone(raw: &str) -> Result<String, AccountFieldError> {
    let phone = raw.trim();
    if !is_valid_phone(phone) {
        return Err(AccountFieldError::InvalidPhone);
    }
    Ok(phone.to_string())
}

pub fn person_name(raw: &str, field: &'static str) -> Result<String, AccountFieldError> {
    let name = raw.trim();
    if !len_between(name, 1, 50) {
        return Err(AccountFieldError::NameLength(field));
    }
    Ok(name.to_string())
}

pub fn dob(raw: &str) -> Result<NaiveDate, AccountFieldError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|_| AccountFieldError::InvalidDob)
}

pub fn address(raw: &str) -> Result<String, AccountFieldError> {
    let address = raw.trim();
    if address.chars().count() > 255 {
        return Err(AccountFieldError::AddressLength);
    }
    Ok(address.to_string())
}

pub fn gender(raw: &str) -> Result<Gender, AccountFieldError> {
    raw.parse().map_err(|_| AccountFieldError::InvalidGender)
}

pub fn avatar_url(raw: &str) -> Result<String, AccountFieldError> {
    let url = raw.trim();
    if !is_http_url(url) {
        return Err(AccountFieldError::InvalidAvatarUrl);
    }
    Ok(url.to_string())
}
