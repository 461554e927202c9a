use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

pub const PASSWORD_SPECIALS: &str = "@$!%*?&";
pub const PASSWORD_POLICY_MESSAGE: &str = "Password must be 8-100 characters long, including at least one uppercase letter, one lowercase letter, one number, and one special character";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid username regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9,10}$").expect("valid phone regex"));

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn len_between(value: &str, min: usize, max: usize) -> bool {
    let len = char_len(value);
    len >= min && len <= max
}

/// 8..=100 chars drawn from letters, digits and `@$!%*?&`, with at least
/// one of each class.
pub fn is_strong_password(password: &str) -> bool {
    if !len_between(password, 8, 100) {
        return false;
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);
    if !password.chars().all(allowed) {
        return false;
    }

    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

pub fn is_valid_email(email: &str) -> bool {
    len_between(email, 8, 100) && EmailAddress::is_valid(email)
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Absolute http(s) URL.
pub fn is_http_url(value: &str) -> bool {
    match reqwest::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
