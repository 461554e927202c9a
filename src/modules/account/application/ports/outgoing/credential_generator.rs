/// Source of one-time codes and generated passwords.
pub trait CredentialGenerator: Send + Sync {
    /// Six decimal digits, 100000..=999999.
    fn otp_code(&self) -> String;

    /// Random password that satisfies the password policy.
    fn password(&self, length: usize) -> String;
}
