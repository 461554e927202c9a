use rand::seq::SliceRandom;
use rand::Rng;

use crate::modules::account::application::ports::outgoing::CredentialGenerator;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"@$!%*?&";

/// Codes and passwords from the thread-local CSPRNG.
#[derive(Clone, Default)]
pub struct RandomCredentials;

impl CredentialGenerator for RandomCredentials {
    fn otp_code(&self) -> String {
        rand::thread_rng().gen_range(100_000..=999_999).to_string()
    }

    /// At least one character of every class, shuffled. `length` below four
    /// still yields one of each.
    fn password(&self, length: usize) -> String {
        let mut rng = rand::thread_rng();
        let classes = [LOWER, UPPER, DIGITS, SPECIAL];
        let all: Vec<u8> = classes.concat();

        let mut chars: Vec<u8> = classes
            .iter()
            .map(|class| class[rng.gen_range(0..class.len())])
            .collect();

        while chars.len() < length {
            chars.push(all[rng.gen_range(0..all.len())]);
        }

        chars.shuffle(&mut rng);
        String::from_utf8(chars).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::is_strong_password;

    #[test]
    fn otp_is_six_digits_in_range() {
        let generator = RandomCredentials;
        for _ in 0..200 {
            let code: u32 = generator.otp_code().parse().unwrap();
            assert!((100_000..=999_999).contains(&code));
        }
    }

    #[test]
    fn generated_password_satisfies_policy() {
        let generator = RandomCredentials;
        for _ in 0..100 {
            let password = generator.password(12);
            assert_eq!(password.len(), 12);
            assert!(is_strong_password(&password), "weak: {password}");
        }
    }
}
