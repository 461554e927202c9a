pub mod bcrypt_hasher;
pub mod random_credentials;
