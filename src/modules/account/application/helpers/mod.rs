pub mod identity_guard;

pub use identity_guard::{ensure_identity_free, IdentityTaken};
