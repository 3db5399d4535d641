mod crypto;
mod db;
mod extractor;

pub use crypto::hash_password;
pub use db::{authenticate, create_session};
pub use extractor::{AuthUser, MaybeAuthUser};
