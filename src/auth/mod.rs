pub mod credentials;
pub mod sessions;

pub use credentials::check_credentials;
pub use sessions::{now_unix, SessionStore, SESSION_COOKIE};
