//! Local user session: the persisted profile blob and its store.

mod error;
mod store;
mod types;

pub use error::SessionError;
pub use store::{PROFILE_PHOTO_KEY, SessionStore, SessionStoreConfig, USER_DATA_KEY};
pub use types::UserSession;
