//! Session handling.
//!
//! `SessionStore` persists the signed-in user; `SessionManager` ties it to
//! the auth backend and tracks who is signed in right now.

mod manager;
mod store;

pub use manager::SessionManager;
pub use store::SessionStore;
