//! Session state and its durable backing store.
//!
//! The session is an explicit object owned by the application context, not
//! process-global state; everything that needs authentication takes it as
//! an argument.

pub mod session;
pub mod store;

pub use session::Session;
pub use store::SessionStore;
