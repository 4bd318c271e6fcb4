//! Service ports: traits + data contracts.

pub mod session;

pub use session::SessionStore;
