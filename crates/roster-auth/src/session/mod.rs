//! Session model and the stores that resolve credentials into sessions.

pub mod http;
pub mod memory;
pub mod model;
pub mod store;

pub use http::HttpSessionStore;
pub use memory::MemorySessionStore;
pub use model::Session;
pub use store::SessionStore;
