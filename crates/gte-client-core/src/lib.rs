//! Sign in, sign out, profile updates and registration against the GTE
//! platform backend, with the session mirrored into a [`SessionStore`]
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod client;
pub mod store;

pub use client::{request_context::RequestContext, Client, ClientOptions, UiCallBack};
pub use store::{MemoryStore, SessionStore, SessionStoreExt};

#[cfg(target_arch = "wasm32")]
pub use store::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
