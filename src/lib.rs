//! # quill
//!
//! Client-side session core for the Quill contract-review app: a session
//! store persisted to local key-value storage, a route guard that gates
//! protected screens, and the login form flow that drives them.
//!
//! Credential checks sit behind the [`auth::Authenticator`] trait; the mock
//! implementation keeps the local placeholder policy and the HTTP
//! implementation talks to a real verification service.

pub mod auth;
pub mod config;
pub mod guard;
pub mod login;
pub mod routes;
pub mod session;
pub mod storage;
pub mod store;

pub use guard::{GuardState, GuardView, Navigator, RouteGuard};
pub use session::Session;
pub use store::{AuthState, SessionStore};
