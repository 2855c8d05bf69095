//! Framework-agnostic endpoint behaviors.
//!
//! The storefront exposes three small HTTP surfaces for session handling:
//!
//! | Endpoint | Method | Behavior |
//! |---|---|---|
//! | status check | GET | 200 `{"authenticated":true}` or 401 `{"authenticated":false}` |
//! | silent recovery | GET | 302 to the provider authorize endpoint with `prompt=none` |
//! | logout | POST | 302 to the provider logout endpoint |
//!
//! This crate does not bind to a web framework; each behavior is a pure
//! function from typed inputs to a typed response that the surrounding
//! framework serializes. The silent-recovery behavior is
//! [`build_silent_check_redirect`](crate::build_silent_check_redirect).

mod logout;
mod status;

pub use logout::{handle_logout, LogoutRequest};
pub use status::{handle_status_check, StatusCheckBody, StatusCheckResponse};
