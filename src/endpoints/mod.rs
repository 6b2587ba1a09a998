//! Endpoint definitions.
//!
//! - [`authorization`] — OAuth 2.0 authorization flow: browser redirect
//!   URL and token exchange.
//! - [`activities`] — activity resources.
pub mod activities;
pub mod authorization;
