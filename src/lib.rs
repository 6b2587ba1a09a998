//! Client library for the [Strava v3 API](https://developers.strava.com/docs/reference/).
//!
//! This crate covers the OAuth 2.0 authorization flow used by Strava
//! (authorization code and refresh token grants of [RFC 6749][rfc6749])
//! and typed access to activity data.
//!
//! # Modules
//!
//! - [`client`] — client capability trait, error type and the [`Strava`]
//!   facade implementing it.
//! - [`config`] — connection parameters, explicit or loaded from
//!   `STRAVA_`-prefixed environment variables.
//! - [`endpoints`] — authorization flow and activity endpoints.
//! - [`request`] — per-call request parameters and their wire encoding.
//! - [`transport`] — HTTP transport abstraction and content type selection.
//!
//! Domain types ([`AccessToken`], [`Activity`], [`Split`], [`Lap`], etc.)
//! are re-exported at the crate root.
//!
//! # Session state
//!
//! The [`Strava`] facade owns the session access token and user id, mutated
//! only through `&mut self` setters; exclusive access is enforced by the
//! borrow checker rather than a lock. Wrap the client in a mutex to share
//! it between tasks.
//!
//! [rfc6749]: https://datatracker.ietf.org/doc/html/rfc6749
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod client;
pub mod config;
pub mod endpoints;
pub mod request;
pub mod transport;
mod types;

pub use client::{Client, Error, Strava};
pub use config::Config;
pub use endpoints::activities::ActivitiesRequest;
pub use endpoints::authorization::{GRANT_AUTHORIZATION_CODE, GRANT_REFRESH_TOKEN};
pub use request::{Params, RequestParams};
pub use types::*;
