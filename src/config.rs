//! Connection parameters for the Strava service.
use std::env;

/// Configuration of the client.
///
/// A `Config` is an immutable snapshot supplied once at construction,
/// either built explicitly or loaded with [`Config::from_env`] by the
/// composition root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	/// Base URL of the API, e.g. `https://www.strava.com/api/v3`.
	pub host: String,

	/// OAuth 2.0 client identifier issued by Strava.
	pub client_id: String,

	/// OAuth 2.0 client secret issued by Strava.
	pub client_secret: String,

	/// Redirect target registered for the authorization callback.
	pub redirect_uri: String,

	/// Request timeout in seconds. Zero disables the timeout.
	pub timeout: u64,

	/// Scopes requested during authorization, comma-separated as Strava
	/// expects them (e.g. `read,activity:read_all`).
	pub scope: String,
}

impl Config {
	/// Loads the configuration from `STRAVA_`-prefixed environment
	/// variables.
	///
	/// Missing variables leave the corresponding field at its default; a
	/// non-numeric `STRAVA_TIMEOUT` is treated as unset.
	pub fn from_env() -> Self {
		Self {
			host: var("STRAVA_HOST"),
			client_id: var("STRAVA_ID"),
			client_secret: var("STRAVA_SECRET"),
			redirect_uri: var("STRAVA_REDIRECT_URI"),
			timeout: var("STRAVA_TIMEOUT").parse().unwrap_or_default(),
			scope: var("STRAVA_SCOPE"),
		}
	}
}

fn var(name: &str) -> String {
	env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_env_reads_strava_variables() {
		// SAFETY: no other test reads or writes these variables.
		unsafe {
			env::set_var("STRAVA_HOST", "https://www.strava.com/api/v3");
			env::set_var("STRAVA_ID", "12345");
			env::set_var("STRAVA_SECRET", "s3cr3t");
			env::set_var("STRAVA_REDIRECT_URI", "http://localhost/callback");
			env::set_var("STRAVA_TIMEOUT", "10");
			env::set_var("STRAVA_SCOPE", "read,activity:read_all");
		}

		let config = Config::from_env();

		assert_eq!(config.host, "https://www.strava.com/api/v3");
		assert_eq!(config.client_id, "12345");
		assert_eq!(config.client_secret, "s3cr3t");
		assert_eq!(config.redirect_uri, "http://localhost/callback");
		assert_eq!(config.timeout, 10);
		assert_eq!(config.scope, "read,activity:read_all");
	}

	#[test]
	fn missing_variables_default() {
		let config = Config::default();

		assert_eq!(config.timeout, 0);
		assert!(config.host.is_empty());
	}
}
