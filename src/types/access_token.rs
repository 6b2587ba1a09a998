use serde::{Deserialize, Serialize};

/// Access token issued by the token exchange.
///
/// See: <https://developers.strava.com/docs/authentication/>
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
	/// Token type, `Bearer` for every Strava grant.
	pub token_type: String,

	/// Unix timestamp at which the access token expires.
	pub expires_at: i64,

	/// Seconds until the access token expires.
	pub expires_in: i64,

	/// Token to exchange for a new access token once this one expires.
	pub refresh_token: String,

	/// The credential to attach to authenticated requests.
	pub access_token: String,

	/// Identity of the athlete that granted the authorization.
	pub athlete: SummaryAthlete,
}

/// Minimal athlete identity returned with an access token.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryAthlete {
	pub id: u64,
	pub username: String,
	pub firstname: String,
	pub lastname: String,
}
