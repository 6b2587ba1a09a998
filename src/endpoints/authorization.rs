//! OAuth 2.0 authorization flow: redirect URL and token exchange
//! parameters.
use serde::Serialize;

use crate::client::Error;
use crate::config::Config;
use crate::request::Params;

/// Grant exchanging an authorization code for an access token.
pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

/// Grant exchanging a refresh token for a new access token.
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

/// Browser-facing authorization endpoint.
pub const AUTHORIZATION_ENDPOINT: &str = "https://www.strava.com/oauth/authorize";

/// Token exchange endpoint.
///
/// This endpoint authenticates via client credentials rather than a bearer
/// token.
pub const TOKEN_ENDPOINT: &str = "https://www.strava.com/api/v3/oauth/token";

/// Query parameters of the authorization redirect.
#[derive(Serialize)]
struct AuthorizeParams<'a> {
	client_id: &'a str,
	response_type: &'a str,
	redirect_uri: &'a str,
	approval_prompt: &'a str,
	scope: &'a str,
	state: &'a str,
}

/// Builds the URL the user must visit to authorize the application.
///
/// The opaque `state` value is echoed back on the redirect callback so the
/// caller can correlate it; it is not validated here.
pub fn authorization_url(config: &Config, state: &str) -> String {
	let queries = serde_html_form::to_string(AuthorizeParams {
		client_id: &config.client_id,
		response_type: "code",
		redirect_uri: &config.redirect_uri,
		approval_prompt: "force",
		scope: &config.scope,
		state,
	})
	// UNWRAP SAFETY: the parameter struct is a flat set of string fields,
	//                which always serializes as a form query.
	.unwrap();

	format!("{AUTHORIZATION_ENDPOINT}?{queries}")
}

/// Builds the token exchange query for the given grant.
///
/// Only [`GRANT_AUTHORIZATION_CODE`] and [`GRANT_REFRESH_TOKEN`] are
/// accepted; any other grant fails before a request is made. `token` is
/// the authorization code for the former and the refresh token for the
/// latter.
pub(crate) fn token_queries(
	config: &Config,
	token: &str,
	grant: &str,
) -> Result<Params, Error> {
	let mut queries = Params::new();
	queries.insert("client_id".to_owned(), config.client_id.clone().into());
	queries.insert(
		"client_secret".to_owned(),
		config.client_secret.clone().into(),
	);

	match grant {
		GRANT_AUTHORIZATION_CODE => queries.insert("code".to_owned(), token.into()),
		GRANT_REFRESH_TOKEN => queries.insert("refresh_token".to_owned(), token.into()),
		_ => return Err(Error::UnsupportedGrant(grant.to_owned())),
	};

	queries.insert("grant_type".to_owned(), grant.into());

	Ok(queries)
}
