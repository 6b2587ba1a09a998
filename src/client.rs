//! Client capability trait, error type and the [`Strava`] facade.
use http::{Method, Response, StatusCode};
use url::Url;

use crate::config::Config;
use crate::endpoints::{activities, authorization};
use crate::request::{RequestParams, build_request};
use crate::transport::HttpClient;
use crate::types::{AccessToken, Activity};

pub use crate::endpoints::activities::ActivitiesRequest;

/// Interface of the Strava service client.
///
/// Implemented by [`Strava`]; callers should depend on this trait rather
/// than the concrete type.
pub trait Client {
	/// Returns the URL to send the user to for authorization.
	fn authorization_url(&self, state: &str) -> String;

	/// Exchanges an authorization code or refresh token for an access
	/// token.
	///
	/// `grant` selects how `token` is interpreted; see
	/// [`GRANT_AUTHORIZATION_CODE`](crate::GRANT_AUTHORIZATION_CODE) and
	/// [`GRANT_REFRESH_TOKEN`](crate::GRANT_REFRESH_TOKEN).
	#[allow(async_fn_in_trait)]
	async fn authorization_access_token(
		&self,
		token: &str,
		grant: &str,
	) -> Result<AccessToken, Error>;

	/// Returns the activity with the given id, or the default value if the
	/// service answers with a non-200 status.
	#[allow(async_fn_in_trait)]
	async fn activity(&self, id: u64) -> Result<Activity, Error>;

	/// Returns the activities matching the given request.
	#[allow(async_fn_in_trait)]
	async fn activities(&self, request: ActivitiesRequest) -> Result<Vec<Activity>, Error>;

	/// Replaces the session access token.
	fn set_access_token(&mut self, token: impl Into<String>);

	/// Replaces the default user id for user-scoped requests.
	fn set_user_id(&mut self, id: u64);
}

/// Client error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request could not be built or sent. Never retried.
	#[error("unable to send request: {0}")]
	Request(String),

	/// The response body could not be received or decoded.
	#[error("unable to decode response: {0}")]
	Response(String),

	/// The service answered 401 Unauthorized: the session token is
	/// missing, stale or revoked. Callers check for this condition to
	/// trigger a refresh-token exchange.
	#[error("authorization error")]
	Unauthorized,

	/// A grant other than the two supported kinds was requested; carries
	/// the offending value.
	#[error("grant_type `{0}` not supported")]
	UnsupportedGrant(String),
}

impl Error {
	pub fn request(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("request error: {msg}");
		Self::Request(msg)
	}

	pub fn response(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("response error: {msg}");
		Self::Response(msg)
	}
}

/// HTTP client of the Strava service.
///
/// Owns the transport, the configuration and the session state. The
/// session fields are mutated only through `&mut self` setters, so
/// exclusive access is enforced by the borrow checker; wrap the client in
/// a lock to share it between tasks.
#[derive(Debug, Clone)]
pub struct Strava<C> {
	http: C,
	config: Config,
	access_token: String,
	user_id: u64,
}

#[cfg(feature = "reqwest")]
impl Strava<reqwest::Client> {
	/// Creates a client from the given config, applying
	/// [`Config::timeout`] to the transport.
	pub fn new(config: Config) -> Result<Self, Error> {
		let mut builder = reqwest::Client::builder();

		if config.timeout > 0 {
			builder = builder.timeout(std::time::Duration::from_secs(config.timeout));
		}

		let http = builder.build().map_err(Error::request)?;

		Ok(Self::with_http_client(config, http))
	}

	/// Creates a client from `STRAVA_`-prefixed environment variables.
	pub fn from_env() -> Result<Self, Error> {
		Self::new(Config::from_env())
	}
}

impl<C> Strava<C>
where
	C: HttpClient,
{
	/// Creates a client using `http` to execute requests.
	pub fn with_http_client(config: Config, http: C) -> Self {
		Self {
			http,
			config,
			access_token: String::new(),
			user_id: 0,
		}
	}

	/// Currently set session access token.
	pub fn access_token(&self) -> &str {
		&self.access_token
	}

	/// Currently set default user id.
	pub fn user_id(&self) -> u64 {
		self.user_id
	}

	/// Sends one request and returns the raw response.
	///
	/// The URL query string is rebuilt from `params.queries`, and a 401
	/// status is reported as [`Error::Unauthorized`] whatever the
	/// endpoint. Typed operations go through this method; it is public so
	/// callers can reach endpoints the typed surface does not cover.
	pub async fn request(
		&self,
		method: Method,
		url: &str,
		params: RequestParams,
	) -> Result<Response<Vec<u8>>, Error> {
		let url = Url::parse(url).map_err(Error::request)?;
		let request = build_request(method, url, &params, &self.access_token)?;

		let response = self.http.send(request).await?;

		if response.status() == StatusCode::UNAUTHORIZED {
			return Err(Error::Unauthorized);
		}

		Ok(response)
	}

	/// Sends a GET request to an endpoint under the configured host.
	pub async fn get(
		&self,
		endpoint: &str,
		params: RequestParams,
	) -> Result<Response<Vec<u8>>, Error> {
		let url = format!("{}{}", self.config.host, endpoint);
		self.request(Method::GET, &url, params).await
	}

	/// Sends a POST request to an endpoint under the configured host.
	pub async fn post(
		&self,
		endpoint: &str,
		params: RequestParams,
	) -> Result<Response<Vec<u8>>, Error> {
		let url = format!("{}{}", self.config.host, endpoint);
		self.request(Method::POST, &url, params).await
	}
}

impl<C> Client for Strava<C>
where
	C: HttpClient,
{
	fn authorization_url(&self, state: &str) -> String {
		authorization::authorization_url(&self.config, state)
	}

	async fn authorization_access_token(
		&self,
		token: &str,
		grant: &str,
	) -> Result<AccessToken, Error> {
		let queries = authorization::token_queries(&self.config, token, grant)?;

		let response = self
			.request(
				Method::POST,
				authorization::TOKEN_ENDPOINT,
				RequestParams {
					queries,
					..Default::default()
				},
			)
			.await?;

		serde_json::from_slice(response.body()).map_err(Error::response)
	}

	async fn activity(&self, id: u64) -> Result<Activity, Error> {
		let response = self
			.get(
				&activities::activity_endpoint(id),
				RequestParams {
					with_bearer: true,
					..Default::default()
				},
			)
			.await?;

		activities::decode_or_default(&response)
	}

	async fn activities(&self, request: ActivitiesRequest) -> Result<Vec<Activity>, Error> {
		let response = self
			.get(
				activities::ACTIVITIES_ENDPOINT,
				RequestParams {
					with_bearer: true,
					queries: request.queries(),
					..Default::default()
				},
			)
			.await?;

		activities::decode_or_default(&response)
	}

	fn set_access_token(&mut self, token: impl Into<String>) {
		self.access_token = token.into();
	}

	fn set_user_id(&mut self, id: u64) {
		self.user_id = id;
	}
}
