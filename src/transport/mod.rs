//! HTTP transport abstraction and content type selection.
use http::{HeaderValue, Method};

use crate::client::Error;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "reqwest")]
mod reqwest;

/// `Content-Type: application/json` header value.
pub const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue =
	HeaderValue::from_static("application/x-www-form-urlencoded");

/// `Accept` header value sent with every request.
pub const ACCEPT_JSON_UTF8: HeaderValue =
	HeaderValue::from_static("application/json;charset=UTF-8");

/// Selects the `Content-Type` for a request.
///
/// POST requests carry JSON unless form encoding was requested explicitly;
/// every other combination, including all GET requests, uses
/// `application/x-www-form-urlencoded`.
pub fn content_type(method: &Method, form_url_encoded: bool) -> HeaderValue {
	if *method == Method::POST && !form_url_encoded {
		APPLICATION_JSON
	} else {
		APPLICATION_X_WWW_FORM_URLENCODED
	}
}

/// Capability to execute one HTTP round-trip.
///
/// Implementations receive the fully built request and return the response
/// with its body read into an owned buffer.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error>;
}

impl<T> HttpClient for &T
where
	T: HttpClient,
{
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error> {
		T::send(*self, request).await
	}
}
