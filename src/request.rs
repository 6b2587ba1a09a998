//! Per-call request parameters and their wire encoding.
use http::{HeaderValue, Method, Request, header};
use serde_json::Value;
use url::Url;

use crate::client::Error;
use crate::transport::{ACCEPT_JSON_UTF8, APPLICATION_JSON, content_type};

/// Flat mapping of parameter names to scalar values.
pub type Params = serde_json::Map<String, Value>;

/// Parameters of a single API request.
///
/// A value is built per call, consumed by the request builder and
/// discarded. Queries and body values are independent channels: queries
/// always travel in the URL, values only in POST bodies.
#[derive(Debug, Default, Clone)]
pub struct RequestParams {
	/// Query-string parameters, appended to the URL for every method.
	pub queries: Params,

	/// Body parameters, encoded into POST bodies per the content type.
	pub values: Params,

	/// Attach `Authorization: Bearer` with the current session token.
	pub with_bearer: bool,

	/// Encode the POST body as `application/x-www-form-urlencoded`
	/// instead of JSON.
	pub with_form_url_encoded: bool,
}

/// Builds the outgoing request for `method` and `url`.
///
/// The URL query string is rebuilt from `params.queries`; the bearer token
/// is attached verbatim when requested, so a stale or empty token simply
/// produces an unauthenticated-looking request.
pub(crate) fn build_request(
	method: Method,
	mut url: Url,
	params: &RequestParams,
	access_token: &str,
) -> Result<Request<Vec<u8>>, Error> {
	if !params.queries.is_empty() {
		let queries = serde_html_form::to_string(&params.queries).map_err(Error::request)?;
		url.set_query(Some(&queries));
	}

	let content_type = content_type(&method, params.with_form_url_encoded);
	let body = encode_values(&method, &content_type, &params.values)?;

	let mut builder = Request::builder()
		.method(method)
		.uri(url.as_str())
		.header(header::CONTENT_TYPE, content_type)
		.header(header::ACCEPT, ACCEPT_JSON_UTF8);

	if params.with_bearer {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {access_token}"));
	}

	builder.body(body).map_err(Error::request)
}

/// Encodes body values for POST requests; other methods carry no body.
fn encode_values(
	method: &Method,
	content_type: &HeaderValue,
	values: &Params,
) -> Result<Vec<u8>, Error> {
	if *method != Method::POST || values.is_empty() {
		return Ok(Vec::new());
	}

	if *content_type == APPLICATION_JSON {
		serde_json::to_vec(values).map_err(Error::request)
	} else {
		serde_html_form::to_string(values)
			.map(String::into_bytes)
			.map_err(Error::request)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transport::APPLICATION_X_WWW_FORM_URLENCODED;

	fn url() -> Url {
		Url::parse("https://www.strava.com/api/v3/activities").unwrap()
	}

	fn queries() -> Params {
		let mut queries = Params::new();
		queries.insert("page".to_owned(), 2.into());
		queries.insert("per_page".to_owned(), 30.into());
		queries
	}

	#[test]
	fn bearer_token_is_attached_when_requested() {
		let params = RequestParams {
			with_bearer: true,
			..Default::default()
		};
		let request = build_request(Method::GET, url(), &params, "abc123").unwrap();

		assert_eq!(
			request.headers().get(header::AUTHORIZATION).unwrap(),
			"Bearer abc123"
		);
	}

	#[test]
	fn no_bearer_token_by_default() {
		let request = build_request(Method::GET, url(), &RequestParams::default(), "abc123")
			.unwrap();

		assert!(request.headers().get(header::AUTHORIZATION).is_none());
	}

	#[test]
	fn accept_header_is_always_set() {
		let request = build_request(Method::POST, url(), &RequestParams::default(), "")
			.unwrap();

		assert_eq!(
			request.headers().get(header::ACCEPT).unwrap(),
			"application/json;charset=UTF-8"
		);
	}

	#[test]
	fn content_type_follows_the_decision_table() {
		let json_post =
			build_request(Method::POST, url(), &RequestParams::default(), "").unwrap();
		assert_eq!(
			json_post.headers().get(header::CONTENT_TYPE).unwrap(),
			&APPLICATION_JSON
		);

		let form_post = build_request(
			Method::POST,
			url(),
			&RequestParams {
				with_form_url_encoded: true,
				..Default::default()
			},
			"",
		)
		.unwrap();
		assert_eq!(
			form_post.headers().get(header::CONTENT_TYPE).unwrap(),
			&APPLICATION_X_WWW_FORM_URLENCODED
		);

		let get = build_request(Method::GET, url(), &RequestParams::default(), "").unwrap();
		assert_eq!(
			get.headers().get(header::CONTENT_TYPE).unwrap(),
			&APPLICATION_X_WWW_FORM_URLENCODED
		);
	}

	#[test]
	fn queries_are_encoded_into_the_url_for_get() {
		let params = RequestParams {
			queries: queries(),
			..Default::default()
		};
		let request = build_request(Method::GET, url(), &params, "").unwrap();

		let query = request.uri().query().unwrap();
		assert!(query.contains("page=2"));
		assert!(query.contains("per_page=30"));
	}

	#[test]
	fn queries_are_encoded_into_the_url_for_post() {
		let params = RequestParams {
			queries: queries(),
			..Default::default()
		};
		let request = build_request(Method::POST, url(), &params, "").unwrap();

		let query = request.uri().query().unwrap();
		assert!(query.contains("page=2"));
		assert!(query.contains("per_page=30"));
	}

	#[test]
	fn query_values_are_form_encoded() {
		let mut queries = Params::new();
		queries.insert("state".to_owned(), "a value/with spaces".into());

		let params = RequestParams {
			queries,
			..Default::default()
		};
		let request = build_request(Method::GET, url(), &params, "").unwrap();

		assert_eq!(
			request.uri().query().unwrap(),
			"state=a+value%2Fwith+spaces"
		);
	}

	#[test]
	fn post_values_are_encoded_as_json_body() {
		let mut values = Params::new();
		values.insert("name".to_owned(), "Lunch Ride".into());
		values.insert("trainer".to_owned(), true.into());

		let params = RequestParams {
			values,
			..Default::default()
		};
		let request = build_request(Method::POST, url(), &params, "").unwrap();

		let body: Value = serde_json::from_slice(request.body()).unwrap();
		assert_eq!(body["name"], "Lunch Ride");
		assert_eq!(body["trainer"], true);
	}

	#[test]
	fn post_values_are_form_encoded_on_request() {
		let mut values = Params::new();
		values.insert("name".to_owned(), "Lunch Ride".into());

		let params = RequestParams {
			values,
			with_form_url_encoded: true,
			..Default::default()
		};
		let request = build_request(Method::POST, url(), &params, "").unwrap();

		assert_eq!(request.body().as_slice(), b"name=Lunch+Ride");
	}

	#[test]
	fn get_requests_carry_no_body() {
		let mut values = Params::new();
		values.insert("ignored".to_owned(), 1.into());

		let params = RequestParams {
			values,
			..Default::default()
		};
		let request = build_request(Method::GET, url(), &params, "").unwrap();

		assert!(request.body().is_empty());
	}
}
