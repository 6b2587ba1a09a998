//! Canned transport used by unit tests.
use std::sync::Mutex;

use http::{Request, Response, StatusCode};

use crate::client::Error;
use crate::transport::HttpClient;

/// Replays a fixed status and body, recording every request it receives.
pub(crate) struct StaticHttp {
	pub status: StatusCode,
	pub body: &'static str,
	pub requests: Mutex<Vec<Request<Vec<u8>>>>,
}

impl StaticHttp {
	pub fn new(status: StatusCode, body: &'static str) -> Self {
		Self {
			status,
			body,
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn ok(body: &'static str) -> Self {
		Self::new(StatusCode::OK, body)
	}

	pub fn request_count(&self) -> usize {
		self.requests.lock().unwrap().len()
	}
}

impl HttpClient for StaticHttp {
	async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, Error> {
		self.requests.lock().unwrap().push(request);

		Ok(Response::builder()
			.status(self.status)
			.body(self.body.as_bytes().to_vec())
			.unwrap())
	}
}

/// Fails every round-trip with a transport error.
pub(crate) struct FailingHttp;

impl HttpClient for FailingHttp {
	async fn send(&self, _request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, Error> {
		Err(Error::Request("connection refused".to_owned()))
	}
}
