//! Activity resources.
use chrono::{DateTime, Utc};
use http::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::client::Error;
use crate::request::Params;

/// Collection endpoint, relative to the configured host.
pub(crate) const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Per-id endpoint, relative to the configured host.
pub(crate) fn activity_endpoint(id: u64) -> String {
	format!("{ACTIVITIES_ENDPOINT}/{id}")
}

/// Filter for the activity collection endpoint.
///
/// Only non-default fields are sent; a default request returns the first
/// page with the service-side page size.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActivitiesRequest {
	/// Only activities recorded before this instant.
	pub before: Option<DateTime<Utc>>,

	/// Only activities recorded after this instant.
	pub after: Option<DateTime<Utc>>,

	/// Page number, starting at 1.
	pub page: u64,

	/// Number of activities per page.
	pub per_page: u64,
}

impl ActivitiesRequest {
	/// Converts the request to its query mapping, date bounds as unix
	/// timestamps.
	pub fn queries(&self) -> Params {
		let mut queries = Params::new();

		if let Some(after) = self.after {
			queries.insert("after".to_owned(), after.timestamp().into());
		}

		if let Some(before) = self.before {
			queries.insert("before".to_owned(), before.timestamp().into());
		}

		if self.page > 0 {
			queries.insert("page".to_owned(), self.page.into());
		}

		if self.per_page > 0 {
			queries.insert("per_page".to_owned(), self.per_page.into());
		}

		queries
	}
}

/// Decodes a 200 response body, mapping any other status to the type's
/// default value.
///
/// The service reports missing or inaccessible resources with plain
/// non-success statuses; those intentionally decode to an empty value
/// instead of an error. Callers that need the status itself can go through
/// [`Strava::get`](crate::Strava::get) directly.
pub(crate) fn decode_or_default<T>(response: &Response<Vec<u8>>) -> Result<T, Error>
where
	T: Default + DeserializeOwned,
{
	if response.status() != StatusCode::OK {
		return Ok(T::default());
	}

	serde_json::from_slice(response.body()).map_err(Error::response)
}
