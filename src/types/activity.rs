use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A recorded activity.
///
/// See: <https://developers.strava.com/docs/reference/#api-models-DetailedActivity>
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
	pub id: u64,
	pub external_id: String,
	pub upload_id: i64,
	pub name: String,
	pub description: String,

	/// Activity type, e.g. `Run` or `Ride`.
	#[serde(rename = "type")]
	pub activity_type: String,

	/// Distance in meters.
	pub distance: f64,

	/// Moving time in seconds.
	pub moving_time: u64,

	/// Elapsed time in seconds.
	pub elapsed_time: u64,

	pub average_speed: f64,
	pub average_cadence: f64,
	#[serde(rename = "average_heartrate")]
	pub average_heart_rate: f64,
	pub max_speed: f64,
	#[serde(rename = "max_heartrate")]
	pub max_heart_rate: f64,
	pub max_watts: f64,

	/// Relative effort score of the activity.
	#[serde(rename = "suffer_score")]
	pub score: f64,

	pub calories: f64,
	pub total_elevation_gain: f64,
	#[serde(rename = "elev_high")]
	pub highest_elevation: f64,
	#[serde(rename = "elev_low")]
	pub lowest_elevation: f64,

	/// `[latitude, longitude]` of the start point; empty when the activity
	/// carries no GPS data.
	#[serde(rename = "start_latlng")]
	pub start_location: Vec<f64>,

	/// `[latitude, longitude]` of the end point.
	#[serde(rename = "end_latlng")]
	pub end_location: Vec<f64>,

	pub device_name: String,

	#[serde(rename = "start_date")]
	pub start_at: Option<DateTime<Utc>>,

	/// Metric splits of the activity.
	#[serde(rename = "splits_metric")]
	pub splits: Vec<Split>,

	pub laps: Vec<Lap>,

	pub athlete: MetaAthlete,

	pub map: PolylineMap,
}

/// A per-kilometer split of an activity.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Split {
	pub distance: f64,
	pub elevation_difference: f64,
	pub elapsed_time: u64,
	pub moving_time: u64,
	pub average_speed: f64,
	pub average_grade_adjusted_speed: f64,
	#[serde(rename = "average_heartrate")]
	pub average_heart_rate: f64,
	pub pace_zone: u64,
}

/// A lap of an activity.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lap {
	pub id: u64,
	pub split: u64,
	#[serde(rename = "lap_index")]
	pub index: u64,
	pub name: String,
	pub distance: f64,
	pub elapsed_time: u64,
	pub moving_time: u64,
	pub average_speed: f64,
	#[serde(rename = "average_heartrate")]
	pub average_heart_rate: f64,
	pub average_cadence: f64,
	pub max_speed: f64,
	#[serde(rename = "max_heartrate")]
	pub max_heart_rate: f64,
	pub total_elevation_gain: f64,
	pub pace_zone: u64,
}

/// Athlete reference carried by an activity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaAthlete {
	pub id: u64,
}

/// Encoded GPS traces of an activity.
///
/// Polylines are compact encoded path strings, passed through opaquely.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineMap {
	pub id: String,
	pub polyline: String,
	pub summary_polyline: String,
}
