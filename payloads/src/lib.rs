pub mod api_client;
pub mod http;
pub mod requests;
pub mod responses;

pub use api_client::{ClientError, Endpoints, ServiceClient};

use serde::{Deserialize, Serialize};

/// Identifier of a scheduled workout session in the catalog service.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct WorkoutId(pub String);

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct BookingId(pub i64);
