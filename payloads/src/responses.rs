use crate::{BookingId, WorkoutId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedIn {
    #[serde(alias = "Email")]
    pub email: String,
}

/// A scheduled workout session from the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub title: String,
    pub location: String,
    pub start_time: Timestamp,
    pub instructor: String,
    /// Only the detail endpoint fills this in. Some deployments send it as
    /// `Description`.
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
}

/// A booking as stored by the booking service: the workout is referenced by
/// identifier only and needs a catalog lookup for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBooking {
    pub id: BookingId,
    pub user_email: String,
    pub workout_identifier: WorkoutId,
}

/// A raw booking joined with the details of the workout it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedWorkout {
    pub booking_id: BookingId,
    pub workout: Workout,
}
