//! Booking rules shared by the workouts and my-bookings pages.

use futures::future::try_join_all;
use payloads::requests::CreateBooking;
use payloads::responses::{BookedWorkout, RawBooking, Workout};
use payloads::{ClientError, WorkoutId};
use reqwest::StatusCode;
use std::future::Future;
use yewdux::Dispatch;

use crate::fetch::FetchError;
use crate::get_service_client;
use crate::state::State;

pub const SIGN_IN_REQUIRED: &str = "You must be signed in to book a workout.";
pub const ALREADY_BOOKED: &str = "You have already booked this workout.";
pub const NO_LONGER_AVAILABLE: &str = "This workout is no longer available.";

/// Build the booking request for the signed-in user, or the message to show
/// instead when nobody is signed in.
pub fn booking_request(
    session_email: Option<&str>,
    workout_id: &WorkoutId,
) -> Result<CreateBooking, &'static str> {
    match session_email.map(str::trim) {
        Some(email) if !email.is_empty() => Ok(CreateBooking {
            user_email: email.to_string(),
            workout_identifier: workout_id.clone(),
        }),
        _ => Err(SIGN_IN_REQUIRED),
    }
}

/// What to tell the user when booking failed. `None` for a cancelled
/// request, which isn't a failure.
pub fn booking_failure_message(error: &FetchError) -> Option<String> {
    if error.is_cancelled() {
        return None;
    }
    let message = match error.status() {
        Some(StatusCode::CONFLICT) => ALREADY_BOOKED.to_string(),
        Some(StatusCode::NOT_FOUND) => NO_LONGER_AVAILABLE.to_string(),
        _ => error.to_string(),
    };
    Some(message)
}

/// Join raw bookings with the workouts they reference, soonest first.
///
/// Lookups run concurrently. A booking whose workout has been removed from
/// the catalog (404) is left out; any other lookup failure fails the join.
pub async fn join_bookings<F, Fut>(
    raw: Vec<RawBooking>,
    lookup: F,
) -> Result<Vec<BookedWorkout>, ClientError>
where
    F: Fn(WorkoutId) -> Fut,
    Fut: Future<Output = Result<Workout, ClientError>>,
{
    let lookups = raw.into_iter().map(|booking| {
        let workout = lookup(booking.workout_identifier.clone());
        async move {
            match workout.await {
                Ok(workout) => Ok(Some(BookedWorkout {
                    booking_id: booking.id,
                    workout,
                })),
                Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                    tracing::debug!(
                        workout = %booking.workout_identifier,
                        "booked workout no longer in catalog"
                    );
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        }
    });

    let mut booked: Vec<BookedWorkout> =
        try_join_all(lookups).await?.into_iter().flatten().collect();
    booked.sort_by(|a, b| {
        a.workout
            .start_time
            .cmp(&b.workout.start_time)
            .then(a.booking_id.0.cmp(&b.booking_id.0))
    });
    Ok(booked)
}

/// Fetch a user's bookings with their workout details. Workouts already in
/// the cache aren't requested again, and everything fetched is cached.
pub async fn load_booked_workouts(
    user_email: String,
    dispatch: Dispatch<State>,
) -> Result<Vec<BookedWorkout>, ClientError> {
    let client = get_service_client();
    let raw = client.raw_bookings(&user_email).await?;
    let cache = dispatch.get();

    let booked = join_bookings(raw, |workout_id| {
        let cached = cache.cached_workout(&workout_id).cloned();
        let client = &client;
        async move {
            match cached {
                Some(workout) => Ok(workout),
                None => client.get_workout(&workout_id).await,
            }
        }
    })
    .await?;

    let workouts: Vec<Workout> =
        booked.iter().map(|b| b.workout.clone()).collect();
    dispatch.reduce_mut(|state| state.cache_workouts(workouts));
    Ok(booked)
}
