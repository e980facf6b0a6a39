//! In-memory state shared by all route handlers.

use payloads::responses::{RawBooking, Workout};
use payloads::{BookingId, WorkoutId, requests};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email address is already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Reset code is invalid or has expired")]
    InvalidResetCode,
    #[error("Workout not found")]
    WorkoutNotFound,
    #[error("Workout is already booked by this user")]
    AlreadyBooked,
    #[error("Booking not found")]
    BookingNotFound,
}

struct User {
    password: String,
}

#[derive(Default)]
struct Inner {
    /// Keyed by normalized email
    users: HashMap<String, User>,
    /// Outstanding reset codes, keyed by normalized email
    reset_codes: HashMap<String, String>,
    workouts: Vec<Workout>,
    bookings: Vec<RawBooking>,
    last_booking_id: i64,
}

#[derive(Default)]
pub struct Store {
    inner: Mutex<Inner>,
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Store {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // recover from a poisoned lock
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn register(
        &self,
        details: &requests::Register,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let email = normalize(&details.email);
        if inner.users.contains_key(&email) {
            return Err(StoreError::EmailTaken);
        }
        inner.users.insert(
            email,
            User {
                password: details.password.clone(),
            },
        );
        Ok(())
    }

    /// Returns the email the account was registered with.
    pub fn sign_in(
        &self,
        credentials: &requests::SignIn,
    ) -> Result<String, StoreError> {
        let inner = self.lock();
        let email = normalize(&credentials.email);
        match inner.users.get(&email) {
            Some(user) if user.password == credentials.password => Ok(email),
            _ => Err(StoreError::InvalidCredentials),
        }
    }

    /// Issue a fresh reset code. Unknown addresses get none, but callers
    /// must not reveal that to the requester.
    pub fn issue_reset_code(&self, email: &str) -> Option<String> {
        let mut inner = self.lock();
        let email = normalize(email);
        if !inner.users.contains_key(&email) {
            return None;
        }
        let code = Uuid::new_v4().to_string();
        inner.reset_codes.insert(email, code.clone());
        Some(code)
    }

    pub fn reset_code_for(&self, email: &str) -> Option<String> {
        self.lock().reset_codes.get(&normalize(email)).cloned()
    }

    /// Consumes the reset code on success.
    pub fn reset_password(
        &self,
        details: &requests::ResetPassword,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let email = normalize(&details.email);
        if inner.reset_codes.get(&email) != Some(&details.reset_code) {
            return Err(StoreError::InvalidResetCode);
        }
        let user = inner
            .users
            .get_mut(&email)
            .ok_or(StoreError::InvalidResetCode)?;
        user.password = details.password.clone();
        inner.reset_codes.remove(&email);
        Ok(())
    }

    pub fn add_workout(&self, workout: Workout) {
        self.lock().workouts.push(workout);
    }

    /// Catalog listing, ordered by start time. The list endpoint omits
    /// descriptions.
    pub fn workouts(&self) -> Vec<Workout> {
        let mut workouts: Vec<Workout> = self
            .lock()
            .workouts
            .iter()
            .cloned()
            .map(|workout| Workout {
                description: None,
                ..workout
            })
            .collect();
        workouts.sort_by_key(|workout| workout.start_time);
        workouts
    }

    pub fn workout(&self, workout_id: &WorkoutId) -> Result<Workout, StoreError> {
        self.lock()
            .workouts
            .iter()
            .find(|workout| &workout.id == workout_id)
            .cloned()
            .ok_or(StoreError::WorkoutNotFound)
    }

    pub fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<RawBooking, StoreError> {
        let mut inner = self.lock();
        let email = normalize(&details.user_email);
        if !inner
            .workouts
            .iter()
            .any(|workout| workout.id == details.workout_identifier)
        {
            return Err(StoreError::WorkoutNotFound);
        }
        if inner.bookings.iter().any(|booking| {
            booking.user_email == email
                && booking.workout_identifier == details.workout_identifier
        }) {
            return Err(StoreError::AlreadyBooked);
        }

        inner.last_booking_id += 1;
        let booking = RawBooking {
            id: BookingId(inner.last_booking_id),
            user_email: email,
            workout_identifier: details.workout_identifier.clone(),
        };
        inner.bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn delete_booking(
        &self,
        user_email: &str,
        workout_id: &WorkoutId,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let email = normalize(user_email);
        let before = inner.bookings.len();
        inner.bookings.retain(|booking| {
            !(booking.user_email == email
                && &booking.workout_identifier == workout_id)
        });
        if inner.bookings.len() == before {
            return Err(StoreError::BookingNotFound);
        }
        Ok(())
    }

    pub fn bookings_for(&self, user_email: &str) -> Vec<RawBooking> {
        let email = normalize(user_email);
        self.lock()
            .bookings
            .iter()
            .filter(|booking| booking.user_email == email)
            .cloned()
            .collect()
    }
}
