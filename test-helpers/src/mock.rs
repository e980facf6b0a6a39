//! Development dataset for the dev-server.
//!
//! Seeds a week of workouts starting from the current time and a demo
//! account with a couple of bookings, so every page of the UI has something
//! to show right away.

use crate::{TestApp, workout_fixture};
use anyhow::Result;
use jiff::{Span, Timestamp};
use payloads::responses::{RawBooking, Workout};
use payloads::requests;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "Demopassword1";

const SCHEDULE: &[(&str, &str, i64)] = &[
    ("spin-morning", "Spinning", 20),
    ("yoga-evening", "Yin Yoga", 30),
    ("hiit-lunch", "HIIT", 44),
    ("pilates", "Pilates", 54),
    ("boxing", "Boxing Fundamentals", 68),
    ("core", "Core & Mobility", 92),
    ("spin-weekend", "Spinning", 140),
];

pub struct DevDataset {
    pub workouts: Vec<Workout>,
    pub bookings: Vec<RawBooking>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        // start on a whole hour so the schedule reads naturally
        let now = Timestamp::now();
        let start = now - Span::new().seconds(now.as_second() % 3600);

        tracing::info!("🏋️ Adding {} workouts", SCHEDULE.len());
        let workouts: Vec<Workout> = SCHEDULE
            .iter()
            .map(|(id, title, hours)| {
                let workout =
                    workout_fixture(id, title, start + Span::new().hours(*hours));
                app.store.add_workout(workout.clone());
                workout
            })
            .collect();

        tracing::info!("👤 Registering demo account {DEMO_EMAIL}");
        app.client
            .register(&requests::Register {
                first_name: "Demo".into(),
                last_name: "User".into(),
                email: DEMO_EMAIL.into(),
                password: DEMO_PASSWORD.into(),
                confirm_password: DEMO_PASSWORD.into(),
            })
            .await?;

        let mut bookings = Vec::new();
        for workout in workouts.iter().take(2) {
            bookings.push(app.book(DEMO_EMAIL, &workout.id).await?);
        }

        Ok(Self { workouts, bookings })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Dataset summary");
        tracing::info!("   Sign in as {DEMO_EMAIL} / {DEMO_PASSWORD}");
        for workout in &self.workouts {
            let booked = self
                .bookings
                .iter()
                .any(|booking| booking.workout_identifier == workout.id);
            tracing::info!(
                "   {} {} at {}{}",
                workout.id,
                workout.title,
                workout.start_time,
                if booked { " (booked)" } else { "" }
            );
        }
    }
}
