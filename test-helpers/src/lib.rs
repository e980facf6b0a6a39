pub mod mock;

use actix_web::web;
use jiff::{Span, Timestamp};
use mock_services::{Config, Store, telemetry};
use payloads::responses::Workout;
use payloads::{Endpoints, ServiceClient, WorkoutId, requests, responses};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    pub client: ServiceClient,
    /// Direct handle on the mock services' state, for seeding and for
    /// reading values a real deployment would only send by email.
    pub store: web::Data<Store>,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    pub async fn create_alice_user(&self) -> anyhow::Result<()> {
        self.client.register(&alice_registration()).await?;
        Ok(())
    }

    pub async fn create_bob_user(&self) -> anyhow::Result<()> {
        self.client.register(&bob_registration()).await?;
        Ok(())
    }

    pub async fn sign_in_alice(&self) -> anyhow::Result<responses::SignedIn> {
        Ok(self.client.sign_in(&alice_sign_in()).await?)
    }

    /// Add a workout starting `hours_from_now` hours from now.
    pub fn add_workout(
        &self,
        id: &str,
        title: &str,
        hours_from_now: i64,
    ) -> Workout {
        let workout = workout_fixture(
            id,
            title,
            Timestamp::now() + Span::new().hours(hours_from_now),
        );
        self.store.add_workout(workout.clone());
        workout
    }

    /// Request a reset link for `email` and return the code it would carry.
    pub async fn reset_code(&self, email: &str) -> anyhow::Result<String> {
        let details = requests::ForgotPassword {
            email: email.to_string(),
        };
        self.client.forgot_password(&details).await?;
        self.store
            .reset_code_for(email)
            .ok_or_else(|| anyhow::anyhow!("no reset code issued for {email}"))
    }

    pub async fn book(
        &self,
        user_email: &str,
        workout_id: &WorkoutId,
    ) -> anyhow::Result<responses::RawBooking> {
        let details = requests::CreateBooking {
            user_email: user_email.to_string(),
            workout_identifier: workout_id.clone(),
        };
        Ok(self.client.create_booking(&details).await?)
    }
}

pub fn alice_registration() -> requests::Register {
    requests::Register {
        first_name: "Alice".into(),
        last_name: "Andersson".into(),
        email: "alice@example.com".into(),
        password: "Supersecret1".into(),
        confirm_password: "Supersecret1".into(),
    }
}

pub fn alice_sign_in() -> requests::SignIn {
    to_sign_in(&alice_registration())
}

pub fn bob_registration() -> requests::Register {
    requests::Register {
        first_name: "Bob".into(),
        last_name: "Berg".into(),
        email: "bob@example.com".into(),
        password: "Bobspassword2".into(),
        confirm_password: "Bobspassword2".into(),
    }
}

pub fn bob_sign_in() -> requests::SignIn {
    to_sign_in(&bob_registration())
}

pub fn to_sign_in(registration: &requests::Register) -> requests::SignIn {
    requests::SignIn {
        email: registration.email.clone(),
        password: registration.password.clone(),
    }
}

pub fn workout_fixture(id: &str, title: &str, start_time: Timestamp) -> Workout {
    Workout {
        id: WorkoutId::from(id),
        title: title.into(),
        location: "Studio 1".into(),
        start_time,
        instructor: "Maja".into(),
        description: Some(format!("{title} for all levels")),
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with_config(Config {
        port,
        ..Default::default()
    })
    .await
}

/// Start the mock services with an explicit config. Logging is only set up
/// if the caller hasn't already installed a subscriber.
pub async fn spawn_app_with_config(mut config: Config) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = web::Data::new(Store::default());

    let server = mock_services::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: ServiceClient {
            endpoints: Endpoints::single_origin(format!(
                "http://127.0.0.1:{}",
                config.port
            )),
            inner_client: reqwest::Client::new(),
        },
        store,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of a service call results in a specific status
/// code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
