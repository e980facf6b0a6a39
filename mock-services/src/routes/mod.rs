pub mod auth;
pub mod bookings;
pub mod workouts;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};

use crate::store::StoreError;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(auth::register)
        .service(auth::sign_in)
        .service(auth::forgot_password)
        .service(auth::reset_password)
        .service(workouts::list_workouts)
        .service(workouts::get_workout)
        .service(bookings::raw_bookings)
        .service(bookings::create_booking)
        .service(bookings::delete_booking)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Conflict")]
    Conflict(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::AuthError(e) => {
                HttpResponse::Unauthorized().body(format!("{self}: {e}"))
            }
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::Conflict(e) => {
                HttpResponse::Conflict().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(e) => {
                tracing::error!("{e:#}");
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmailTaken | StoreError::AlreadyBooked => {
                APIError::Conflict(e.into())
            }
            StoreError::InvalidCredentials => APIError::AuthError(e.into()),
            StoreError::InvalidResetCode => APIError::BadRequest(e.into()),
            StoreError::WorkoutNotFound | StoreError::BookingNotFound => {
                APIError::NotFound(e.into())
            }
        }
    }
}

/// Reject a request with the first failing validation message, if any.
fn check(messages: &[Option<&'static str>]) -> Result<(), APIError> {
    match messages.iter().flatten().next() {
        Some(message) => Err(APIError::BadRequest(anyhow::anyhow!(*message))),
        None => Ok(()),
    }
}
