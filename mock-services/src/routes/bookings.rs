use actix_web::{HttpResponse, delete, get, post, web};
use payloads::{WorkoutId, requests};

use crate::store::Store;

use super::APIError;

#[tracing::instrument(skip(store))]
#[get("/Bookings/GetRawBookings/{user_email}")]
pub async fn raw_bookings(
    path: web::Path<String>,
    store: web::Data<Store>,
) -> HttpResponse {
    HttpResponse::Ok().json(store.bookings_for(&path))
}

#[tracing::instrument(skip(store))]
#[post("/Bookings")]
pub async fn create_booking(
    details: web::Json<requests::CreateBooking>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let booking = store.create_booking(&details)?;
    Ok(HttpResponse::Created().json(booking))
}

#[tracing::instrument(skip(store))]
#[delete("/Bookings/{user_email}/{workout_id}")]
pub async fn delete_booking(
    path: web::Path<(String, WorkoutId)>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let (user_email, workout_id) = path.into_inner();
    store.delete_booking(&user_email, &workout_id)?;
    Ok(HttpResponse::NoContent().finish())
}
