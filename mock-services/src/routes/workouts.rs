use actix_web::{HttpResponse, get, web};
use payloads::WorkoutId;

use crate::store::Store;

use super::APIError;

#[tracing::instrument(skip(store))]
#[get("/workout")]
pub async fn list_workouts(store: web::Data<Store>) -> HttpResponse {
    HttpResponse::Ok().json(store.workouts())
}

#[tracing::instrument(skip(store))]
#[get("/workout/{workout_id}")]
pub async fn get_workout(
    path: web::Path<WorkoutId>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let workout = store.workout(&path)?;
    Ok(HttpResponse::Ok().json(workout))
}
