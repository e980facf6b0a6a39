use actix_web::{HttpResponse, post, web};
use payloads::{requests, responses};

use crate::store::Store;

use super::{APIError, check};

#[tracing::instrument(skip(details, store), fields(email = %details.email))]
#[post("/Auth/register")]
pub async fn register(
    details: web::Json<requests::Register>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check(&[
        requests::validate_name(&details.first_name).error_message(),
        requests::validate_name(&details.last_name).error_message(),
        requests::validate_email(&details.email).error_message(),
        requests::validate_password(&details.password).error_message(),
    ])?;
    if details.password != details.confirm_password {
        return Err(APIError::BadRequest(anyhow::anyhow!(
            "Passwords do not match"
        )));
    }

    store.register(&details)?;
    Ok(HttpResponse::Created().finish())
}

#[tracing::instrument(skip(credentials, store), fields(email = %credentials.email))]
#[post("/Auth/signin")]
pub async fn sign_in(
    credentials: web::Json<requests::SignIn>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let email = store.sign_in(&credentials)?;
    Ok(HttpResponse::Ok().json(responses::SignedIn { email }))
}

/// Always succeeds so that the response doesn't reveal which addresses have
/// accounts.
#[tracing::instrument(skip(details, store), fields(email = %details.email))]
#[post("/Auth/forgot-password")]
pub async fn forgot_password(
    details: web::Json<requests::ForgotPassword>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check(&[requests::validate_email(&details.email).error_message()])?;
    if store.issue_reset_code(&details.email).is_some() {
        tracing::info!("issued password reset code");
    }
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(details, store), fields(email = %details.email))]
#[post("/Auth/reset-password")]
pub async fn reset_password(
    details: web::Json<requests::ResetPassword>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check(&[requests::validate_password(&details.password).error_message()])?;
    if details.password != details.confirm_password {
        return Err(APIError::BadRequest(anyhow::anyhow!(
            "Passwords do not match"
        )));
    }

    store.reset_password(&details)?;
    Ok(HttpResponse::Ok().finish())
}
