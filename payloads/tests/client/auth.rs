use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{
    alice_registration, alice_sign_in, assert_status_code, spawn_app,
};

#[tokio::test]
async fn sign_in_returns_email() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.create_alice_user().await?;
    let signed_in = app.sign_in_alice().await?;
    assert_eq!(signed_in.email, "alice@example.com");

    Ok(())
}

#[tokio::test]
async fn sign_in_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let body = requests::SignIn {
        password: "Wrongpassword1".into(),
        ..alice_sign_in()
    };
    let result = app.client.sign_in(&body).await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(
                text,
                "Authentication failed: Invalid email or password"
            );
        }
        _ => {
            panic!("Expected APIError");
        }
    }

    Ok(())
}

#[tokio::test]
async fn sign_in_ignores_email_case() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let body = requests::SignIn {
        email: " Alice@Example.com".into(),
        ..alice_sign_in()
    };
    let signed_in = app.client.sign_in(&body).await?;
    assert_eq!(signed_in.email, "alice@example.com");

    Ok(())
}

#[tokio::test]
async fn register_twice_conflicts() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.create_alice_user().await?;
    let result = app.client.register(&alice_registration()).await;
    assert_status_code(result, StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn register_validates_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let weak = requests::Register {
        password: "password".into(),
        confirm_password: "password".into(),
        ..alice_registration()
    };
    assert_status_code(app.client.register(&weak).await, StatusCode::BAD_REQUEST);

    let mismatched = requests::Register {
        confirm_password: "Supersecret2".into(),
        ..alice_registration()
    };
    assert_status_code(
        app.client.register(&mismatched).await,
        StatusCode::BAD_REQUEST,
    );

    let bad_email = requests::Register {
        email: "alice.example.com".into(),
        ..alice_registration()
    };
    assert_status_code(
        app.client.register(&bad_email).await,
        StatusCode::BAD_REQUEST,
    );

    // nothing was created along the way
    app.create_alice_user().await?;

    Ok(())
}

#[tokio::test]
async fn forgot_password_for_unknown_email_succeeds() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::ForgotPassword {
        email: "nobody@example.com".into(),
    };
    app.client.forgot_password(&body).await?;
    assert_eq!(app.store.reset_code_for("nobody@example.com"), None);

    Ok(())
}

#[tokio::test]
async fn password_reset_flow() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let email = alice_registration().email;

    let code = app.reset_code(&email).await?;
    let new_password = "Newpassword9".to_string();
    let mut body = requests::ResetPassword {
        email: email.clone(),
        password: new_password.clone(),
        confirm_password: new_password.clone(),
        reset_code: "not-the-code".into(),
    };

    // a wrong code is rejected
    let result = app.client.reset_password(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    body.reset_code = code;
    app.client.reset_password(&body).await?;

    // the old password no longer works
    let result = app.client.sign_in(&alice_sign_in()).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    let credentials = requests::SignIn {
        email: email.clone(),
        password: new_password,
    };
    app.client.sign_in(&credentials).await?;

    // codes are single use
    let result = app.client.reset_password(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}
