mod auth;
mod bookings;
mod workouts;

use payloads::http::send_json;
use payloads::responses::Workout;
use reqwest::Method;
use test_helpers::spawn_app;

#[tokio::test]
async fn send_json_returns_payload_unchanged() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let added = app.add_workout("spin", "Spinning", 3);

    let url = app.client.endpoints.workout(&added.id);
    let fetched: Option<Workout> = send_json(
        &app.client.inner_client,
        Method::GET,
        &url,
        &[],
        None,
    )
    .await?;
    assert_eq!(fetched, Some(added));

    Ok(())
}

#[tokio::test]
async fn send_json_reports_status_and_body() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = app.client.endpoints.workout(&"missing".into());
    let result = send_json::<Workout>(
        &app.client.inner_client,
        Method::GET,
        &url,
        &[("X-Request-Source".to_string(), "tests".to_string())],
        None,
    )
    .await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, reqwest::StatusCode::NOT_FOUND);
            assert_eq!(text, "Not found: Workout not found");
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}
