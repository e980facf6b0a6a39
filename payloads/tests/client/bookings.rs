use payloads::http::send_json;
use payloads::requests;
use payloads::responses::RawBooking;
use reqwest::{Method, StatusCode};

use test_helpers::{assert_status_code, spawn_app};

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";

#[tokio::test]
async fn create_and_list_bookings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let spin = app.add_workout("spin", "Spinning", 2);
    let yoga = app.add_workout("yoga", "Yin Yoga", 5);

    let first = app.book(ALICE, &spin.id).await?;
    assert_eq!(first.user_email, ALICE);
    assert_eq!(first.workout_identifier, spin.id);
    app.book(ALICE, &yoga.id).await?;
    app.book(BOB, &yoga.id).await?;

    let alice_bookings = app.client.raw_bookings(ALICE).await?;
    let booked: Vec<_> = alice_bookings
        .iter()
        .map(|b| b.workout_identifier.clone())
        .collect();
    assert_eq!(booked, vec![spin.id, yoga.id]);

    assert_eq!(app.client.raw_bookings(BOB).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn emails_with_reserved_characters() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let spin = app.add_workout("spin", "Spinning", 2);
    let email = "gym+1#a?b@example.com";

    app.book(email, &spin.id).await?;
    let booked = app.client.raw_bookings(email).await?;
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].user_email, email);

    app.client.delete_booking(email, &spin.id).await?;
    assert!(app.client.raw_bookings(email).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn no_bookings_is_empty() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert!(app.client.raw_bookings(ALICE).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn booking_twice_conflicts() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let spin = app.add_workout("spin", "Spinning", 2);

    app.book(ALICE, &spin.id).await?;

    let details = requests::CreateBooking {
        user_email: ALICE.into(),
        workout_identifier: spin.id.clone(),
    };
    let result = app.client.create_booking(&details).await;
    assert_status_code(result, StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn booking_unknown_workout() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = requests::CreateBooking {
        user_email: ALICE.into(),
        workout_identifier: "ghost".into(),
    };
    let result = app.client.create_booking(&details).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn cancel_booking() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let spin = app.add_workout("spin", "Spinning", 2);
    app.book(ALICE, &spin.id).await?;

    app.client.delete_booking(ALICE, &spin.id).await?;
    assert!(app.client.raw_bookings(ALICE).await?.is_empty());

    let result = app.client.delete_booking(ALICE, &spin.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    // the slot is free again
    app.book(ALICE, &spin.id).await?;

    Ok(())
}

#[tokio::test]
async fn send_json_booking_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let spin = app.add_workout("spin", "Spinning", 2);
    let client = &app.client.inner_client;

    let body = serde_json::json!({
        "userEmail": ALICE,
        "workoutIdentifier": &spin.id,
    });
    let created: Option<RawBooking> = send_json(
        client,
        Method::POST,
        &app.client.endpoints.bookings(),
        &[],
        Some(&body),
    )
    .await?;
    let created = created.expect("created booking in body");
    assert_eq!(created.workout_identifier, spin.id);

    // 204 No Content carries no data
    let deleted: Option<serde_json::Value> = send_json(
        client,
        Method::DELETE,
        &app.client.endpoints.booking(ALICE, &spin.id),
        &[],
        None,
    )
    .await?;
    assert_eq!(deleted, None);

    Ok(())
}
