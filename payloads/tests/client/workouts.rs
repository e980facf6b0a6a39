use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn list_workouts_in_start_order() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let later = app.add_workout("yoga", "Yin Yoga", 30);
    let sooner = app.add_workout("spin", "Spinning", 2);

    let workouts = app.client.list_workouts().await?;
    let ids: Vec<_> = workouts.iter().map(|w| w.id.clone()).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    // the listing leaves descriptions to the detail endpoint
    assert!(workouts.iter().all(|w| w.description.is_none()));

    Ok(())
}

#[tokio::test]
async fn get_workout_includes_description() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let added = app.add_workout("spin", "Spinning", 2);

    let workout = app.client.get_workout(&added.id).await?;
    assert_eq!(workout, added);
    assert_eq!(
        workout.description.as_deref(),
        Some("Spinning for all levels")
    );

    Ok(())
}

#[tokio::test]
async fn get_unknown_workout() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_workout(&"nope".into()).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}
