//! API integration tests
//!
//! Run against a provisioned server and database with a seeded store:
//!   TRIMLY_TEST_BARBER_ID=<staff account uuid> \
//!   TRIMLY_TEST_USER_ID=<customer account uuid> \
//!   cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn barber_id() -> String {
    std::env::var("TRIMLY_TEST_BARBER_ID").expect("TRIMLY_TEST_BARBER_ID not set")
}

fn user_id() -> String {
    std::env::var("TRIMLY_TEST_USER_ID").expect("TRIMLY_TEST_USER_ID not set")
}

async fn get_slots(client: &Client, barber: &str, date: &str) -> Vec<String> {
    let response = client
        .get(format!("{}/slots", BASE_URL))
        .query(&[("barberId", barber), ("date", date)])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body["slots"]
        .as_array()
        .expect("slots is not an array")
        .iter()
        .map(|s| s.as_str().expect("slot is not a string").to_string())
        .collect()
}

async fn book(client: &Client, user: &str, barber: &str, date: &str, time: &str) -> reqwest::Response {
    client
        .post(format!("{}/appointment", BASE_URL))
        .json(&json!({
            "userId": user,
            "barberId": barber,
            "date": date,
            "time": time,
        }))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_invalid_barber_id_is_client_error() {
    let client = Client::new();

    let response = client
        .get(format!("{}/availability", BASE_URL))
        .query(&[("barberId", "not-a-uuid"), ("date", "2030-06-10"), ("time", "10:00")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_barber_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/availability", BASE_URL))
        .query(&[
            ("barberId", "00000000-0000-0000-0000-000000000001"),
            ("date", "2030-06-10"),
            ("time", "10:00"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_slot_listing_is_idempotent() {
    let client = Client::new();
    let barber = barber_id();

    let first = get_slots(&client, &barber, "2030-07-01").await;
    let second = get_slots(&client, &barber, "2030-07-01").await;
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_off_grid_booking_rejected() {
    let client = Client::new();

    let response = book(&client, &user_id(), &barber_id(), "2030-07-02", "08:30").await;
    assert_eq!(response.status(), 400);

    let response = book(&client, &user_id(), &barber_id(), "2030-07-02", "18:00").await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_flow() {
    let client = Client::new();
    let barber = barber_id();
    let user = user_id();
    let date = "2030-07-03";

    // An untouched day exposes the full grid
    let slots = get_slots(&client, &barber, date).await;
    assert_eq!(slots.len(), 18);
    assert_eq!(slots.first().map(String::as_str), Some("09:00"));
    assert_eq!(slots.last().map(String::as_str), Some("17:30"));

    // The slot reads as available before booking
    let response = client
        .get(format!("{}/availability", BASE_URL))
        .query(&[("barberId", barber.as_str()), ("date", date), ("time", "10:00")])
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["available"], true);

    // Book it
    let response = book(&client, &user, &barber, date, "10:00").await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["appointmentId"].is_string());

    // The slot is gone from the listing and reads as taken
    let slots = get_slots(&client, &barber, date).await;
    assert_eq!(slots.len(), 17);
    assert!(!slots.iter().any(|s| s == "10:00"));

    let response = client
        .get(format!("{}/availability", BASE_URL))
        .query(&[("barberId", barber.as_str()), ("date", date), ("time", "10:00")])
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["available"], false);

    // A second booking for the same slot loses with a conflict
    let response = book(&client, &user, &barber, date, "10:00").await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_bookings_single_winner() {
    let barber = barber_id();
    let user = user_id();
    let date = "2030-07-04";
    let time = "11:30";

    let mut handles = Vec::new();
    for _ in 0..8 {
        let (barber, user) = (barber.clone(), user.clone());
        handles.push(tokio::spawn(async move {
            let client = Client::new();
            book(&client, &user, &barber, date, time).await.status().as_u16()
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.expect("booking task panicked"));
    }

    let winners = statuses.iter().filter(|&&s| s == 201).count();
    let conflicts = statuses.iter().filter(|&&s| s == 409).count();
    assert_eq!(winners, 1, "exactly one booking must win: {statuses:?}");
    assert_eq!(conflicts, statuses.len() - 1, "all others must conflict: {statuses:?}");

    // The winning row is the only one visible
    let client = Client::new();
    let slots = get_slots(&client, &barber, date).await;
    assert!(!slots.iter().any(|s| s == time));
}

#[tokio::test]
#[ignore]
async fn test_list_barbers_and_services() {
    let client = Client::new();

    let response = client
        .get(format!("{}/barbers", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());

    let response = client
        .get(format!("{}/services", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}
