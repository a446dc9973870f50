use crate::helpers::{NoCookieMatcher, spawn_booker};
use crate::test_data::{TEST_TOKEN, UNKNOWN_BOOKING_ID};
use claims::assert_ok;
use reqwest::StatusCode;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn deleting_a_booking_returns_201() {
    // Arrange
    let app = spawn_booker().await;
    let token = app.issue_token(TEST_TOKEN).await;
    // The service acknowledges deletion with a 201, not a 204
    Mock::given(method("DELETE"))
        .and(path("/booking/5"))
        .and(header("Cookie", format!("token={}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let response = assert_ok!(app.client.delete_booking(5, Some(&token)).await);

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn deleting_without_a_token_returns_403() {
    // Arrange
    let app = spawn_booker().await;
    Mock::given(method("DELETE"))
        .and(path("/booking/5"))
        .and(NoCookieMatcher)
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let response = assert_ok!(app.client.delete_booking(5, None).await);

    // Assert
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn deleting_an_unknown_booking_id_returns_404() {
    // Arrange
    let app = spawn_booker().await;
    let token = app.issue_token(TEST_TOKEN).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/booking/{}", UNKNOWN_BOOKING_ID)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let response = assert_ok!(
        app.client
            .delete_booking(UNKNOWN_BOOKING_ID, Some(&token))
            .await
    );

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_second_delete_of_the_same_booking_returns_404() {
    // Arrange
    let app = spawn_booker().await;
    let token = app.issue_token(TEST_TOKEN).await;
    // The first delete succeeds; the booking is gone afterwards
    Mock::given(method("DELETE"))
        .and(path("/booking/5"))
        .respond_with(ResponseTemplate::new(201))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/booking/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.server)
        .await;

    // Act
    let first = assert_ok!(app.client.delete_booking(5, Some(&token)).await);
    let second = assert_ok!(app.client.delete_booking(5, Some(&token)).await);

    // Assert
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_deleted_booking_stays_absent() {
    // Arrange
    let app = spawn_booker().await;
    let token = app.issue_token(TEST_TOKEN).await;
    Mock::given(method("DELETE"))
        .and(path("/booking/5"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/booking/5"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&app.server)
        .await;

    let deleted = assert_ok!(app.client.delete_booking(5, Some(&token)).await);
    assert_eq!(deleted.status(), StatusCode::CREATED);

    // Act - absence is stable across repeated reads
    let first_read = assert_ok!(app.client.get_booking(5).await);
    let second_read = assert_ok!(app.client.get_booking(5).await);

    // Assert
    assert_eq!(first_read.status(), StatusCode::NOT_FOUND);
    assert_eq!(second_read.status(), StatusCode::NOT_FOUND);
}
