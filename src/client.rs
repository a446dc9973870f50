use crate::domain::{
    AuthCredentials, AuthRequest, AuthToken, Booking, BookingId, BookingQuery, CreatedBooking,
};
use crate::request_spec::{ApiError, ApiRequest, ApiResponse, RequestSpec};
use reqwest::{Method, StatusCode};

/// Typed client for the restful-booker API.
///
/// Thin helpers over the shared [`RequestSpec`]: each call builds a request
/// from the template, sends it and hands back either a typed body or the
/// raw response, depending on whether the scenario asserts on content or on
/// status codes.
#[derive(Clone, Debug)]
pub struct BookerClient {
    request_spec: RequestSpec,
}

impl BookerClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        Self {
            request_spec: RequestSpec::new(base_url, timeout),
        }
    }

    /// Escape hatch for scenarios that probe arbitrary endpoints or methods.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        self.request_spec.request(method, path)
    }

    /// `POST /auth`. The service answers 200 for accepted and rejected
    /// credentials alike; a rejection body simply carries no token, which
    /// deserializes to `AuthToken { token: None }`. Transport failures and
    /// malformed bodies are errors, not a `None` token.
    #[tracing::instrument(name = "Requesting an auth token", skip(self, credentials))]
    pub async fn create_token(&self, credentials: &AuthCredentials) -> Result<AuthToken, ApiError> {
        self.request(Method::POST, "/auth")
            .json(&AuthRequest::from(credentials))
            .send()
            .await?
            .expect_status(StatusCode::OK)?
            .json()
    }

    /// `POST /booking`. Expects 200 and the `{bookingid, booking}` shape.
    #[tracing::instrument(name = "Creating a booking", skip(self, booking))]
    pub async fn create_booking(&self, booking: &Booking) -> Result<CreatedBooking, ApiError> {
        self.request(Method::POST, "/booking")
            .json(booking)
            .send()
            .await?
            .expect_status(StatusCode::OK)?
            .json()
    }

    /// `PUT /booking/{id}` with the token cookie.
    ///
    /// Returns the response for any status so callers can assert on 403/405
    /// outcomes directly; the updated booking is one
    /// `expect_status(OK)?.json()?` away.
    #[tracing::instrument(name = "Updating a booking", skip(self, booking, token))]
    pub async fn update_booking(
        &self,
        id: u64,
        booking: &Booking,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.request(Method::PUT, &format!("/booking/{}", id))
            .auth_cookie(token)
            .json(booking)
            .send()
            .await
    }

    /// `GET /booking/{id}`. 200 and 404 are both response values.
    #[tracing::instrument(name = "Fetching a booking", skip(self))]
    pub async fn get_booking(&self, id: u64) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, &format!("/booking/{}", id))
            .send()
            .await
    }

    /// `GET /booking` with optional filters and pagination.
    #[tracing::instrument(name = "Listing bookings", skip(self, query))]
    pub async fn get_bookings(&self, query: &BookingQuery) -> Result<Vec<BookingId>, ApiError> {
        self.request(Method::GET, "/booking")
            .query(query)
            .send()
            .await?
            .expect_status(StatusCode::OK)?
            .json()
    }

    /// `DELETE /booking/{id}`. The cookie is attached only when a token is
    /// given, so the missing-token rejection is expressible.
    #[tracing::instrument(name = "Deleting a booking", skip(self, token))]
    pub async fn delete_booking(
        &self,
        id: u64,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = self.request(Method::DELETE, &format!("/booking/{}", id));
        if let Some(token) = token {
            request = request.auth_cookie(token);
        }
        request.send().await
    }

    /// `GET /ping`. The service answers 201 when healthy.
    #[tracing::instrument(name = "Health check", skip(self))]
    pub async fn ping(&self) -> Result<StatusCode, ApiError> {
        Ok(self.request(Method::GET, "/ping").send().await?.status())
    }
}
