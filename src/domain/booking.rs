use chrono::NaiveDate;

/// A booking as submitted to and echoed back by the service.
///
/// Plain wire record: field names match the service's JSON exactly, dates
/// travel as `YYYY-MM-DD`. Validation of the values is the service's job;
/// the suite probes it by submitting invalid ones on purpose.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// Response of `POST /booking`: the server-assigned id plus the stored
/// booking.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CreatedBooking {
    pub bookingid: u64,
    pub booking: Booking,
}

/// Element of the `GET /booking` listing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
pub struct BookingId {
    pub bookingid: u64,
}

/// Filter and pagination parameters of `GET /booking`.
///
/// Absent fields stay out of the query string entirely.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct BookingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl BookingQuery {
    pub fn by_firstname(firstname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            ..Self::default()
        }
    }

    pub fn by_lastname(lastname: impl Into<String>) -> Self {
        Self {
            lastname: Some(lastname.into()),
            ..Self::default()
        }
    }
}
