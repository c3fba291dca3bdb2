use serde::Serialize;

/// JSON wrapper carrying a status code next to an optional payload.
///
/// The payload's fields are flattened into the envelope, so
/// `Envelope::ok(DealersPayload { dealers })` serializes as
/// `{"status": 200, "dealers": ...}` and `Envelope::not_found()` as `{"status": 404}`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: 200,
            payload: Some(payload),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            payload: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DealersPayload {
    pub dealers: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct DealerPayload {
    pub dealer: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewsPayload {
    pub reviews: Vec<super::Review>,
}
