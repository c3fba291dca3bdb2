use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dealer review as returned by the dealer service.
///
/// Only `review` is interpreted; every other upstream field is carried through
/// untouched. `sentiment` is attached locally and never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub review: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
