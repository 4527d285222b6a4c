//! On-disk data structures for recorded request/response exchanges.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request header carrying the correlation key assigned by the replay
/// mechanism. Test-bench collections sort by this value instead of by name.
pub const CORRELATION_HEADER: &str = "Rebench-Case-Id";

/// The request half of a recorded exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestRecord {
    /// HTTP method (e.g. `GET`).
    pub method: String,
    /// Full request URL as observed.
    pub url: String,
    /// Request headers. Sorted map so serialized records are stable.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Raw request body.
    #[serde(default)]
    pub body: String,
    /// When the request was observed.
    pub timestamp: DateTime<Utc>,
}

/// The response half of a recorded exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseRecord {
    /// HTTP status code.
    pub status: u16,
    /// Response headers. Sorted map so serialized records are stable.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Raw response body.
    #[serde(default)]
    pub body: String,
    /// When the response was observed.
    pub timestamp: DateTime<Utc>,
}

/// One recorded request/response exchange.
///
/// Immutable once recorded except for the two timestamps, which swap mode
/// exchanges between the pre-recorded and test-bench copies of a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedCase {
    /// Operator-assigned name, unique within a session's collection.
    pub name: String,
    /// The recorded request.
    pub request: RequestRecord,
    /// The recorded response.
    pub response: ResponseRecord,
}

impl RecordedCase {
    /// The replay-assigned correlation key, read from the
    /// [`CORRELATION_HEADER`] request header.
    ///
    /// A missing header yields the empty string, which sorts ahead of every
    /// real key.
    #[must_use]
    pub fn correlation_key(&self) -> &str {
        self.request.headers.get(CORRELATION_HEADER).map_or("", String::as_str)
    }
}
