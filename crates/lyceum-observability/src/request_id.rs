//! Request identifiers attached to log lines.

use uuid::Uuid;

/// Header carrying the request id back to the client.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// New random request id.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}
