//! Success envelope shared by JSON endpoints.

use serde::Serialize;

/// `{ "code": ..., "message": ..., "data": ... }`
///
/// `code` is an application-level value carried in the body and is not
/// the HTTP status of the response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(code: u16, data: Option<T>) -> Self {
        Self {
            code,
            message: "Success".to_string(),
            data,
        }
    }
}
