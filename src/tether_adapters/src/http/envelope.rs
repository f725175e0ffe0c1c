//! Uniform JSON envelope for every response body.

use serde::Serialize;

/// `{statusCode, data, message, success: true}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: status_code < 400,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize response body");
            serde_json::Value::Null
        })
    }
}

/// `{statusCode, message, errors, success: false}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
    pub errors: Vec<String>,
    pub success: bool,
}

impl ApiErrorBody {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            errors: Vec::new(),
            success: false,
        }
    }
}
