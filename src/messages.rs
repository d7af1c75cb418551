use serde::Serialize;
use std::fmt::Display;

// Envelope for handing engine results to a transport layer.
#[derive(Serialize, Debug, PartialEq)]
pub struct Response<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Response<T> {
    pub fn ok(data: T) -> Self {
        Response {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn ok_with_message(data: T, message: String) -> Self {
        Response {
            message: Some(message),
            ..Response::ok(data)
        }
    }

    pub fn err<E: Display>(error: E) -> Self {
        Response {
            success: false,
            message: None,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl<T: Serialize, E: Display> From<Result<T, E>> for Response<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Response::ok(data),
            Err(err) => Response::err(err),
        }
    }
}
