//! Request handler
//!
//! Turns a raw request body `{"password": "..."}` into a status code and a
//! JSON body. Transport (HTTP server, function runtime, queue) is left to
//! the embedding application.

use secrecy::SecretString;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::evaluator::PasswordEvaluator;
use crate::response::{BadRequestBody, ResponseBody, VerdictBody};

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("`password` must be a string")]
    PasswordNotString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: ResponseBody,
}

impl HandlerResponse {
    fn ok(body: VerdictBody) -> Self {
        Self {
            status_code: 200,
            content_type: CONTENT_TYPE_JSON,
            body: ResponseBody::Verdict(body),
        }
    }

    fn bad_request(err: &RequestError) -> Self {
        Self {
            status_code: 400,
            content_type: CONTENT_TYPE_JSON,
            body: ResponseBody::BadRequest(BadRequestBody::new(err.to_string())),
        }
    }
}

/// Extracts the password from a request body.
///
/// A missing or empty body reads as `{}`, and a missing `password` field
/// reads as the empty password.
pub fn parse_password(body: Option<&str>) -> Result<SecretString, RequestError> {
    let raw = body.filter(|b| !b.is_empty()).unwrap_or("{}");
    let value: Value = serde_json::from_str(raw)?;

    let object: Map<String, Value> = match value {
        Value::Object(map) => map,
        _ => return Err(RequestError::NotAnObject),
    };

    match object.get("password") {
        None => Ok(SecretString::new(String::new().into())),
        Some(Value::String(pwd)) => Ok(SecretString::new(pwd.clone().into())),
        Some(_) => Err(RequestError::PasswordNotString),
    }
}

/// Handles one request: 200 with the verdict, or 400 if the body is unusable.
pub async fn handle_request(evaluator: &PasswordEvaluator, body: Option<&str>) -> HandlerResponse {
    let password = match parse_password(body) {
        Ok(password) => password,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "rejecting malformed password check request");
            return HandlerResponse::bad_request(&err);
        }
    };

    let verdict = evaluator.evaluate(&password).await;
    HandlerResponse::ok(VerdictBody::from(&verdict))
}
