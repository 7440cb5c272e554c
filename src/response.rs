//! External response shapes.

use serde::Serialize;

use crate::verdict::{RuleFailure, Verdict};

/// Reason code used when the request itself could not be read.
pub const BAD_REQUEST_REASON: &str = "bad_request";

/// `{"ok": bool, "reasons": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictBody {
    pub ok: bool,
    pub reasons: Vec<RuleFailure>,
}

impl From<&Verdict> for VerdictBody {
    fn from(verdict: &Verdict) -> Self {
        Self {
            ok: verdict.ok(),
            reasons: verdict.reasons().to_vec(),
        }
    }
}

/// `{"ok": false, "reasons": ["bad_request"], "error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadRequestBody {
    pub ok: bool,
    pub reasons: [&'static str; 1],
    pub error: String,
}

impl BadRequestBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            reasons: [BAD_REQUEST_REASON],
            error: error.into(),
        }
    }
}

/// Either response body the delivery wrapper can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Verdict(VerdictBody),
    BadRequest(BadRequestBody),
}

impl ResponseBody {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Renders a verdict as its JSON body.
pub fn verdict_json(verdict: &Verdict) -> serde_json::Result<String> {
    serde_json::to_string(&VerdictBody::from(verdict))
}
