use crate::core::error::InvokeError;
use serde::Serialize;
use serde_json::Value;

/// What gets printed to stdout, one line per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        success: bool,
        data: Value,
        status: u16,
    },
    Failure {
        success: bool,
        error: String,
        #[serde(rename = "type")]
        error_type: String,
    },
    Error {
        error: String,
        #[serde(rename = "type")]
        error_type: String,
    },
    Raw(Value),
}

impl Envelope {
    pub fn success(data: Value, status: u16) -> Self {
        Envelope::Success {
            success: true,
            data,
            status,
        }
    }

    pub fn failure(err: &InvokeError) -> Self {
        Envelope::Failure {
            success: false,
            error: err.to_string(),
            error_type: err.type_label().to_string(),
        }
    }

    pub fn error(err: &InvokeError) -> Self {
        Envelope::Error {
            error: err.to_string(),
            error_type: err.type_label().to_string(),
        }
    }

    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn emit(&self) {
        println!("{}", self.to_line());
    }
}
