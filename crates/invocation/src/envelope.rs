//! Function-response envelope.
//!
//! Shape expected by the agent runtime:
//!
//! ```text
//! { messageVersion, response: { actionGroup, function,
//!   functionResponse: { responseBody: { TEXT: { body } } } } }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::invocation::Invocation;

pub const MESSAGE_VERSION: &str = "1.0";

const SERIALIZATION_FAILURE_BODY: &str = r#"{"message":"Error serializing result"}"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponseEnvelope {
    pub message_version: String,
    pub response: ActionResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    pub function_response: FunctionResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub response_body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub body: String,
}

impl FunctionResponseEnvelope {
    pub fn action_group(&self) -> Option<&str> {
        self.response.action_group.as_deref()
    }

    pub fn function(&self) -> Option<&str> {
        self.response.function.as_deref()
    }

    /// Serialized payload text.
    pub fn body(&self) -> &str {
        &self.response.function_response.response_body.text.body
    }

    /// Parse the payload text back into a value.
    pub fn payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.body())
    }
}

/// Wrap `payload` for the caller of `call`, echoing its identifiers verbatim.
pub fn build_result<T>(call: &Invocation, payload: &T) -> FunctionResponseEnvelope
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string(payload).unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to serialize function result");
        SERIALIZATION_FAILURE_BODY.to_string()
    });

    FunctionResponseEnvelope {
        message_version: MESSAGE_VERSION.to_string(),
        response: ActionResponse {
            action_group: call.action_group().map(str::to_string),
            function: call.function().map(str::to_string),
            function_response: FunctionResponse {
                response_body: ResponseBody {
                    text: TextBody { body },
                },
            },
        },
    }
}
