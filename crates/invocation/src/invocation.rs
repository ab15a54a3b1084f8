use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One entry of a structured call's parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Declared parameter type (informational; values are not coerced).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: JsonValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            value: value.into(),
        }
    }

    /// Lenient read of one parameter-list entry: anything without a string
    /// `name` is unusable and yields `None`.
    fn from_entry(entry: JsonValue) -> Option<Self> {
        let JsonValue::Object(mut entry) = entry else {
            return None;
        };
        let Some(JsonValue::String(name)) = entry.remove("name") else {
            return None;
        };
        Some(Self {
            name,
            kind: entry.get("type").and_then(JsonValue::as_str).map(str::to_string),
            value: entry.remove("value").unwrap_or_default(),
        })
    }
}

/// Agent function-calling shape.
///
/// Any other fields the agent runtime sends along (session ids, input text,
/// ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// Flat object carrying the arguments as top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectCall(pub Map<String, JsonValue>);

/// An incoming tool call in either supported shape.
///
/// An object with a `parameters` list is structured; any other object is a
/// direct call. Unusable entries of the list are dropped, the rest still apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Invocation {
    Structured(StructuredCall),
    Direct(DirectCall),
}

impl<'de> Deserialize<'de> for Invocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, JsonValue>::deserialize(deserializer).map(Invocation::from)
    }
}

impl From<Map<String, JsonValue>> for Invocation {
    fn from(mut fields: Map<String, JsonValue>) -> Self {
        let entries = match fields.remove("parameters") {
            Some(JsonValue::Array(entries)) => entries,
            Some(other) => {
                fields.insert("parameters".to_string(), other);
                return Self::Direct(DirectCall(fields));
            }
            None => return Self::Direct(DirectCall(fields)),
        };

        let parameters = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let parameter = Parameter::from_entry(entry);
                if parameter.is_none() {
                    tracing::warn!(index, "ignoring parameter entry without a name");
                }
                parameter
            })
            .collect();

        let text = |key: &str| fields.get(key).and_then(JsonValue::as_str).map(str::to_string);
        Self::Structured(StructuredCall {
            action_group: text("actionGroup"),
            function: text("function"),
            parameters,
        })
    }
}

impl Invocation {
    pub fn structured(
        action_group: impl Into<String>,
        function: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self::Structured(StructuredCall {
            action_group: Some(action_group.into()),
            function: Some(function.into()),
            parameters,
        })
    }

    pub fn direct(fields: Map<String, JsonValue>) -> Self {
        Self::Direct(DirectCall(fields))
    }

    /// Action group identifier, echoed back in the response.
    pub fn action_group(&self) -> Option<&str> {
        match self {
            Invocation::Structured(call) => call.action_group.as_deref(),
            Invocation::Direct(call) => call.0.get("actionGroup").and_then(JsonValue::as_str),
        }
    }

    /// Function identifier, echoed back in the response.
    pub fn function(&self) -> Option<&str> {
        match self {
            Invocation::Structured(call) => call.function.as_deref(),
            Invocation::Direct(call) => call.0.get("function").and_then(JsonValue::as_str),
        }
    }

    /// Raw value of a named argument. The first matching entry wins in a
    /// structured call; `null` counts as absent.
    pub fn param(&self, name: &str) -> Option<&JsonValue> {
        let value = match self {
            Invocation::Structured(call) => call
                .parameters
                .iter()
                .find(|p| p.name == name)
                .map(|p| &p.value),
            Invocation::Direct(call) => call.0.get(name),
        };
        value.filter(|v| !v.is_null())
    }
}

impl Default for Invocation {
    fn default() -> Self {
        Self::Direct(DirectCall::default())
    }
}
