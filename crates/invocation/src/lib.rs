//! Invocation adapter for agent action groups.
//!
//! Tools are called either with a flat JSON object of arguments or with the
//! agent function-calling shape (`actionGroup`, `function`, `parameters`). This
//! crate resolves both into one `Invocation`, extracts named parameters, and
//! wraps results in the function-response envelope the agent expects back.

pub mod envelope;
pub mod invocation;
pub mod params;

pub use envelope::{build_result, FunctionResponseEnvelope, MESSAGE_VERSION};
pub use invocation::{DirectCall, Invocation, Parameter, StructuredCall};
pub use params::{extract_param, extract_params, ParamMap};
