use serde::{Deserialize, Serialize};

/// Message templates used when a configuration value is rejected.
///
/// Each template is filled positionally: every `{}` is replaced by the next
/// argument, see [`ErrorMessages::render`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorMessages {
    /// Arguments: field path, offending value, allowed values.
    pub enum_error: String,
    /// Arguments: first field path, second field path.
    pub params_mutually_exclusive: String,
    /// Arguments: field path, offending value.
    pub invalid_param: String,
}
