use docview::{OptionalExt, get_boolean, get_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity and on/off switch of a status log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLogConfig {
    pub id: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl StatusLogConfig {
    /// Creates an enabled configuration with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
        }
    }

    /// Reads a configuration from a JSON object.
    ///
    /// `id` is required; `enabled` defaults to true when absent but must be a
    /// boolean when present.
    pub fn from_value(value: &Value) -> docview::DocResult<Self> {
        let id = get_string(value, "id")?.to_owned();
        let enabled = get_boolean(value, "enabled")
            .optional()?
            .unwrap_or_else(enabled_by_default);
        Ok(Self { id, enabled })
    }
}
