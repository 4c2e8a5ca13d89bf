//! Status sources and the JSON-backed implementation.

use crate::StatusLogResult;
use docview::{
    DocResult, OptionalExt, as_boolean, as_integer, as_string, get_array, get_boolean, get_member,
    get_path, get_string,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Anything that can report a one-line status under an id.
pub trait StatusSource: Send + Sync {
    /// Unique id; status lines are ordered by it.
    fn id(&self) -> &str;

    /// Disabled sources are never rendered.
    fn is_enabled(&self) -> bool;

    /// The current status, or `None` when there is nothing to report.
    fn status_line(&self) -> Option<String>;
}

/// How a [`StatusField`] value is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Integer,
    Boolean,
}

/// One labelled value in a status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusField {
    pub label: String,
    /// Member names leading from the document root to the value.
    pub path: Vec<String>,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl StatusField {
    /// Shorthand for a top-level field.
    pub fn new(label: impl Into<String>, member: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            path: vec![member.into()],
            kind,
            unit: None,
        }
    }

    /// Sets the unit appended to the value.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    fn render(&self, document: &Value) -> DocResult<String> {
        let node = get_path(document, self.path.as_slice())?;
        let value = match self.kind {
            FieldKind::Text => as_string(node)?.to_owned(),
            FieldKind::Integer => as_integer(node)?.to_string(),
            FieldKind::Boolean => as_boolean(node)?.to_string(),
        };
        Ok(match &self.unit {
            Some(unit) => format!("{}:{value} {unit}", self.label),
            None => format!("{}:{value}", self.label),
        })
    }
}

/// A status source that formats selected fields of a JSON document.
#[derive(Debug, Clone)]
pub struct JsonStatusSource {
    id: String,
    enabled: bool,
    document: Value,
    fields: Vec<StatusField>,
}

impl JsonStatusSource {
    pub fn new(id: impl Into<String>, document: Value, fields: Vec<StatusField>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            document,
            fields,
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Reads a source definition of the form
    /// `{"id": .., "enabled": .., "document": {..}, "fields": [..]}`.
    ///
    /// `enabled` defaults to true, `document` to an empty object and
    /// `fields` to none.
    pub fn from_value(value: &Value) -> StatusLogResult<Self> {
        let id = get_string(value, "id")?;
        let enabled = get_boolean(value, "enabled").optional()?.unwrap_or(true);
        let document = get_member(value, "document")
            .optional()?
            .cloned()
            .unwrap_or_else(|| Value::Object(docview::Object::new()));
        let fields = match get_array(value, "fields").optional()? {
            Some(items) => items
                .iter()
                .map(|item| serde_json::from_value(item.clone()))
                .collect::<Result<Vec<StatusField>, _>>()?,
            None => Vec::new(),
        };
        Ok(Self::new(id, document, fields).with_enabled(enabled))
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn fields(&self) -> &[StatusField] {
        &self.fields
    }
}

impl StatusSource for JsonStatusSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Renders every field that extracts cleanly; fields that fail are
    /// omitted. Returns `None` when no field could be rendered.
    fn status_line(&self) -> Option<String> {
        let parts: Vec<String> = self
            .fields
            .iter()
            .filter_map(|field| match field.render(&self.document) {
                Ok(part) => Some(part),
                Err(err) => {
                    debug!(source = %self.id, field = %field.label, %err, "Status field omitted");
                    None
                }
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
