//! Aggregated single-line status reporting.
//!
//! A [`StatusLog`] collects every registered, enabled [`StatusSource`],
//! orders them by id and joins their status lines into one line of the form
//! `id[status] id[status] `. Sources backed by JSON documents
//! ([`JsonStatusSource`]) read their fields through `docview`, so a field
//! that fails to coerce is simply left out of the line.

mod config;
mod error;
mod log;
mod source;

pub use config::StatusLogConfig;
pub use error::{StatusLogError, StatusLogResult};
pub use log::StatusLog;
pub use source::{FieldKind, JsonStatusSource, StatusField, StatusSource};
