//! Command-line front end for docview.
//!
//! The command logic lives here so it can be driven from tests; `main.rs`
//! only parses arguments, installs logging and hands stdout to [`run`].

use anyhow::{Context, Result, bail};
use chrono::FixedOffset;
use clap::{Parser, Subcommand, ValueEnum};
use docview::{
    DocResult, OptionalExt, get_array, get_boolean, get_date, get_integer, get_member, get_object,
    get_path, get_string, merge_values, try_get_array,
};
use docview_statuslog::{JsonStatusSource, StatusLog, StatusLogConfig};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "docview")]
#[command(about = "Typed, fail-fast access to JSON documents")]
pub struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Extract a member as a typed value
    Get {
        /// JSON document to read
        file: PathBuf,

        /// Member names from the root; the last one is extracted
        #[arg(required = true)]
        path: Vec<String>,

        /// Type to extract the member as
        #[arg(long = "as", value_enum, default_value = "json")]
        kind: ValueKind,

        /// UTC offset in seconds used for dates
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        tz_offset: i32,

        /// Print nothing instead of failing when the member is absent
        #[arg(long)]
        optional: bool,
    },

    /// Shallow-merge two object documents; the second wins on conflicts
    Merge { first: PathBuf, second: PathBuf },

    /// Print the aggregated status line of a status log definition
    Status { file: PathBuf },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Json,
    String,
    Boolean,
    Integer,
    Date,
    Array,
    Object,
}

/// Executes `command`, writing its output to `out`.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Get {
            file,
            path,
            kind,
            tz_offset,
            optional,
        } => {
            let document = read_document(file)?;
            match extract(&document, path, *kind, *tz_offset, *optional)? {
                Some(text) => writeln!(out, "{text}")?,
                None => debug!(path = ?path, "Optional member absent"),
            }
        }
        Command::Merge { first, second } => {
            let merged = merge_values(&read_document(first)?, &read_document(second)?)
                .context("both documents must be objects")?;
            writeln!(out, "{}", serde_json::to_string_pretty(&merged)?)?;
        }
        Command::Status { file } => {
            let log = load_status_log(&read_document(file)?)?;
            if let Some(line) = log.run() {
                writeln!(out, "{}", line.trim_end())?;
            }
        }
    }
    Ok(())
}

/// Extracts the member at `path` rendered as text. Returns `None` only when
/// `optional` is set and the member is absent.
pub fn extract(
    document: &Value,
    path: &[String],
    kind: ValueKind,
    tz_offset: i32,
    optional: bool,
) -> Result<Option<String>> {
    let Some((member, parents)) = path.split_last() else {
        bail!("path must name at least one member");
    };
    let tz = FixedOffset::east_opt(tz_offset)
        .with_context(|| format!("UTC offset {tz_offset}s is out of range"))?;

    let text = get_path(document, parents).and_then(|parent| render(parent, member, kind, &tz));

    if optional {
        Ok(text.optional()?)
    } else {
        Ok(Some(text?))
    }
}

fn render(parent: &Value, member: &str, kind: ValueKind, tz: &FixedOffset) -> DocResult<String> {
    Ok(match kind {
        ValueKind::Json => get_member(parent, member)?.to_string(),
        ValueKind::String => get_string(parent, member)?.to_owned(),
        ValueKind::Boolean => get_boolean(parent, member)?.to_string(),
        ValueKind::Integer => get_integer(parent, member)?.to_string(),
        ValueKind::Date => get_date(parent, member, tz)?.to_rfc3339(),
        ValueKind::Array => Value::Array(get_array(parent, member)?.clone()).to_string(),
        ValueKind::Object => Value::Object(get_object(parent, member)?.clone()).to_string(),
    })
}

/// Builds a status log from `{"config": {..}, "sources": [..]}`.
pub fn load_status_log(document: &Value) -> Result<StatusLog> {
    let config = StatusLogConfig::from_value(get_member(document, "config")?)
        .context("invalid status log config")?;
    let log = StatusLog::new(config);
    for definition in try_get_array(document, "sources").into_iter().flatten() {
        let source = JsonStatusSource::from_value(definition).context("invalid status source")?;
        log.register(Arc::new(source));
    }
    info!(id = %log.config().id, sources = log.len(), "Status log loaded");
    Ok(log)
}

fn read_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
