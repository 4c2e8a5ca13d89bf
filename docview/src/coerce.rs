//! Extraction of typed values from primitive nodes.
//!
//! Integers are also accepted as decimal text, since numeric fields are
//! sometimes transmitted as strings upstream.

use crate::access::{as_primitive, get_primitive};
use crate::{DocError, DocResult, Primitive};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use serde_json::{Number, Value};
use std::str::FromStr;

const STRING: &str = "a string";
const BOOLEAN: &str = "a boolean";
const INTEGER: &str = "an integer";

/// Extracts a string from `node`.
pub fn as_string(node: &Value) -> DocResult<&str> {
    string_of(as_primitive(node)?, None)
}

/// Extracts the string member `member` of `node`.
pub fn get_string<'a>(node: &'a Value, member: &str) -> DocResult<&'a str> {
    string_of(get_primitive(node, member)?, Some(member))
}

/// Extracts a boolean from `node`.
pub fn as_boolean(node: &Value) -> DocResult<bool> {
    boolean_of(as_primitive(node)?, None)
}

/// Extracts the boolean member `member` of `node`.
pub fn get_boolean(node: &Value, member: &str) -> DocResult<bool> {
    boolean_of(get_primitive(node, member)?, Some(member))
}

/// Extracts a 32-bit integer from `node`, which may be a number or decimal text.
pub fn as_integer(node: &Value) -> DocResult<i32> {
    integer_of(as_primitive(node)?, None)
}

/// Extracts the integer member `member` of `node`, which may be a number or
/// decimal text.
pub fn get_integer(node: &Value, member: &str) -> DocResult<i32> {
    integer_of(get_primitive(node, member)?, Some(member))
}

/// Extracts the `YYYY-MM-DD` string member `member` of `node` as midnight
/// of that day in `tz`.
///
/// Dash-separated components after the third are ignored. When midnight is
/// ambiguous in `tz` the earlier instant is returned; when it falls in a
/// gap the date is rejected.
pub fn get_date<Tz: TimeZone>(node: &Value, member: &str, tz: &Tz) -> DocResult<DateTime<Tz>> {
    let text = get_string(node, member)?;
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() < 3 {
        return Err(DocError::malformed_date(
            member,
            text,
            format!("expected YYYY-MM-DD, found {} component(s)", parts.len()),
        ));
    }

    let year: i32 = date_component(member, text, parts[0], "year")?;
    let month: u32 = date_component(member, text, parts[1], "month")?;
    let day: u32 = date_component(member, text, parts[2], "day")?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DocError::malformed_date(member, text, "no such calendar date"))?;
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| DocError::malformed_date(member, text, "midnight does not exist in zone"))
}

fn date_component<T: FromStr>(member: &str, text: &str, raw: &str, name: &str) -> DocResult<T> {
    raw.parse().map_err(|_| {
        DocError::malformed_date(member, text, format!("{name} {raw:?} is not an integer"))
    })
}

fn string_of<'a>(primitive: Primitive<'a>, member: Option<&str>) -> DocResult<&'a str> {
    match primitive {
        Primitive::String(s) => Ok(s),
        other => Err(DocError::type_mismatch(STRING, member, &other)),
    }
}

fn boolean_of(primitive: Primitive<'_>, member: Option<&str>) -> DocResult<bool> {
    match primitive {
        Primitive::Bool(b) => Ok(b),
        other => Err(DocError::type_mismatch(BOOLEAN, member, &other)),
    }
}

fn integer_of(primitive: Primitive<'_>, member: Option<&str>) -> DocResult<i32> {
    let value = match primitive {
        Primitive::Number(n) => integral(n).and_then(|v| i32::try_from(v).ok()),
        Primitive::String(s) => s.parse::<i32>().ok(),
        Primitive::Bool(_) => None,
    };
    value.ok_or_else(|| DocError::type_mismatch(INTEGER, member, &primitive))
}

/// Returns the value of `n` if it has no fractional part.
#[allow(clippy::cast_possible_truncation)]
fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(f))
            .map(|f| f as i64)
    })
}
