use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::extractor::error::ExtractorError;

static TIMESTAMP_FRAGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#t=([^&#]*)").unwrap());
static TIMESTAMP_PARTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s?)?$").unwrap()
});

#[inline]
pub fn extras_get_str<'a>(extras: Option<&'a Value>, key: &str) -> Option<&'a str> {
    extras.and_then(|e| e.get(key)).and_then(|v| v.as_str())
}

/// Returns the string at `key`, or `None` when it is absent, null or not a string.
#[inline]
pub fn value_get_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Lenient integer lookup: accepts integers, floats (truncated) and numeric strings.
pub fn value_get_i64(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(|v| {
        if let Some(n) = v.as_i64() {
            Some(n)
        } else if let Some(f) = v.as_f64() {
            f.is_finite().then_some(f as i64)
        } else if let Some(s) = v.as_str() {
            s.trim().parse::<i64>().ok()
        } else {
            None
        }
    })
}

/// Like [`value_get_i64`] but rejects negative values.
#[inline]
pub fn value_get_u64(value: &Value, key: &str) -> Option<u64> {
    value_get_i64(value, key).and_then(|n| u64::try_from(n).ok())
}

pub fn replace_http_with_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// Parses a `#t=<h>h<m>m<s>s` fragment into seconds.
///
/// Any subset of the components may be present and the trailing `s` is optional,
/// so `#t=90` and `#t=1m30s` are both 90 seconds. A URL without a `#t=` fragment
/// yields `Ok(None)`; a fragment that does not follow the grammar is an error.
pub fn parse_timestamp_fragment(url: &str) -> Result<Option<u64>, ExtractorError> {
    let Some(fragment) = TIMESTAMP_FRAGMENT_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return Ok(None);
    };

    let invalid = || ExtractorError::ParsingError(format!("could not get timestamp: #t={fragment}"));

    if fragment.is_empty() {
        return Err(invalid());
    }
    let caps = TIMESTAMP_PARTS_REGEX.captures(fragment).ok_or_else(invalid)?;

    let component = |index: usize, unit: u64| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse::<u64>().ok()?.checked_mul(unit),
            None => Some(0),
        }
    };

    let total = component(1, 3600)
        .zip(component(2, 60))
        .and_then(|(h, m)| h.checked_add(m))
        .zip(component(3, 1))
        .and_then(|(hm, s)| hm.checked_add(s))
        .ok_or_else(invalid)?;
    Ok(Some(total))
}
