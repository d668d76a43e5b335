use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::extractor::error::ExtractorError;
use crate::extractor::utils::{replace_http_with_https, value_get_i64, value_get_str, value_get_u64};
use crate::media::RelatedItem;

// api.soundcloud.com, e.g. "2014/06/30 17:38:06 +0000"
const API_V1_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";
// api-v2 without a zone designator, e.g. "2014-06-30T17:38:06.000"
const API_V2_NAIVE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes both SoundCloud timestamp flavours to `YYYY-MM-DD`.
///
/// The date is taken in the offset the timestamp was written in.
pub fn to_date_string(time: &str) -> Result<String, ExtractorError> {
    let time = time.trim();
    let date = DateTime::parse_from_str(time, API_V1_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(time))
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(time, API_V2_NAIVE_DATE_FORMAT).map(|dt| dt.date())
        })
        .map_err(|e| {
            ExtractorError::ParsingError(format!("could not parse date {time:?}: {e}"))
        })?;

    Ok(date.format(OUTPUT_DATE_FORMAT).to_string())
}

pub fn uploader_name(track: &Value) -> String {
    track
        .get("user")
        .and_then(|user| value_get_str(user, "username"))
        .unwrap_or_default()
        .to_string()
}

pub fn uploader_url(track: &Value) -> String {
    track
        .get("user")
        .and_then(|user| value_get_str(user, "permalink_url"))
        .map(replace_http_with_https)
        .unwrap_or_default()
}

pub fn avatar_url(track: &Value) -> String {
    track
        .get("user")
        .and_then(|user| value_get_str(user, "avatar_url"))
        .unwrap_or_default()
        .to_string()
}

/// Maps one entry of the related endpoint to a summary.
///
/// Entries without an id are rejected; everything else falls back to defaults.
pub fn related_item_from_json(entry: &Value) -> Result<RelatedItem, ExtractorError> {
    let id = value_get_i64(entry, "id")
        .ok_or_else(|| ExtractorError::ExtractionError("related track has no id".to_string()))?;

    Ok(RelatedItem {
        id: id.to_string(),
        name: value_get_str(entry, "title").unwrap_or_default().to_string(),
        url: value_get_str(entry, "permalink_url")
            .map(replace_http_with_https)
            .unwrap_or_default(),
        uploader_name: uploader_name(entry),
        duration_secs: value_get_u64(entry, "duration").unwrap_or(0) / 1000,
        thumbnail_url: value_get_str(entry, "artwork_url")
            .unwrap_or_default()
            .to_string(),
        view_count: value_get_u64(entry, "playback_count").unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("2014/06/30 17:38:06 +0000", "2014-06-30")]
    #[case("2014-06-30T17:38:06Z", "2014-06-30")]
    #[case("2014-06-30T17:38:06.000Z", "2014-06-30")]
    #[case("2014-06-30T23:38:06+02:00", "2014-06-30")]
    #[case("2014-06-30T17:38:06.000", "2014-06-30")]
    fn test_to_date_string(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_date_string(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2014/13/40 00:00:00 +0000")]
    fn test_to_date_string_rejects_garbage(#[case] input: &str) {
        assert!(matches!(
            to_date_string(input),
            Err(ExtractorError::ParsingError(_))
        ));
    }

    #[test]
    fn test_uploader_fields() {
        let track = json!({
            "user": {
                "username": "Artist",
                "permalink_url": "http://soundcloud.com/artist",
                "avatar_url": "https://i1.sndcdn.com/avatars-large.jpg"
            }
        });
        assert_eq!(uploader_name(&track), "Artist");
        assert_eq!(uploader_url(&track), "https://soundcloud.com/artist");
        assert_eq!(avatar_url(&track), "https://i1.sndcdn.com/avatars-large.jpg");

        let anonymous = json!({"user": null});
        assert_eq!(uploader_name(&anonymous), "");
        assert_eq!(uploader_url(&anonymous), "");
        assert_eq!(avatar_url(&json!({})), "");
    }

    #[test]
    fn test_related_item_from_json() {
        let entry = json!({
            "id": 99,
            "title": "Next",
            "permalink_url": "http://soundcloud.com/artist/next",
            "duration": 61999,
            "playback_count": 12,
            "user": {"username": "Artist"}
        });
        let item = related_item_from_json(&entry).unwrap();
        assert_eq!(item.id, "99");
        assert_eq!(item.url, "https://soundcloud.com/artist/next");
        assert_eq!(item.duration_secs, 61);
        assert_eq!(item.view_count, 12);
        assert_eq!(item.thumbnail_url, "");
        assert_eq!(item.uploader_name, "Artist");

        assert!(related_item_from_json(&json!({"title": "no id"})).is_err());
    }
}
