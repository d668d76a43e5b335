use crate::{cli::OutputFormat, error::Result};
use audio_platforms::media::{AudioStream, RelatedItem, TrackInfo};
#[cfg(feature = "colored-output")]
use colored::*;

pub struct OutputManager {
    #[cfg_attr(not(feature = "colored-output"), allow(dead_code))]
    colored: bool,
}

impl OutputManager {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_track(
        &self,
        info: &TrackInfo,
        streams: &[AudioStream],
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_track_pretty(info, streams)),
            OutputFormat::Json => Self::format_track_json(info, streams, true),
            OutputFormat::JsonCompact => Self::format_track_json(info, streams, false),
        }
    }

    pub fn format_related(&self, items: &[RelatedItem], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_related_pretty(items)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
            OutputFormat::JsonCompact => Ok(serde_json::to_string(items)?),
        }
    }

    fn format_track_json(
        info: &TrackInfo,
        streams: &[AudioStream],
        pretty: bool,
    ) -> Result<String> {
        let output_data = serde_json::json!({
            "track": info.to_value()?,
            "streams": streams,
        });

        if pretty {
            serde_json::to_string_pretty(&output_data)
        } else {
            serde_json::to_string(&output_data)
        }
        .map_err(Into::into)
    }

    fn format_track_pretty(&self, info: &TrackInfo, streams: &[AudioStream]) -> String {
        let mut output = String::new();
        output.push_str(&self.colorize(&info.title, &Color::Green, true));
        output.push('\n');

        let like_count = if info.like_count < 0 {
            "n/a".to_string()
        } else {
            info.like_count.to_string()
        };
        let duration = format!("{}:{:02}", info.duration_secs / 60, info.duration_secs % 60);
        let plays = info.view_count.to_string();
        let fields = [
            ("Id", info.id.as_str()),
            ("Uploader", info.uploader_name.as_str()),
            ("Uploaded", info.upload_date.as_str()),
            ("Duration", duration.as_str()),
            ("Plays", plays.as_str()),
            ("Likes", like_count.as_str()),
            ("Url", info.clean_url.as_str()),
            ("Artwork", info.thumbnail_url.as_str()),
        ];
        for (label, value) in fields {
            if value.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "  {}: {}\n",
                self.colorize(label, &Color::Yellow, false),
                self.colorize(value, &Color::Cyan, false)
            ));
        }
        if let Some(timestamp) = info.timestamp_secs {
            output.push_str(&format!(
                "  {}: {}s\n",
                self.colorize("Starts at", &Color::Yellow, false),
                timestamp
            ));
        }

        if !streams.is_empty() {
            output.push_str(&self.colorize("Streams:", &Color::Green, true));
            output.push('\n');
            for stream in streams {
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.colorize(&stream.to_string(), &Color::Yellow, false),
                    self.colorize(&stream.url, &Color::Blue, false)
                ));
            }
        }
        output
    }

    fn format_related_pretty(&self, items: &[RelatedItem]) -> String {
        let mut output = String::new();
        output.push_str(&self.colorize(
            &format!("Related tracks ({})", items.len()),
            &Color::Green,
            true,
        ));
        output.push('\n');
        for item in items {
            output.push_str(&format!(
                "  {} - {} [{}:{:02}]\n    {}\n",
                self.colorize(&item.uploader_name, &Color::Yellow, false),
                self.colorize(&item.name, &Color::Cyan, false),
                item.duration_secs / 60,
                item.duration_secs % 60,
                self.colorize(&item.url, &Color::Blue, false)
            ));
        }
        output
    }

    fn colorize(&self, text: &str, color: &Color, bold: bool) -> String {
        #[cfg(feature = "colored-output")]
        {
            if self.colored {
                let colored_text = match color {
                    Color::Green => text.green(),
                    Color::Yellow => text.yellow(),
                    Color::Blue => text.blue(),
                    Color::Cyan => text.cyan(),
                };
                if bold {
                    colored_text.bold().to_string()
                } else {
                    colored_text.to_string()
                }
            } else {
                text.to_string()
            }
        }

        #[cfg(not(feature = "colored-output"))]
        {
            let _ = (color, bold);
            text.to_string()
        }
    }
}

enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use audio_platforms::media::{AgeLimit, MediaFormat, StreamType};

    fn sample_track() -> TrackInfo {
        TrackInfo {
            id: "123".into(),
            title: "Song".into(),
            description: String::new(),
            upload_date: "2014-06-30".into(),
            duration_secs: 215,
            thumbnail_url: String::new(),
            view_count: 10,
            like_count: -1,
            dislike_count: -1,
            uploader_name: "Artist".into(),
            uploader_url: String::new(),
            uploader_avatar_url: String::new(),
            age_limit: AgeLimit::None,
            stream_type: StreamType::AudioStream,
            timestamp_secs: Some(90),
            clean_url: "https://soundcloud.com/artist/song".into(),
        }
    }

    #[test]
    fn test_pretty_without_colors() {
        let streams = [AudioStream::new("https://cdn/a.mp3", MediaFormat::Mp3, 128)];
        let output = OutputManager::new(false)
            .format_track(&sample_track(), &streams, OutputFormat::Pretty)
            .unwrap();
        assert!(output.starts_with("Song\n"));
        assert!(output.contains("  Duration: 3:35\n"));
        assert!(output.contains("  Likes: n/a\n"));
        assert!(output.contains("  Starts at: 90s\n"));
        assert!(output.contains("  mp3 - 128 kbps: https://cdn/a.mp3\n"));
        assert!(!output.contains("Artwork"));
    }

    #[test]
    fn test_json_shape() {
        let output = OutputManager::new(false)
            .format_track(&sample_track(), &[], OutputFormat::JsonCompact)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["track"]["id"], "123");
        assert_eq!(value["track"]["dislike_count"], -1);
        assert_eq!(value["streams"], serde_json::json!([]));
    }
}
