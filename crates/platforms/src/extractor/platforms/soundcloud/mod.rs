mod builder;
mod models;
mod track;
mod utils;

pub use builder::{PLATFORM_ID, SoundCloud, URL_REGEX, is_track_url};
pub use models::{Policy, RawTrack};
pub use track::SoundCloudTrack;
pub use utils::{related_item_from_json, to_date_string};
