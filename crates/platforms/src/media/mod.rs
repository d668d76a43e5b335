pub mod media_format;
pub mod related;
pub mod stream_info;
pub mod track_info;

pub use media_format::MediaFormat;
pub use related::RelatedItem;
pub use stream_info::{AudioStream, VideoStream};
pub use track_info::{AgeLimit, StreamType, TrackInfo};
