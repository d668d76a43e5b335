use serde::{Deserialize, Serialize};

/// Summary of a track suggested next to the one being extracted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelatedItem {
    pub id: String,
    pub name: String,
    pub url: String,
    pub uploader_name: String,
    pub duration_secs: u64,
    pub thumbnail_url: String,
    pub view_count: u64,
}
