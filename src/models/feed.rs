use chrono::{DateTime, FixedOffset, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    /// Keeps the offset the upstream display date was published with.
    pub created: DateTime<FixedOffset>,
    pub author: String,
}

#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub author: String,
    pub generated_at: DateTime<Utc>,
    pub items: Vec<FeedItem>,
}
