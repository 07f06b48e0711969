mod comic;
mod feed;

pub use comic::{ComicItem, Picture};
pub use feed::{Feed, FeedItem};
