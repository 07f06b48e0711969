mod fetcher;
mod transform;
mod writer;

pub use fetcher::ComicFetcher;
pub use transform::Transformer;
pub use writer::{render_rss, write_output};
