use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::Result;
use crate::feed::{render_rss, write_output, ComicFetcher, Transformer};
use crate::models::ComicItem;

/// One fetch, transform, encode and write cycle.
pub struct Pipeline {
    config: Config,
    fetcher: ComicFetcher,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = ComicFetcher::new(&config.http)?;
        Ok(Self { config, fetcher })
    }

    pub async fn run(&self) -> Result<PathBuf> {
        let items = self.fetcher.fetch_items(&self.config.source_url).await?;
        let xml = self.render(&items, Utc::now())?;
        write_output(&self.config.output, &xml)
    }

    /// Everything between decoding and writing. `now` is the run's wall clock.
    pub fn render(&self, items: &[ComicItem], now: DateTime<Utc>) -> Result<String> {
        let transformer = Transformer {
            site_origin: &self.config.site_origin,
            channel: &self.config.channel,
            image: &self.config.image,
            escape_titles: self.config.escape_titles,
        };

        let feed = transformer.build_feed(items, now)?;
        tracing::debug!("Built feed with {} items", feed.items.len());

        render_rss(&feed)
    }
}
