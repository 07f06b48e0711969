use chrono::{DateTime, FixedOffset, Utc};
use url::Url;

use crate::config::{ChannelConfig, ImageConfig};
use crate::error::{AppError, Result};
use crate::models::{ComicItem, Feed, FeedItem};

/// Upstream display dates look like `2024-03-01T08:00:00.000+02:00`.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

pub fn parse_display_date(value: &str) -> chrono::ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, DISPLAY_DATE_FORMAT)
}

/// Rebuild the full size image URL from the image id found in the picture URL.
pub fn image_url(image: &ImageConfig, picture_url: &str) -> Result<String> {
    let invalid = |reason: String| AppError::PictureUrl {
        url: picture_url.to_string(),
        reason,
    };

    let parsed = Url::parse(picture_url).map_err(|e| invalid(e.to_string()))?;
    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.nth(image.id_segment))
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| invalid(format!("no image id at path segment {}", image.id_segment)))?;

    Ok(format!(
        "{}/{}/{}",
        image.base_url.trim_end_matches('/'),
        segment,
        image.suffix.trim_start_matches('/')
    ))
}

pub fn image_html(src: &str, alt: &str, escape: bool) -> String {
    if escape {
        format!("<img src=\"{}\" alt=\"{}\">", src, escape_html(alt))
    } else {
        format!("<img src=\"{}\" alt=\"{}\">", src, alt)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub struct Transformer<'a> {
    pub site_origin: &'a str,
    pub channel: &'a ChannelConfig,
    pub image: &'a ImageConfig,
    pub escape_titles: bool,
}

impl Transformer<'_> {
    pub fn transform_item(&self, item: &ComicItem, now: DateTime<Utc>) -> Result<FeedItem> {
        let created = match parse_display_date(&item.display_date) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!("Error parsing date {}: {}", item.display_date, e);
                now.fixed_offset()
            }
        };

        let image_src = image_url(self.image, &item.picture.url)?;
        let link = format!("{}{}", self.site_origin, item.href);

        Ok(FeedItem {
            id: link.clone(),
            title: format!("{} - {}", item.title, created.format("%Y-%m-%d")),
            link,
            description: image_html(&image_src, &item.title, self.escape_titles),
            created,
            author: item.picture.photographer.clone(),
        })
    }

    pub fn build_feed(&self, items: &[ComicItem], now: DateTime<Utc>) -> Result<Feed> {
        let items = items
            .iter()
            .map(|item| self.transform_item(item, now))
            .collect::<Result<Vec<_>>>()?;

        Ok(Feed {
            title: self.channel.title.clone(),
            link: self.channel.link.clone(),
            description: self.channel.description.clone(),
            author: self.channel.author.clone(),
            generated_at: now,
            items,
        })
    }
}
