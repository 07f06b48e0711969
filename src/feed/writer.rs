use std::io::Write;
use std::path::PathBuf;

use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::config::OutputConfig;
use crate::error::{AppError, Result};
use crate::models::{Feed, FeedItem};

const GENERATOR: &str = concat!("fingerpori-rss ", env!("CARGO_PKG_VERSION"));

/// Encode the feed as an RSS 2.0 document.
pub fn render_rss(feed: &Feed) -> Result<String> {
    let generated_at = feed.generated_at.to_rfc2822();

    let channel = ChannelBuilder::default()
        .title(feed.title.clone())
        .link(feed.link.clone())
        .description(feed.description.clone())
        .managing_editor(Some(feed.author.clone()))
        .pub_date(Some(generated_at.clone()))
        .last_build_date(Some(generated_at))
        .generator(Some(GENERATOR.to_string()))
        .items(feed.items.iter().map(rss_item).collect::<Vec<_>>())
        .build();

    let buffer = channel
        .write_to(Vec::new())
        .map_err(|e| AppError::Encode(e.to_string()))?;

    let xml = String::from_utf8(buffer)
        .map_err(|e| anyhow::anyhow!("RSS output is not valid UTF-8: {}", e))?;

    Ok(xml)
}

fn rss_item(item: &FeedItem) -> Item {
    let guid = GuidBuilder::default()
        .value(item.id.clone())
        .permalink(true)
        .build();

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .description(Some(item.description.clone()))
        .author(Some(item.author.clone()))
        .guid(Some(guid))
        .pub_date(Some(item.created.to_rfc2822()))
        .build()
}

/// Send the XML to every configured sink and return the file it was saved to.
pub fn write_output(output: &OutputConfig, xml: &str) -> Result<PathBuf> {
    if output.echo_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(xml.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    std::fs::create_dir_all(&output.dir)?;

    let path = output.path();
    std::fs::write(&path, xml)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn sample_feed() -> Feed {
        let created = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
            .unwrap();
        Feed {
            title: "Fingerpori Comics".into(),
            link: "https://www.hs.fi/fingerpori/".into(),
            description: "Daily Fingerpori comics from Helsingin Sanomat".into(),
            author: "Pertti Jarla".into(),
            generated_at: Utc.with_ymd_and_hms(2024, 3, 2, 6, 0, 0).unwrap(),
            items: vec![FeedItem {
                id: "https://www.hs.fi/a/b".into(),
                title: "T & co - 2024-03-01".into(),
                link: "https://www.hs.fi/a/b".into(),
                description: r#"<img src="https://images.sanoma-sndp.fi/42/normal/1440.jpg" alt="T &amp; co">"#
                    .into(),
                created,
                author: "P".into(),
            }],
        }
    }

    #[test]
    fn renders_channel_and_items() {
        let xml = render_rss(&sample_feed()).unwrap();
        let channel: rss::Channel = xml.parse().unwrap();

        assert_eq!(channel.title(), "Fingerpori Comics");
        assert_eq!(channel.link(), "https://www.hs.fi/fingerpori/");
        assert_eq!(channel.managing_editor(), Some("Pertti Jarla"));
        assert_eq!(channel.pub_date(), Some("Sat, 2 Mar 2024 06:00:00 +0000"));

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("T & co - 2024-03-01"));
        assert_eq!(item.author(), Some("P"));
        assert_eq!(item.guid().map(|g| g.value()), Some("https://www.hs.fi/a/b"));
        assert_eq!(item.pub_date(), Some("Fri, 1 Mar 2024 08:00:00 +0200"));
        assert!(item
            .description()
            .unwrap()
            .contains(r#"src="https://images.sanoma-sndp.fi/42/normal/1440.jpg""#));
    }

    #[test]
    fn output_is_readable_by_an_independent_parser() {
        let xml = render_rss(&sample_feed()).unwrap();
        let parsed = feed_rs::parser::parse(xml.as_bytes()).unwrap();

        assert_eq!(parsed.entries.len(), 1);
        let entry = &parsed.entries[0];
        assert_eq!(entry.links[0].href, "https://www.hs.fi/a/b");
        assert_eq!(
            entry.published.map(|d| d.timestamp()),
            Some(sample_feed().items[0].created.timestamp())
        );
    }

    #[test]
    fn creates_missing_directories_and_overwrites() {
        let tmpdir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            dir: tmpdir.path().join("nested/feeds"),
            ..OutputConfig::default()
        };

        let path = write_output(&output, "<rss>old</rss>").unwrap();
        assert_eq!(path, tmpdir.path().join("nested/feeds/fingerpori.xml"));

        write_output(&output, "<rss>new</rss>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<rss>new</rss>");
    }

    #[test]
    fn console_echo_still_writes_the_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            dir: tmpdir.path().to_path_buf(),
            echo_stdout: true,
            ..OutputConfig::default()
        };

        let path = write_output(&output, "<rss>echoed</rss>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<rss>echoed</rss>");
    }

    #[test]
    fn directory_creation_failure_is_reported() {
        let tmpdir = tempfile::tempdir().unwrap();
        let blocker = tmpdir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let output = OutputConfig {
            dir: blocker.join("feeds"),
            ..OutputConfig::default()
        };
        assert!(matches!(write_output(&output, "<rss/>"), Err(AppError::Io(_))));
    }
}
