use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

const SOURCE_URL: &str = "https://www.hs.fi/api/laneitems/39221/list/normal/290";
const SITE_ORIGIN: &str = "https://www.hs.fi";
const IMAGE_BASE: &str = "https://images.sanoma-sndp.fi";
const OUTPUT_FILE: &str = "fingerpori.xml";

/// Everything a single run needs. `Config::default()` is the production setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    /// Prefixed to each item's relative href to build its id and link.
    pub site_origin: String,
    pub channel: ChannelConfig,
    pub image: ImageConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
    /// Escape the comic title before it goes into the item's `<img alt>`.
    pub escape_titles: bool,
}

#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub title: String,
    pub link: String,
    pub description: String,
    pub author: String,
}

#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub base_url: String,
    /// Index into the picture URL's path segments that holds the image id.
    pub id_segment: usize,
    pub suffix: String,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file_name: String,
    pub echo_stdout: bool,
}

impl OutputConfig {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            site_origin: SITE_ORIGIN.to_string(),
            channel: ChannelConfig::default(),
            image: ImageConfig::default(),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
            escape_titles: true,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title: "Fingerpori Comics".to_string(),
            link: "https://www.hs.fi/fingerpori/".to_string(),
            description: "Daily Fingerpori comics from Helsingin Sanomat".to_string(),
            author: "Pertti Jarla".to_string(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: IMAGE_BASE.to_string(),
            id_segment: 0,
            suffix: "normal/1440.jpg".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("fingerpori-rss/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: OUTPUT_FILE.to_string(),
            echo_stdout: false,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        config.output.dir = cli.outdir.clone();
        config.output.echo_stdout = cli.stdout;
        config
    }
}
