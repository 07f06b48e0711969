use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "fingerpori-rss",
    about = "Generate an RSS feed of the daily Fingerpori comics",
    version
)]
pub struct Cli {
    /// Directory where the RSS feed XML file will be created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub outdir: PathBuf,

    /// Also print the generated XML to standard output
    #[arg(long)]
    pub stdout: bool,
}
