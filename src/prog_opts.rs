use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// How computed rows should be rendered on the way out.
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum, Serialize)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}

/// Parse a string as an [OutputFormat], accepting the common aliases.
fn parse_output_format(s: &str) -> anyhow::Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" | "txt" | "plain" => Ok(OutputFormat::Text),
        "tsv" | "table" => Ok(OutputFormat::Tsv),
        "json" => Ok(OutputFormat::Json),
        x => anyhow::bail!("Cannot parse {} as a valid output format", x),
    }
}

/// evenly spaced sample indices for sequence downsampling
#[derive(Parser, Debug, Serialize)]
#[clap(author, version, about, long_about = None)]
#[command(group(
    clap::ArgGroup::new("mode")
    .required(true)
    .args(["len", "sweep"])
))]
pub struct Args {
    /// length of the index range [0, len - 1] to sample from
    #[arg(short = 'n', long, requires = "count", help_heading = "single computation")]
    pub len: Option<i64>,
    /// number of sample indices to produce
    #[arg(
        short = 'm',
        long,
        requires = "len",
        conflicts_with = "sweep",
        help_heading = "single computation"
    )]
    pub count: Option<i64>,
    /// shift the returned indices to 1-based positions
    #[arg(long, conflicts_with = "sweep", help_heading = "single computation")]
    pub one_based: bool,
    /// run the fixed demonstration sweep of generated (len, count) pairs
    #[arg(long)]
    pub sweep: bool,
    /// where results should be written (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// output rendering to use
    #[arg(long, default_value = "text", value_parser = parse_output_format)]
    pub output_format: OutputFormat,
}
