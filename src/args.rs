use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "static-pagination")]
#[command(about = "Detects static pagination links in an HTML document")]
#[command(version)]
pub struct Args {
    /// Absolute URL the document was served from
    pub url: String,

    /// HTML file to analyze (reads stdin when omitted)
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Path to a JSON detector configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
