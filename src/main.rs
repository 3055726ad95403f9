use clap::Parser;
use static_pagination::{Detector, Result};
use std::io::Read;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        ::log::error!("Pagination detection failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut detector = Detector::new();
    if let Some(path) = &args.config {
        ::log::info!("Loading detector configuration from {}", path.display());
        detector = detector.with_config_file(path)?;
    }

    let html = match &args.html_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let results = detector.detect(&html, &args.url)?;
    ::log::info!(
        "Found {} pagination scheme(s) for {}",
        results.len(),
        args.url
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{}", output);

    Ok(())
}
