//! Read XMP metadata from a file
//!
//! This example extracts the embedded XMP packet from any file and prints
//! the flattened record as JSON. Set `RUST_LOG=xmpflat=debug` to see where
//! the packet was found.
//!
//! ```bash
//! cargo run --example read_xmp --features serde -- photo.jpg
//! ```

use std::env;

use tracing_subscriber::EnvFilter;
use xmpflat::{ExtractOptions, XmpExtractor};

fn read_xmp_from_file() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments. There should be only one
    // argument: a path to a file to be read.
    let args: Vec<String> = env::args().collect();

    let path = match args.len() {
        // args[0] = path to executable
        2 => Ok(&args[1]),
        n => Err(format!(
            "expected 1 argument (file name), got {} arguments",
            n - 1
        )),
    }?;

    let bytes = std::fs::read(path)?;

    // Sidecar .xmp files start with the packet itself
    let mut options = ExtractOptions::default();
    if path.ends_with(".xmp") {
        options = options.accept_marker_at_start();
    }

    let record = XmpExtractor::with_options(options).extract(&bytes)?;
    if record.is_empty() {
        eprintln!("No XMP found in {}", path);
    }

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = read_xmp_from_file() {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
