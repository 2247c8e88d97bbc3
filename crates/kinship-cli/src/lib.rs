//! CLI logic for the Kinship family-tree layout tool.
//!
//! This module contains the core CLI logic: it reads a family dataset, lays
//! it out and writes the positioned graph as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use kinship::{KinshipError, TreeBuilder, export::json::JsonFormat};

/// Run the Kinship CLI application
///
/// This function processes the input dataset through the Kinship pipeline
/// and writes the resulting layout to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `KinshipError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset decoding errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), KinshipError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing family dataset"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let format = if args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    // Process dataset using TreeBuilder API
    let builder = TreeBuilder::new(app_config).with_format(format);
    let dataset = builder.parse(&source)?;
    let layout = builder.layout(&dataset)?;
    let json = builder.render_json(&layout)?;

    // Write output file
    fs::write(&args.output, json)?;

    if let Some(bounds) = layout.bounds() {
        let center = bounds.center();
        info!(
            width = bounds.width(),
            height = bounds.height(),
            center_x = center.x(),
            center_y = center.y();
            "Layout extent"
        );
    }
    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
