//! CLI logic for the archmap documentation generators.
//!
//! Two entry points, one per binary: [`run_image`] renders the
//! architecture diagram through Graphviz, [`run_text`] emits the fixed
//! ASCII diagram. Both resolve configuration the same way and write a
//! single output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::{ImageArgs, OutputFormat, TextArgs};

use std::{fs, path::PathBuf};

use log::info;

use archmap::{ArchmapError, DiagramBuilder, architecture, text};

/// Run the graphical diagram generator
///
/// Builds the fixed architecture diagram and writes it as PNG (rendered
/// by the Graphviz `dot` executable) or as DOT text. The output file is
/// only written after rendering succeeded.
///
/// # Errors
///
/// Returns `ArchmapError` for:
/// - Configuration loading errors
/// - Diagram validation errors
/// - Graphviz invocation failures
/// - File I/O errors
pub fn run_image(args: &ImageArgs) -> Result<(), ArchmapError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let output = args.output.clone().unwrap_or_else(|| {
        let configured = app_config.output().image().to_path_buf();
        match args.format {
            // The configured default ends in .png; follow the format.
            OutputFormat::Dot => configured.with_extension("dot"),
            OutputFormat::Png => configured,
        }
    });

    info!(
        output_path = output.display().to_string(),
        format:? = args.format;
        "Generating architecture diagram"
    );
    info!("Rendering requires Graphviz: the `dot` executable must be installed and on PATH");

    let diagram = architecture::knowledge_base_slackbot();
    let builder = DiagramBuilder::new(app_config);

    match args.format {
        OutputFormat::Png => {
            let png = builder.render_png(&diagram)?;
            fs::write(&output, png)?;
        }
        OutputFormat::Dot => {
            let dot = builder.render_dot(&diagram)?;
            fs::write(&output, dot)?;
        }
    }

    info!(output_file = output.display().to_string(); "Architecture diagram exported successfully");

    Ok(())
}

/// Run the textual diagram generator
///
/// Prints the fixed ASCII diagram to stdout and writes the identical
/// bytes to the output file, overwriting any previous content.
///
/// # Errors
///
/// Returns `ArchmapError` for configuration loading errors and file I/O
/// errors (for example a missing output directory).
pub fn run_text(args: &TextArgs) -> Result<(), ArchmapError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let output: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| app_config.output().text().to_path_buf());

    info!(output_path = output.display().to_string(); "Generating ASCII architecture diagram");

    // Same bytes to both sinks; the template already ends with a newline.
    print!("{}", text::ASCII_DIAGRAM);
    fs::write(&output, text::ASCII_DIAGRAM)?;

    info!(output_file = output.display().to_string(); "ASCII diagram exported successfully");

    Ok(())
}
