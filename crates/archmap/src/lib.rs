//! Archmap - architecture diagram generators for the Bedrock Knowledge Base Slackbot docs.
//!
//! Model, fixed architecture definition, and renderers behind the two
//! documentation generators: a Graphviz-rendered PNG and an ASCII text
//! diagram. Nothing here runs at application runtime; the crates exist to
//! produce the two files under `docs/`.

pub mod architecture;
pub mod config;
pub mod identifier;
pub mod model;
pub mod text;

mod error;
mod export;

pub use error::ArchmapError;

use log::{debug, info};

use config::AppConfig;
use model::Diagram;

/// Builder for rendering architecture diagrams.
///
/// Holds the application configuration and renders a [`Diagram`] to DOT
/// text or PNG bytes.
///
/// # Examples
///
/// ```
/// use archmap::{DiagramBuilder, architecture, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = architecture::knowledge_base_slackbot();
///
/// let dot = builder.render_dot(&diagram).expect("Failed to render");
/// assert!(dot.starts_with("digraph"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a diagram to DOT text.
    ///
    /// The output is deterministic: the same diagram and configuration
    /// produce byte-identical text on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ArchmapError::Graph`] if the diagram fails validation.
    pub fn render_dot(&self, diagram: &Diagram) -> Result<String, ArchmapError> {
        diagram.validate()?;

        info!(nodes = diagram.nodes_count(), edges = diagram.edges().len(); "Emitting DOT");
        let dot = export::dot::to_dot_string(diagram, self.config.style());
        debug!(dot_bytes = dot.len(); "DOT emitted");

        Ok(dot)
    }

    /// Render a diagram to PNG bytes via the Graphviz `dot` executable.
    ///
    /// The executable is an external system dependency and is not checked
    /// for beforehand; if it is missing or fails, the error propagates and
    /// no bytes are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ArchmapError::Graph`] if the diagram fails validation, or
    /// [`ArchmapError::Export`] if the Graphviz invocation fails or
    /// produces no output.
    pub fn render_png(&self, diagram: &Diagram) -> Result<Vec<u8>, ArchmapError> {
        diagram.validate()?;

        info!(nodes = diagram.nodes_count(), edges = diagram.edges().len(); "Rendering PNG through Graphviz");
        let png = export::image::render_png(diagram, self.config.style())?;
        info!(png_bytes = png.len(); "PNG rendered");

        Ok(png)
    }
}
