//! PNG rendering through the Graphviz layout engine.
//!
//! This shells out to the system `dot` executable via [`graphviz_rust`].
//! The executable must be installed separately; a missing or failing
//! backend surfaces as an [`ArchmapError::Export`] and no bytes are
//! returned, so callers never write a partial file.

use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::PrinterContext,
};
use log::debug;

use crate::{config::StyleConfig, error::ArchmapError, model::Diagram};

use super::dot;

/// Renders a diagram to PNG bytes.
///
/// # Errors
///
/// Returns [`ArchmapError::Export`] if the Graphviz `dot` executable
/// cannot be run, exits unsuccessfully, or produces no output.
pub(crate) fn render_png(diagram: &Diagram, style: &StyleConfig) -> Result<Vec<u8>, ArchmapError> {
    let graph = dot::build_graph(diagram, style);

    let bytes = exec(
        graph,
        &mut PrinterContext::default(),
        vec![CommandArg::Format(Format::Png)],
    )
    .map_err(|err| ArchmapError::Export(Box::new(err)))?;

    if bytes.is_empty() {
        return Err(ArchmapError::Export(
            "Graphviz produced no output".to_string().into(),
        ));
    }

    debug!(png_bytes = bytes.len(); "Graphviz layout finished");
    Ok(bytes)
}
