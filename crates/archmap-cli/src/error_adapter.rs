//! Error adapter for converting ArchmapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. None of
//! the library errors carry source spans, so a single adapter covers them
//! all.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use archmap::ArchmapError;

/// Adapter wrapping an [`ArchmapError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a ArchmapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArchmapError::Io(_) => "archmap::io",
            ArchmapError::Graph(_) => "archmap::graph",
            ArchmapError::Export(_) => "archmap::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArchmapError::Export(_) => Some(Box::new(
                "rendering requires Graphviz; check that the `dot` executable is installed and on PATH",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let io_err = ArchmapError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such directory",
        ));
        let graph_err = ArchmapError::Graph("dangling edge".to_string());

        assert_eq!(ErrorAdapter(&io_err).code().unwrap().to_string(), "archmap::io");
        assert_eq!(
            ErrorAdapter(&graph_err).code().unwrap().to_string(),
            "archmap::graph"
        );
    }

    #[test]
    fn test_export_errors_carry_graphviz_help() {
        let err = ArchmapError::Export("dot: not found".to_string().into());
        let adapter = ErrorAdapter(&err);

        let help = adapter.help().expect("export errors should have help");
        assert!(help.to_string().contains("Graphviz"));
    }

    #[test]
    fn test_display_passes_through() {
        let err = ArchmapError::Graph("dangling edge".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Graph error: dangling edge"
        );
    }
}
