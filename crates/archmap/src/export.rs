//! Export backends for the graphical diagram.
//!
//! [`dot`] turns a [`Diagram`](crate::model::Diagram) into DOT text;
//! [`image`] feeds that graph through the Graphviz layout engine to
//! produce PNG bytes.

pub(crate) mod dot;
pub(crate) mod image;
