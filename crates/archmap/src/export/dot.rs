//! DOT emission for diagrams.
//!
//! Builds a [`dot_structures::Graph`] from a [`Diagram`] and prints it to
//! DOT text. Clusters become `subgraph cluster_N` blocks; nodes that belong
//! to a cluster are emitted inside it, all others at the top level. Node
//! and edge emission follows diagram insertion order, so the produced text
//! is identical on every run.

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use crate::{
    config::StyleConfig,
    model::{Diagram, Node},
};

/// Border color of cluster boxes.
const CLUSTER_COLOR: &str = "#999999";

/// Builds the DOT graph for a diagram.
///
/// The caller is expected to have run [`Diagram::validate`] first; this
/// function does not re-check referential consistency.
pub(crate) fn build_graph(diagram: &Diagram, style: &StyleConfig) -> Graph {
    let mut stmts = Vec::new();

    // Top-level graph attributes, matching the documented rendering:
    // title as graph label, white background, LR flow.
    stmts.push(attr("label", quoted_id(diagram.title())));
    stmts.push(attr("labelloc", plain_id("t")));
    stmts.push(attr("fontsize", plain_id(&style.font_size().to_string())));
    stmts.push(attr("bgcolor", quoted_id(style.background())));
    stmts.push(attr("pad", plain_id(&style.pad().to_string())));
    stmts.push(attr("rankdir", plain_id(style.direction().rankdir())));
    stmts.push(attr("fontname", quoted_id("Helvetica")));

    // Defaults applied to every node and edge.
    stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![
        Attribute(plain_id("style"), quoted_id("filled")),
        Attribute(plain_id("fontname"), quoted_id("Helvetica")),
    ])));
    stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![
        Attribute(plain_id("fontname"), quoted_id("Helvetica")),
        Attribute(plain_id("fontsize"), plain_id("11")),
    ])));

    for (index, cluster) in diagram.clusters().iter().enumerate() {
        let mut cluster_stmts = vec![
            attr("label", quoted_id(cluster.label())),
            attr("style", quoted_id("rounded")),
            attr("color", quoted_id(CLUSTER_COLOR)),
        ];
        for member in cluster.members() {
            if let Some(node) = diagram.node(*member) {
                cluster_stmts.push(node_stmt(node));
            }
        }
        stmts.push(Stmt::Subgraph(Subgraph {
            id: DotId::Plain(format!("cluster_{index}")),
            stmts: cluster_stmts,
        }));
    }

    for node in diagram.nodes() {
        if !diagram.is_clustered(node.id()) {
            stmts.push(node_stmt(node));
        }
    }

    for edge in diagram.edges() {
        let attributes = match edge.label() {
            Some(label) => vec![Attribute(plain_id("label"), quoted_id(label))],
            None => Vec::new(),
        };
        stmts.push(Stmt::Edge(DotEdge {
            ty: EdgeTy::Pair(
                Vertex::N(NodeId(quoted_id(&edge.source().to_string()), None)),
                Vertex::N(NodeId(quoted_id(&edge.target().to_string()), None)),
            ),
            attributes,
        }));
    }

    Graph::DiGraph {
        id: DotId::Plain("architecture".to_string()),
        strict: false,
        stmts,
    }
}

/// Prints a diagram as DOT text.
pub(crate) fn to_dot_string(diagram: &Diagram, style: &StyleConfig) -> String {
    build_graph(diagram, style).print(&mut PrinterContext::default())
}

fn node_stmt(node: &Node) -> Stmt {
    Stmt::Node(DotNode {
        id: NodeId(quoted_id(&node.id().to_string()), None),
        attributes: vec![
            Attribute(plain_id("label"), quoted_id(&node.label())),
            Attribute(plain_id("shape"), plain_id(node.category().shape())),
            Attribute(plain_id("fillcolor"), quoted_id(node.category().fill_color())),
        ],
    })
}

fn attr(name: &str, value: DotId) -> Stmt {
    Stmt::Attribute(Attribute(plain_id(name), value))
}

fn plain_id(value: &str) -> DotId {
    DotId::Plain(value.to_string())
}

/// Wraps a value in a quoted DOT identifier, escaping embedded quotes,
/// backslashes, and newlines. Newlines come out as the literal `\n` escape
/// Graphviz uses for multi-line labels.
fn quoted_id(value: &str) -> DotId {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    DotId::Escaped(format!("\"{escaped}\""))
}
