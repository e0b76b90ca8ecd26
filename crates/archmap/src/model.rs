//! Presentation model for architecture diagrams.
//!
//! This module provides the in-memory entities the graphical generator is
//! built from. They are presentation entities only: a [`Node`] is a labeled
//! shape, a [`Cluster`] is a visual grouping, and an [`Edge`] draws a
//! captioned arrow. None of them carry runtime semantics.
//!
//! # Architecture
//!
//! The module provides:
//! - [`Node`]: a `(category, name)` pair with an optional detail line
//! - [`Cluster`]: a labeled grouping of node ids
//! - [`Edge`]: a directed, optionally captioned connection between node ids
//! - [`Diagram`]: title plus nodes, clusters, and edges
//!
//! Nodes are stored in an insertion-ordered map so that emitting the
//! diagram twice produces identical output. [`Diagram::validate`] checks
//! referential consistency before export: every edge endpoint and cluster
//! member must name a known node, and a node belongs to at most one cluster.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{error::ArchmapError, identifier::Id};

/// Visual category of a node.
///
/// Categories select the cosmetic DOT attributes (shape and fill color) a
/// node is drawn with. They mirror the component families of the documented
/// architecture and have no further meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A human actor.
    User,
    /// A chat workspace.
    Chat,
    /// An API gateway endpoint.
    Gateway,
    /// A serverless compute function.
    Function,
    /// A secrets or parameter store.
    Secrets,
    /// A managed search / vector database service.
    Search,
    /// An object storage bucket.
    Storage,
    /// A managed machine-learning service.
    Ml,
    /// A logging and monitoring service.
    Monitoring,
}

impl Category {
    /// DOT `shape` attribute for this category.
    pub(crate) fn shape(self) -> &'static str {
        match self {
            Category::User => "ellipse",
            Category::Gateway => "hexagon",
            Category::Storage => "cylinder",
            Category::Search => "cylinder",
            _ => "box",
        }
    }

    /// DOT `fillcolor` attribute for this category.
    pub(crate) fn fill_color(self) -> &'static str {
        match self {
            Category::User => "#f2f2f2",
            Category::Chat => "#e8d7ee",
            Category::Gateway => "#fbd8a0",
            Category::Function => "#f8c291",
            Category::Secrets => "#f4cccc",
            Category::Search => "#cfe2f3",
            Category::Storage => "#d9ead3",
            Category::Ml => "#c9e7d8",
            Category::Monitoring => "#fce5cd",
        }
    }
}

/// A labeled shape in the diagram representing one external cloud component.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    category: Category,
    name: String,
    detail: Option<String>,
}

impl Node {
    /// Creates a node with the given id, category, and display name.
    pub fn new(id: Id, category: Category, name: impl Into<String>) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            detail: None,
        }
    }

    /// Adds a detail annotation rendered below the name. May span
    /// multiple lines separated by `\n`.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns the node id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the node category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the detail annotation, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the full rendered label: the name, followed by the detail
    /// lines when present.
    pub fn label(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}\n{}", self.name, detail),
            None => self.name.clone(),
        }
    }
}

/// A named visual grouping of nodes.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    members: Vec<Id>,
}

impl Cluster {
    /// Creates a cluster with the given label and member node ids.
    pub fn new(label: impl Into<String>, members: Vec<Id>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }

    /// Returns the cluster label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the member node ids.
    pub fn members(&self) -> &[Id] {
        &self.members
    }
}

/// A labeled directed connection between two nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
}

impl Edge {
    /// Creates an unlabeled edge from `source` to `target`.
    pub fn new(source: Id, target: Id) -> Self {
        Self {
            source,
            target,
            label: None,
        }
    }

    /// Adds a caption drawn along the arrow. May span multiple lines
    /// separated by `\n`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the source node id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target node id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the caption, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A complete diagram: title, nodes, clusters, and edges.
///
/// Everything is constructed at startup and discarded once rendering
/// returns. Node insertion order is preserved and determines emission
/// order, keeping the rendered output stable across runs.
#[derive(Debug, Default)]
pub struct Diagram {
    title: String,
    nodes: IndexMap<Id, Node>,
    clusters: Vec<Cluster>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: IndexMap::new(),
            clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Adds a node to the diagram and returns its id.
    ///
    /// If a node with the same id already exists, it is replaced in place.
    pub fn add_node(&mut self, node: Node) -> Id {
        let id = node.id();
        self.nodes.insert(id, node);
        id
    }

    /// Adds a cluster to the diagram.
    pub fn add_cluster(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    /// Adds a directed edge to the diagram.
    ///
    /// # Panics
    /// Panics in debug mode if either endpoint does not exist in the
    /// diagram yet. This catches construction mistakes during development;
    /// in a release build the check is optimized away and
    /// [`Diagram::validate`] reports the error instead.
    pub fn add_edge(&mut self, edge: Edge) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.nodes.contains_key(&edge.source()),
                "Adding edge: source node {} does not exist",
                edge.source(),
            );
            assert!(
                self.nodes.contains_key(&edge.target()),
                "Adding edge: target node {} does not exist",
                edge.target(),
            );
        }

        self.edges.push(edge);
    }

    /// Returns the node with the given id, if it exists.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the total number of nodes.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if a node with the given id exists.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the clusters in insertion order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if the node belongs to any cluster.
    pub fn is_clustered(&self, id: Id) -> bool {
        self.clusters
            .iter()
            .any(|cluster| cluster.members().contains(&id))
    }

    /// Checks referential consistency of the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`ArchmapError::Graph`] if an edge endpoint or a cluster
    /// member names an unknown node, or if a node appears in more than
    /// one cluster.
    pub fn validate(&self) -> Result<(), ArchmapError> {
        for edge in &self.edges {
            if !self.contains_node(edge.source()) {
                return Err(ArchmapError::Graph(format!(
                    "edge source '{}' is not a node in the diagram",
                    edge.source()
                )));
            }
            if !self.contains_node(edge.target()) {
                return Err(ArchmapError::Graph(format!(
                    "edge target '{}' is not a node in the diagram",
                    edge.target()
                )));
            }
        }

        let mut seen = HashSet::new();
        for cluster in &self.clusters {
            for member in cluster.members() {
                if !self.contains_node(*member) {
                    return Err(ArchmapError::Graph(format!(
                        "cluster '{}' member '{}' is not a node in the diagram",
                        cluster.label(),
                        member
                    )));
                }
                if !seen.insert(*member) {
                    return Err(ArchmapError::Graph(format!(
                        "node '{}' belongs to more than one cluster",
                        member
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, name: &str) -> Node {
        Node::new(Id::new(id), Category::Function, name)
    }

    #[test]
    fn test_empty_diagram() {
        let diagram = Diagram::new("Empty");

        assert_eq!(diagram.title(), "Empty");
        assert_eq!(diagram.nodes_count(), 0);
        assert_eq!(diagram.edges().len(), 0);
        assert_eq!(diagram.clusters().len(), 0);
        assert!(diagram.validate().is_ok());
    }

    #[test]
    fn test_add_node() {
        let mut diagram = Diagram::new("Test");
        let id = diagram.add_node(node("fn1", "Function One"));

        assert_eq!(diagram.nodes_count(), 1);
        assert!(diagram.contains_node(id));
        assert_eq!(diagram.node(id).unwrap().name(), "Function One");
    }

    #[test]
    fn test_node_replacement() {
        let mut diagram = Diagram::new("Test");
        diagram.add_node(node("fn1", "First"));
        diagram.add_node(node("fn1", "Second"));

        assert_eq!(diagram.nodes_count(), 1);
        assert_eq!(diagram.node(Id::new("fn1")).unwrap().name(), "Second");
    }

    #[test]
    fn test_node_label_with_detail() {
        let plain = node("a", "API Gateway");
        assert_eq!(plain.label(), "API Gateway");

        let detailed = node("b", "API Gateway").with_detail("/slack/ask-aws");
        assert_eq!(detailed.label(), "API Gateway\n/slack/ask-aws");
        assert_eq!(detailed.detail(), Some("/slack/ask-aws"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut diagram = Diagram::new("Test");
        diagram.add_node(node("c", "C"));
        diagram.add_node(node("a", "A"));
        diagram.add_node(node("b", "B"));

        let names: Vec<&str> = diagram.nodes().map(Node::name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_add_edge_and_labels() {
        let mut diagram = Diagram::new("Test");
        let a = diagram.add_node(node("a", "A"));
        let b = diagram.add_node(node("b", "B"));

        diagram.add_edge(Edge::new(a, b).with_label("Invoke"));
        diagram.add_edge(Edge::new(b, a));

        assert_eq!(diagram.edges().len(), 2);
        assert_eq!(diagram.edges()[0].label(), Some("Invoke"));
        assert_eq!(diagram.edges()[1].label(), None);
        assert!(diagram.validate().is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "source node")]
    fn test_add_edge_missing_source_panics_in_debug() {
        let mut diagram = Diagram::new("Test");
        let b = diagram.add_node(node("b", "B"));
        diagram.add_edge(Edge::new(Id::new("missing"), b));
    }

    #[test]
    fn test_validate_rejects_unknown_cluster_member() {
        let mut diagram = Diagram::new("Test");
        diagram.add_node(node("a", "A"));
        diagram.add_cluster(Cluster::new("Group", vec![Id::new("missing")]));

        let err = diagram.validate().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validate_rejects_double_clustering() {
        let mut diagram = Diagram::new("Test");
        let a = diagram.add_node(node("a", "A"));
        diagram.add_cluster(Cluster::new("First", vec![a]));
        diagram.add_cluster(Cluster::new("Second", vec![a]));

        let err = diagram.validate().unwrap_err();
        assert!(err.to_string().contains("more than one cluster"));
    }

    #[test]
    fn test_is_clustered() {
        let mut diagram = Diagram::new("Test");
        let a = diagram.add_node(node("a", "A"));
        let b = diagram.add_node(node("b", "B"));
        diagram.add_cluster(Cluster::new("Group", vec![a]));

        assert!(diagram.is_clustered(a));
        assert!(!diagram.is_clustered(b));
    }

    #[test]
    fn test_self_loop_is_valid() {
        let mut diagram = Diagram::new("Test");
        let a = diagram.add_node(node("a", "A"));
        diagram.add_edge(Edge::new(a, a));

        assert!(diagram.validate().is_ok());
    }
}
