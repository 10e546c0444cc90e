//! Aggregation of cleaned requirements into dependency edges.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, info};

use crate::domain::{
    document::{Document, DocumentSource},
    identifier::{Identifier, clean},
    requirement::clean_requirement,
};
use crate::storage::spec_file::LoadError;

/// A directed edge: `from` declares a requirement on `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The package declaring the requirement.
    pub from: Identifier,
    /// The required package.
    pub to: Identifier,
}

impl Edge {
    /// Creates an edge between two identifiers.
    #[must_use]
    pub const fn new(from: Identifier, to: Identifier) -> Self {
        Self { from, to }
    }
}

/// The ordered multiset of dependency edges collected from a set of documents.
///
/// Edges are kept in the order they were produced: documents in input order,
/// requirements in declaration order, sub-tokens in split order. Duplicates
/// and self-loops are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: Vec<Edge>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Appends one edge per cleaned requirement sub-token of `document`.
    pub fn add_document(&mut self, document: &Document) {
        let from = clean(&document.name);

        for raw in &document.requires {
            for to in clean_requirement(raw) {
                debug!(%from, %to, raw = raw.as_str(), "requirement cleaned");
                self.edges.push(Edge::new(from.clone(), to));
            }
        }
    }

    /// The edges, in production order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Converts the edge list to a [`petgraph`] graph.
    ///
    /// Each distinct identifier becomes one node, in order of first
    /// appearance. Every edge is added, so parallel edges and self-loops are
    /// preserved.
    #[must_use]
    pub fn to_graph(&self) -> DiGraph<Identifier, ()> {
        let mut graph = DiGraph::with_capacity(self.edges.len(), self.edges.len());
        let mut nodes: HashMap<&Identifier, NodeIndex> = HashMap::new();

        for Edge { from, to } in &self.edges {
            let a = *nodes
                .entry(from)
                .or_insert_with(|| graph.add_node(from.clone()));
            let b = *nodes.entry(to).or_insert_with(|| graph.add_node(to.clone()));
            graph.add_edge(a, b, ());
        }

        graph
    }
}

impl<'a> FromIterator<&'a Document> for DependencyGraph {
    fn from_iter<T: IntoIterator<Item = &'a Document>>(iter: T) -> Self {
        let mut graph = Self::new();
        for document in iter {
            graph.add_document(document);
        }
        graph
    }
}

impl<'a> IntoIterator for &'a DependencyGraph {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Error returned when a document cannot be loaded while building a graph.
#[derive(Debug, thiserror::Error)]
#[error("failed to load document '{}'", path.display())]
pub struct BuildError {
    /// The path of the document that failed.
    pub path: PathBuf,
    /// The underlying load failure.
    #[source]
    pub source: LoadError,
}

/// Loads every document in `paths` from `source` and collects their edges.
///
/// Documents are processed sequentially in the given order; a path listed
/// twice contributes its edges twice.
///
/// # Errors
///
/// Returns a [`BuildError`] naming the first document that fails to load. No
/// partial graph is returned.
pub fn build<S, I, P>(source: &S, paths: I) -> Result<DependencyGraph, BuildError>
where
    S: DocumentSource + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut graph = DependencyGraph::new();

    for path in paths {
        let path = path.as_ref();
        info!("Processing spec file: {}", path.display());

        let document = source.load(path).map_err(|source| BuildError {
            path: path.to_path_buf(),
            source,
        })?;
        graph.add_document(&document);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Fixtures(HashMap<PathBuf, Document>);

    impl Fixtures {
        fn with(mut self, path: &str, document: Document) -> Self {
            self.0.insert(PathBuf::from(path), document);
            self
        }
    }

    impl DocumentSource for Fixtures {
        fn load(&self, path: &Path) -> Result<Document, LoadError> {
            self.0.get(path).cloned().ok_or(LoadError::NotFound)
        }
    }

    fn pairs(graph: &DependencyGraph) -> Vec<(&str, &str)> {
        graph
            .edges()
            .iter()
            .map(|edge| (edge.from.as_str(), edge.to.as_str()))
            .collect()
    }

    #[test]
    fn splits_and_cleans_in_declaration_order() {
        let document = Document::new("A", ["B, C", "D = 1.0"]);
        let graph: DependencyGraph = [&document].into_iter().collect();

        assert_eq!(pairs(&graph), vec![("A", "B"), ("A", "C"), ("A", "D")]);
    }

    #[test]
    fn document_name_is_cleaned_like_requirements() {
        let document = Document::new("%{name}-tools", ["my-lib >= 2"]);
        let graph: DependencyGraph = [&document].into_iter().collect();

        assert_eq!(pairs(&graph), vec![("name_tools", "my_lib >")]);
    }

    #[test]
    fn no_documents_yields_empty_graph() {
        let graph = build(&Fixtures::default(), Vec::<PathBuf>::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn document_without_requirements_adds_no_edges() {
        let fixtures = Fixtures::default().with("a.spec", Document::new("A", Vec::<String>::new()));
        let graph = build(&fixtures, ["a.spec"]).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn duplicate_documents_duplicate_edges() {
        let fixtures = Fixtures::default()
            .with("a.spec", Document::new("A", ["B, C", "D"]))
            .with("b.spec", Document::new("B", ["C"]));

        let graph = build(&fixtures, ["a.spec", "b.spec", "a.spec"]).unwrap();

        assert_eq!(graph.len(), 3 + 1 + 3);
        assert_eq!(
            pairs(&graph),
            vec![
                ("A", "B"),
                ("A", "C"),
                ("A", "D"),
                ("B", "C"),
                ("A", "B"),
                ("A", "C"),
                ("A", "D"),
            ]
        );
    }

    #[test]
    fn repeated_requirements_are_not_deduplicated() {
        let document = Document::new("A", ["B", "B = 1", "B, B"]);
        let graph: DependencyGraph = [&document].into_iter().collect();

        assert_eq!(graph.len(), 4);
        assert!(graph.edges().iter().all(|edge| edge.to == "B"));
    }

    #[test]
    fn self_requirement_is_kept() {
        let document = Document::new("A", ["A"]);
        let graph: DependencyGraph = [&document].into_iter().collect();

        assert_eq!(pairs(&graph), vec![("A", "A")]);
    }

    #[test]
    fn empty_identifiers_are_kept() {
        let document = Document::new("A", ["B,", ">= 1"]);
        let graph: DependencyGraph = [&document].into_iter().collect();

        assert_eq!(pairs(&graph), vec![("A", "B"), ("A", ""), ("A", ">")]);
    }

    #[test]
    fn load_failure_names_the_document_and_aborts() {
        let fixtures = Fixtures::default().with("a.spec", Document::new("A", ["B"]));

        let err = build(&fixtures, ["a.spec", "missing.spec", "a.spec"]).unwrap_err();

        assert_eq!(err.path, PathBuf::from("missing.spec"));
        assert!(matches!(err.source, LoadError::NotFound));
        assert!(err.to_string().contains("missing.spec"));
    }

    #[test]
    fn converts_to_petgraph_preserving_multiplicity() {
        let a = Document::new("A", ["B", "B", "A"]);
        let b = Document::new("B", ["C"]);
        let graph: DependencyGraph = [&a, &b].into_iter().collect();

        let petgraph = graph.to_graph();

        assert_eq!(petgraph.node_count(), 3);
        assert_eq!(petgraph.edge_count(), 4);
        let labels: Vec<_> = petgraph.node_weights().map(Identifier::as_str).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn iterates_edges_by_reference() {
        let document = Document::new("A", ["B", "C"]);
        let graph: DependencyGraph = [&document].into_iter().collect();

        let targets: Vec<_> = (&graph).into_iter().map(|edge| edge.to.to_string()).collect();
        assert_eq!(targets, vec!["B", "C"]);
    }
}
