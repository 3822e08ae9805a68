//! Graphviz export of lists and trees.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use graphviz_rust::dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId as DotNodeId, Stmt, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use crate::list::{DoublyLinkedList, SinglyLinkedList};
use crate::node_ref::NodeId;
use crate::tree::Tree;

/// A directed graph under construction.
pub struct DotGraph {
    /// The underlying graphviz document.
    pub graph: Graph,
}

impl DotGraph {
    /// Creates an empty graph with a caption.
    pub fn new(label: &str) -> DotGraph {
        let mut g = DotGraph {
            graph: Graph::DiGraph {
                id: Id::Anonymous(String::from("sprig")),
                strict: false,
                stmts: vec![],
            },
        };
        g.graph.add_stmt(Stmt::GAttribute(GraphAttributes::Graph(vec![
            Attribute(Id::Plain(String::from("ordering")), Id::Plain(String::from("out"))),
            Attribute(Id::Plain(String::from("label")), Id::Escaped(format!("{:?}", label))),
        ])));
        g
    }

    /// Adds a node keyed by `id` and returns its graphviz identifier.
    pub fn new_node(&mut self, id: NodeId, label: &str) -> DotNodeId {
        let node_id = DotNodeId(Id::Plain(format!("\"{}\"", id)), None);
        self.graph.add_stmt(Stmt::Node(Node::new(
            node_id.clone(),
            vec![Attribute(Id::Plain(String::from("label")), Id::Escaped(format!("{:?}", label)))],
        )));
        node_id
    }

    /// Draws a solid edge.
    pub fn draw_edge(&mut self, from: &DotNodeId, to: &DotNodeId) {
        self.push_edge(from, to, vec![]);
    }

    /// Draws a dashed edge, used for back links.
    pub fn draw_back_edge(&mut self, from: &DotNodeId, to: &DotNodeId) {
        self.push_edge(
            from,
            to,
            vec![Attribute(Id::Plain(String::from("style")), Id::Plain(String::from("dashed")))],
        );
    }

    fn push_edge(&mut self, from: &DotNodeId, to: &DotNodeId, attributes: Vec<Attribute>) {
        self.graph.add_stmt(Stmt::Edge(Edge {
            ty: EdgeTy::Pair(Vertex::N(from.clone()), Vertex::N(to.clone())),
            attributes,
        }));
    }

    /// Prints the graph in DOT syntax.
    pub fn to_dot(&self) -> String {
        let mut ctx = PrinterContext::default();
        self.graph.print(&mut ctx)
    }

    /// Writes the DOT text to `path`, replacing any existing file.
    pub fn save_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("unable to open {}", path.display()))?;
        file.write_all(self.to_dot().as_bytes())
            .with_context(|| format!("unable to write {}", path.display()))?;
        Ok(())
    }
}

/// Structures that can be drawn as a [`DotGraph`].
pub trait ToGraphviz {
    /// Builds a graph with one node per element.
    fn to_graphviz(&self, label: &str) -> DotGraph;
}

impl<T: Display> ToGraphviz for Tree<T> {
    fn to_graphviz(&self, label: &str) -> DotGraph {
        fn visit<T: Display>(graph: &mut DotGraph, tree: &Tree<T>) -> DotNodeId {
            let root = tree.root();
            let id = graph.new_node(root.id(), &root.datum().to_string());
            for child in tree.children() {
                let child_id = visit(graph, child);
                graph.draw_edge(&id, &child_id);
            }
            id
        }

        let mut graph = DotGraph::new(label);
        visit(&mut graph, self);
        graph
    }
}

impl<T: Display> ToGraphviz for SinglyLinkedList<T> {
    fn to_graphviz(&self, label: &str) -> DotGraph {
        let mut graph = DotGraph::new(label);
        let mut previous: Option<DotNodeId> = None;
        let mut cursor = self.head();
        while let Some(node) = cursor.and_then(|ptr| self.node(ptr)) {
            let id = graph.new_node(node.id(), &node.datum().to_string());
            if let Some(previous) = &previous {
                graph.draw_edge(previous, &id);
            }
            previous = Some(id);
            cursor = node.next();
        }
        graph
    }
}

impl<T: Display> ToGraphviz for DoublyLinkedList<T> {
    fn to_graphviz(&self, label: &str) -> DotGraph {
        let mut graph = DotGraph::new(label);
        let mut previous: Option<DotNodeId> = None;
        let mut cursor = self.head();
        while let Some(node) = cursor.and_then(|ptr| self.node(ptr)) {
            let id = graph.new_node(node.id(), &node.datum().to_string());
            if let Some(previous) = &previous {
                graph.draw_edge(previous, &id);
                if node.prev().is_some() {
                    graph.draw_back_edge(&id, previous);
                }
            }
            previous = Some(id);
            cursor = node.next();
        }
        graph
    }
}
