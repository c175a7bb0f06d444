//! Immutable member syntax tree
//!
//! A flat arena of declaration nodes. Every node records its parent as an
//! index, so walking from a member out to the compilation unit never needs
//! owned back-pointers.

pub mod nodes;

pub use nodes::{Name, Parameter, ParameterList, Span, SyntaxKind, Token, TypeParameterList};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Index of a node inside its [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node entry in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    span: Span,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SyntaxNode {
    pub fn kind(&self) -> &SyntaxKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The declaration tree of one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,

    /// Source file the tree was built from
    file_path: PathBuf,
}

impl SyntaxTree {
    /// Create an empty tree for the given source file
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            nodes: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Append a node under `parent` (or as a root when `None`)
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_node(&mut self, parent: Option<NodeId>, kind: SyntaxKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind,
            span,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &SyntaxKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Strict ancestors of `id`, innermost first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// The first node added without a parent
    pub fn root(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.parent.is_none())
            .map(NodeId)
    }

    /// All node ids in insertion (document) order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator returned by [`SyntaxTree::ancestors`]
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
