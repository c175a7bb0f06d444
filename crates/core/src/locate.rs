//! Member location: from a caret position to a [`BreakpointRequest`]

use crate::name::BreakpointRequest;
use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};
use thiserror::Error;
use tracing::debug;

/// Why no breakpoint request could be built for a caret position.
///
/// Line and column fields are 1-based, as an editor shows them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("line {line} is past the end of the file ({last_line} lines)")]
    OutOfRange { line: usize, last_line: usize },

    #[error("no method, constructor or accessor at {line}:{column}")]
    NoMember { line: usize, column: usize },

    #[error("caret is inside {kind} `{name}` but not inside one of its accessors")]
    NoAccessor { kind: String, name: String },
}

/// Build the request for the member under a 0-based `(line, column)` caret.
///
/// The innermost declaration containing the caret is widened outward to the
/// nearest method, constructor or accessor.
pub fn locate_member(
    tree: &SyntaxTree,
    line: usize,
    column: usize,
) -> Result<BreakpointRequest<'_>, LocateError> {
    let no_member = LocateError::NoMember {
        line: line + 1,
        column: column + 1,
    };

    let root = tree.root().ok_or_else(|| no_member.clone())?;
    let root_span = tree.node(root).span();
    if line > root_span.end_line {
        return Err(LocateError::OutOfRange {
            line: line + 1,
            last_line: root_span.end_line + 1,
        });
    }

    let innermost = innermost_at(tree, line, column).ok_or_else(|| no_member.clone())?;
    debug!(
        node = tree.kind(innermost).label(),
        line, column, "innermost node at caret"
    );

    for id in std::iter::once(innermost).chain(tree.ancestors(innermost)) {
        let kind = tree.kind(id);
        if let Some(request) = request_for(tree, id) {
            return Ok(request);
        }
        match kind {
            SyntaxKind::PropertyDeclaration { identifier }
            | SyntaxKind::IndexerDeclaration { identifier, .. }
            | SyntaxKind::EventDeclaration { identifier } => {
                return Err(LocateError::NoAccessor {
                    kind: kind.label().to_string(),
                    name: identifier.text().to_string(),
                });
            }
            SyntaxKind::TypeDeclaration { .. }
            | SyntaxKind::NamespaceDeclaration { .. }
            | SyntaxKind::CompilationUnit => break,
            _ => {}
        }
    }

    Err(no_member)
}

/// Requests for every method, constructor and accessor, in document order
pub fn collect_members(tree: &SyntaxTree) -> Vec<BreakpointRequest<'_>> {
    tree.node_ids()
        .filter_map(|id| request_for(tree, id))
        .collect()
}

/// Deepest node whose span contains the caret; later nodes win ties
fn innermost_at(tree: &SyntaxTree, line: usize, column: usize) -> Option<NodeId> {
    tree.node_ids()
        .filter(|&id| tree.node(id).span().contains(line, column))
        .max_by_key(|&id| (tree.ancestors(id).count(), id))
}

/// The request naming `id`, when `id` is a nameable member
fn request_for(tree: &SyntaxTree, id: NodeId) -> Option<BreakpointRequest<'_>> {
    match tree.kind(id) {
        SyntaxKind::MethodDeclaration {
            identifier,
            type_parameters,
            parameters,
        } => Some(
            BreakpointRequest::new(tree, id, identifier)
                .with_type_parameters(type_parameters.as_ref())
                .with_parameters(parameters.as_ref()),
        ),
        SyntaxKind::ConstructorDeclaration {
            identifier,
            parameters,
        } => Some(BreakpointRequest::new(tree, id, identifier).with_parameters(parameters.as_ref())),
        SyntaxKind::AccessorDeclaration { .. } => {
            let owner = tree.parent(id).and_then(|list| tree.parent(list))?;
            let owner_kind = tree.kind(owner);
            if !owner_kind.is_accessor_owner() {
                return None;
            }
            let identifier = owner_kind.identifier()?;
            Some(BreakpointRequest::new(tree, owner, identifier).with_accessor(id))
        }
        _ => None,
    }
}
