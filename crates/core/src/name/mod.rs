//! Function breakpoint name construction
//!
//! Builds the text a debugger's "New Function Breakpoint" dialog accepts for
//! one specific member overload, e.g. `MyApp.Widgets.Button.set_Text`, and
//! appends a file/line locator:
//!
//! ```text
//! MyApp.Utils.Helper<T>.Compute<U>(int x, string y)
//! at /src/Helper.cs[:10]
//! ```

pub mod segments;

pub use segments::{parameter_list_segment, type_parameter_segment};

use crate::syntax::{
    Name, NodeId, ParameterList, SyntaxKind, SyntaxTree, Token, TypeParameterList,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::trace;

/// Everything needed to name one member, borrowed from its syntax tree
#[derive(Debug, Clone, Copy)]
pub struct BreakpointRequest<'t> {
    /// Tree the member lives in
    pub tree: &'t SyntaxTree,

    /// Declaration the scope walk starts from (its parent is the innermost scope)
    pub member: NodeId,

    /// Name token of the member; also the source of the location suffix
    pub identifier: &'t Token,

    /// Set when the member is a property, indexer or event accessor
    pub accessor: Option<NodeId>,

    pub type_parameters: Option<&'t TypeParameterList>,

    pub parameters: Option<&'t ParameterList>,
}

impl<'t> BreakpointRequest<'t> {
    pub fn new(tree: &'t SyntaxTree, member: NodeId, identifier: &'t Token) -> Self {
        Self {
            tree,
            member,
            identifier,
            accessor: None,
            type_parameters: None,
            parameters: None,
        }
    }

    pub fn with_accessor(mut self, accessor: NodeId) -> Self {
        self.accessor = Some(accessor);
        self
    }

    pub fn with_type_parameters(mut self, list: Option<&'t TypeParameterList>) -> Self {
        self.type_parameters = list;
        self
    }

    pub fn with_parameters(mut self, list: Option<&'t ParameterList>) -> Self {
        self.parameters = list;
        self
    }
}

/// A rendered breakpoint name and where the member is declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointName {
    /// Qualified member name, e.g. `MyApp.Widgets.Button.set_Text`
    pub name: String,

    /// Source file of the member
    pub file: PathBuf,

    /// 1-based line of the member identifier
    pub line: usize,
}

impl fmt::Display for BreakpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nat {}[:{}]", self.name, self.file.display(), self.line)
    }
}

/// Builds [`BreakpointName`]s from a [`BreakpointRequest`].
///
/// Pure: the tree is only read, and rendering the same request twice yields
/// identical text.
#[derive(Debug, Clone, Copy)]
pub struct NameFactory<'t> {
    request: BreakpointRequest<'t>,
}

impl<'t> NameFactory<'t> {
    pub fn new(request: BreakpointRequest<'t>) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &BreakpointRequest<'t> {
        &self.request
    }

    /// Build the structured name
    pub fn build(&self) -> BreakpointName {
        let mut name = self.scope_prefix();
        name.push_str(&self.member_segment());

        BreakpointName {
            name,
            file: self.request.tree.file_path().to_path_buf(),
            line: self.request.identifier.line() + 1,
        }
    }

    /// Build and render the full clipboard text
    pub fn render(&self) -> String {
        self.build().to_string()
    }

    /// Enclosing types then namespaces, outermost first, each followed by `.`
    ///
    /// Empty for a member with no enclosing type or namespace.
    pub fn scope_prefix(&self) -> String {
        let mut segments = collect_scope_segments(self.request.tree, self.request.member);
        segments.reverse();
        segments.iter().map(|s| format!("{}.", s)).collect()
    }

    /// `get_Value` for accessors, `Compute<U>(int x)` otherwise
    pub fn member_segment(&self) -> String {
        let identifier = self.request.identifier.text();

        if let Some(keyword) = self.accessor_keyword() {
            return format!("{}_{}", keyword.text(), identifier);
        }

        let mut segment = identifier.to_string();
        if let Some(list) = self.request.type_parameters {
            segment.push_str(&type_parameter_segment(list));
        }
        if let Some(list) = self.request.parameters {
            segment.push_str(&parameter_list_segment(list));
        }
        segment
    }

    /// Keyword of the accessor, but only when it sits in an accessor list
    /// owned by a property, indexer or event. Any other shape is named like
    /// an ordinary member.
    fn accessor_keyword(&self) -> Option<&'t Token> {
        let tree = self.request.tree;
        let accessor = self.request.accessor?;

        let owner = tree.parent(accessor).and_then(|list| tree.parent(list))?;
        if !tree.kind(owner).is_accessor_owner() {
            trace!(
                owner = tree.kind(owner).label(),
                "accessor owner is not a property, indexer or event"
            );
            return None;
        }

        match tree.kind(accessor) {
            SyntaxKind::AccessorDeclaration { keyword } => Some(keyword),
            _ => None,
        }
    }
}

impl fmt::Display for NameFactory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.build(), f)
    }
}

/// Walk outward from `member`, collecting nested type segments and then
/// namespace segments, innermost first. Stops at the first ancestor that is
/// neither.
fn collect_scope_segments(tree: &SyntaxTree, member: NodeId) -> Vec<String> {
    let mut reverse_segments = Vec::new();
    let mut current = tree.parent(member);

    while let Some(id) = current {
        let SyntaxKind::TypeDeclaration {
            identifier,
            type_parameters,
        } = tree.kind(id)
        else {
            break;
        };

        match type_parameters {
            Some(list) => reverse_segments.push(format!(
                "{}{}",
                identifier.text(),
                type_parameter_segment(list)
            )),
            None => reverse_segments.push(identifier.text().to_string()),
        }
        current = tree.parent(id);
    }

    while let Some(id) = current {
        let SyntaxKind::NamespaceDeclaration { name } = tree.kind(id) else {
            break;
        };

        push_namespace_segments(name, &mut reverse_segments);
        current = tree.parent(id);
    }

    if let Some(id) = current {
        trace!(stop = tree.kind(id).label(), "scope walk stopped");
    }

    reverse_segments
}

/// Unwind `A.B.C` right to left, pushing `C`, `B`, `A`
fn push_namespace_segments(name: &Name, reverse_segments: &mut Vec<String>) {
    let mut current = name;
    loop {
        match current {
            Name::Qualified { left, right } => {
                reverse_segments.push(right.text().to_string());
                current = left;
            }
            Name::Identifier(token) => {
                reverse_segments.push(token.text().to_string());
                break;
            }
        }
    }
}
