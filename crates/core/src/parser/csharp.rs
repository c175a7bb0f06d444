//! C# declaration lowering using Tree-sitter
//!
//! Parses C# with `tree-sitter-c-sharp` and keeps only the declaration
//! skeleton the breakpoint namer walks: namespaces, types, methods,
//! constructors, properties, indexers, events and their accessors.

use super::ParseError;
use crate::syntax::{
    Name, NodeId, Parameter, ParameterList, Span, SyntaxKind, SyntaxTree, Token,
    TypeParameterList,
};
use std::path::Path;
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// CLR name of an indexer without an `[IndexerName]` attribute
pub const DEFAULT_INDEXER_NAME: &str = "Item";

/// Grammar nodes that group declarations without forming a scope of their own
const TRANSPARENT_KINDS: &[&str] = &[
    "declaration_list",
    "preproc_if",
    "preproc_elif",
    "preproc_else",
    "preproc_region",
];

const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "struct_declaration",
    "interface_declaration",
    "record_declaration",
    "record_struct_declaration",
];

const ACCESSOR_KEYWORDS: &[&str] = &["get", "set", "init", "add", "remove"];

/// Lowering context bundling the source text and the tree being built
struct LowerCtx<'a> {
    source: &'a str,
    tree: SyntaxTree,
}

/// C# parser producing [`SyntaxTree`]s
pub struct CSharpParser {
    language: tree_sitter::Language,
}

impl Default for CSharpParser {
    fn default() -> Self {
        Self {
            language: tree_sitter_c_sharp::LANGUAGE.into(),
        }
    }
}

impl CSharpParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// File extensions this parser handles
    pub fn file_extensions(&self) -> &[&str] {
        &[".cs", ".csx"]
    }

    /// Whether `path` has one of [`Self::file_extensions`]
    pub fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let with_dot = format!(".{}", ext.to_ascii_lowercase());
                self.file_extensions().contains(&with_dot.as_str())
            })
            .unwrap_or(false)
    }

    fn create_parser(&self) -> Result<Parser, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::TreeSitter(e.to_string()))?;
        Ok(parser)
    }

    fn parse_tree(&self, source: &str) -> Result<Tree, ParseError> {
        let mut parser = self.create_parser()?;
        parser
            .parse(source, None)
            .ok_or_else(|| ParseError::ParseFailed("Failed to parse C# source".to_string()))
    }

    /// Read and lower a file
    pub fn parse_file(&self, file_path: &Path) -> Result<SyntaxTree, ParseError> {
        if !self.handles(file_path) {
            return Err(ParseError::UnsupportedLanguage(
                file_path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            ));
        }
        let source = std::fs::read_to_string(file_path)?;
        self.parse_source(&source, file_path)
    }

    /// Lower source text; `file_path` is recorded on the tree as-is
    pub fn parse_source(&self, source: &str, file_path: &Path) -> Result<SyntaxTree, ParseError> {
        let ts_tree = self.parse_tree(source)?;
        let root = ts_tree.root_node();

        let mut ctx = LowerCtx {
            source,
            tree: SyntaxTree::new(file_path),
        };
        let unit = ctx
            .tree
            .add_node(None, SyntaxKind::CompilationUnit, node_span(&root));
        lower_declarations(&root, unit, &mut ctx);

        debug!(
            file = %file_path.display(),
            nodes = ctx.tree.len(),
            has_errors = root.has_error(),
            "lowered C# source"
        );
        Ok(ctx.tree)
    }
}

/// Lower the named children of `container` beneath `parent`.
///
/// A file-scoped namespace adopts every declaration that follows it.
fn lower_declarations(container: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let mut scope = parent;
    let mut cursor = container.walk();
    for child in container.named_children(&mut cursor) {
        if child.kind() == "file_scoped_namespace_declaration" {
            let mut span = node_span(&child);
            let end = container.end_position();
            span.end_line = end.row;
            span.end_column = end.column;
            if let Some(ns) = lower_namespace(&child, scope, span, ctx) {
                scope = ns;
            }
            continue;
        }
        lower_node(&child, scope, ctx);
    }
}

fn lower_node(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let kind = node.kind();

    if TRANSPARENT_KINDS.contains(&kind) {
        lower_declarations(node, parent, ctx);
        return;
    }
    if TYPE_DECLARATION_KINDS.contains(&kind) {
        lower_type(node, parent, ctx);
        return;
    }

    match kind {
        "namespace_declaration" => {
            lower_namespace(node, parent, node_span(node), ctx);
        }
        "method_declaration" => lower_method(node, parent, ctx),
        "constructor_declaration" => lower_constructor(node, parent, ctx),
        "property_declaration" => lower_property(node, parent, ctx),
        "indexer_declaration" => lower_indexer(node, parent, ctx),
        "event_declaration" => lower_event(node, parent, ctx),
        "ERROR" => {
            // Keep declarations recovered inside an error node, but let the
            // error itself end any scope walk that reaches it.
            let id = ctx.tree.add_node(
                Some(parent),
                SyntaxKind::Other(kind.to_string()),
                node_span(node),
            );
            lower_declarations(node, id, ctx);
        }
        _ => {
            ctx.tree.add_node(
                Some(parent),
                SyntaxKind::Other(kind.to_string()),
                node_span(node),
            );
        }
    }
}

fn lower_namespace(
    node: &tree_sitter::Node,
    parent: NodeId,
    span: Span,
    ctx: &mut LowerCtx,
) -> Option<NodeId> {
    let name = node
        .child_by_field_name("name")
        .and_then(|n| lower_name(&n, ctx.source))?;

    let id = ctx
        .tree
        .add_node(Some(parent), SyntaxKind::NamespaceDeclaration { name }, span);

    match node.child_by_field_name("body") {
        Some(body) => lower_declarations(&body, id, ctx),
        None => {
            // File-scoped namespaces may carry their declarations as children
            let name_id = node.child_by_field_name("name").map(|n| n.id());
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if Some(child.id()) != name_id {
                    lower_node(&child, id, ctx);
                }
            }
        }
    }
    Some(id)
}

fn lower_type(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let identifier = match field_token(node, "name", ctx.source) {
        Some(t) => t,
        None => return,
    };
    let type_parameters = find_child_by_kind(node, "type_parameter_list")
        .map(|list| lower_type_parameters(&list, ctx.source));

    let id = ctx.tree.add_node(
        Some(parent),
        SyntaxKind::TypeDeclaration {
            identifier,
            type_parameters,
        },
        node_span(node),
    );

    if let Some(body) = node
        .child_by_field_name("body")
        .or_else(|| find_child_by_kind(node, "declaration_list"))
    {
        lower_declarations(&body, id, ctx);
    }
}

fn lower_method(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let identifier = match field_token(node, "name", ctx.source) {
        Some(t) => t,
        None => return,
    };
    let type_parameters = find_child_by_kind(node, "type_parameter_list")
        .map(|list| lower_type_parameters(&list, ctx.source));
    let parameters = node
        .child_by_field_name("parameters")
        .map(|list| lower_parameters(&list, ctx.source));

    ctx.tree.add_node(
        Some(parent),
        SyntaxKind::MethodDeclaration {
            identifier,
            type_parameters,
            parameters,
        },
        node_span(node),
    );
}

fn lower_constructor(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let identifier = match field_token(node, "name", ctx.source) {
        Some(t) => t,
        None => return,
    };
    let parameters = node
        .child_by_field_name("parameters")
        .map(|list| lower_parameters(&list, ctx.source));

    ctx.tree.add_node(
        Some(parent),
        SyntaxKind::ConstructorDeclaration {
            identifier,
            parameters,
        },
        node_span(node),
    );
}

fn lower_property(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let identifier = match field_token(node, "name", ctx.source) {
        Some(t) => t,
        None => return,
    };
    let id = ctx.tree.add_node(
        Some(parent),
        SyntaxKind::PropertyDeclaration { identifier },
        node_span(node),
    );
    lower_accessor_list(node, id, ctx);
}

fn lower_event(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let identifier = match field_token(node, "name", ctx.source) {
        Some(t) => t,
        None => return,
    };
    let id = ctx.tree.add_node(
        Some(parent),
        SyntaxKind::EventDeclaration { identifier },
        node_span(node),
    );
    lower_accessor_list(node, id, ctx);
}

fn lower_indexer(node: &tree_sitter::Node, parent: NodeId, ctx: &mut LowerCtx) {
    let span = find_child_by_kind(node, "this")
        .map(|this| node_span(&this))
        .unwrap_or_else(|| node_span(node));
    let name = indexer_name_attribute(node, ctx.source)
        .unwrap_or_else(|| DEFAULT_INDEXER_NAME.to_string());
    let parameters = node
        .child_by_field_name("parameters")
        .or_else(|| find_child_by_kind(node, "bracketed_parameter_list"))
        .map(|list| lower_parameters(&list, ctx.source));

    let id = ctx.tree.add_node(
        Some(parent),
        SyntaxKind::IndexerDeclaration {
            identifier: Token::new(name, span),
            parameters,
        },
        node_span(node),
    );
    lower_accessor_list(node, id, ctx);
}

fn lower_accessor_list(owner: &tree_sitter::Node, owner_id: NodeId, ctx: &mut LowerCtx) {
    let list = match find_child_by_kind(owner, "accessor_list") {
        Some(l) => l,
        None => {
            lower_expression_body(owner, owner_id, ctx);
            return;
        }
    };
    let list_id = ctx
        .tree
        .add_node(Some(owner_id), SyntaxKind::AccessorList, node_span(&list));

    let mut cursor = list.walk();
    for accessor in list.named_children(&mut cursor) {
        if accessor.kind() != "accessor_declaration" {
            continue;
        }
        if let Some(keyword) = accessor_keyword(&accessor, ctx.source) {
            ctx.tree.add_node(
                Some(list_id),
                SyntaxKind::AccessorDeclaration { keyword },
                node_span(&accessor),
            );
        }
    }
}

/// `int Q => 3;` compiles to a lone getter, spanned over the `=> expr` clause
fn lower_expression_body(owner: &tree_sitter::Node, owner_id: NodeId, ctx: &mut LowerCtx) {
    let Some(arrow) = find_child_by_kind(owner, "arrow_expression_clause") else {
        return;
    };
    let span = node_span(&arrow);
    let list_id = ctx
        .tree
        .add_node(Some(owner_id), SyntaxKind::AccessorList, span);
    ctx.tree.add_node(
        Some(list_id),
        SyntaxKind::AccessorDeclaration {
            keyword: Token::new("get", span),
        },
        span,
    );
}

/// `get`/`set`/`init`/`add`/`remove` token of an accessor
fn accessor_keyword(accessor: &tree_sitter::Node, source: &str) -> Option<Token> {
    if let Some(token) = field_token(accessor, "name", source) {
        return Some(token);
    }
    let mut cursor = accessor.walk();
    let keyword = accessor
        .children(&mut cursor)
        .find(|c| ACCESSOR_KEYWORDS.contains(&c.kind()));
    keyword.and_then(|k| token_of(&k, source))
}

/// Name given by `[IndexerName("Name")]`, if present
fn indexer_name_attribute(node: &tree_sitter::Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    for list in node.children(&mut cursor) {
        if list.kind() != "attribute_list" {
            continue;
        }
        let mut attr_cursor = list.walk();
        for attr in list.named_children(&mut attr_cursor) {
            if attr.kind() != "attribute" {
                continue;
            }
            let Some(attr_name) = node_field_text(&attr, "name", source) else {
                continue;
            };
            let simple = attr_name.rsplit('.').next().unwrap_or(&attr_name);
            if simple != "IndexerName" && simple != "IndexerNameAttribute" {
                continue;
            }
            let args = find_child_by_kind(&attr, "attribute_argument_list")?;
            let literal = find_descendant_by_kind(&args, "string_literal")?;
            let text = literal.utf8_text(source.as_bytes()).ok()?;
            let value = text.trim_start_matches('@').trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Lower an `identifier` or left-recursive `qualified_name`
fn lower_name(node: &tree_sitter::Node, source: &str) -> Option<Name> {
    match node.kind() {
        "qualified_name" => {
            let left = node
                .child_by_field_name("qualifier")
                .and_then(|q| lower_name(&q, source))?;
            let right = field_token(node, "name", source)?;
            Some(Name::Qualified {
                left: Box::new(left),
                right,
            })
        }
        _ => token_of(node, source).map(Name::Identifier),
    }
}

fn lower_type_parameters(list: &tree_sitter::Node, source: &str) -> TypeParameterList {
    let mut open = Token::new("<", Span::default());
    let mut close = Token::new(">", Span::default());
    let mut parameters = Vec::new();

    let mut cursor = list.walk();
    for child in list.children(&mut cursor) {
        match child.kind() {
            "<" => open = token_of(&child, source).unwrap_or(open),
            ">" => close = token_of(&child, source).unwrap_or(close),
            "type_parameter" => {
                let name = field_token(&child, "name", source).or_else(|| {
                    find_child_by_kind(&child, "identifier").and_then(|n| token_of(&n, source))
                });
                if let Some(name) = name {
                    parameters.push(name);
                }
            }
            _ => {}
        }
    }

    TypeParameterList::new(open, parameters, close)
}

/// Lower a `parameter_list` or `bracketed_parameter_list`
fn lower_parameters(list: &tree_sitter::Node, source: &str) -> ParameterList {
    let bracketed = list.kind() == "bracketed_parameter_list";
    let (open_text, close_text) = if bracketed { ("[", "]") } else { ("(", ")") };
    let mut open = Token::new(open_text, Span::default());
    let mut close = Token::new(close_text, Span::default());
    let mut parameters = Vec::new();

    // A `params` parameter has no `parameter` node; its `type` and `name`
    // fields sit directly on the list.
    let mut pending_type: Option<String> = None;
    let mut cursor = list.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            match (cursor.field_name(), child.kind()) {
                (Some("type"), _) => {
                    pending_type = child.utf8_text(source.as_bytes()).ok().map(String::from);
                }
                (Some("name"), _) => {
                    if let Some(identifier) = token_of(&child, source) {
                        parameters.push(Parameter {
                            declared_type: pending_type.take(),
                            identifier,
                        });
                    }
                }
                (_, k) if k == open_text => open = token_of(&child, source).unwrap_or(open),
                (_, k) if k == close_text => close = token_of(&child, source).unwrap_or(close),
                (_, "parameter") => {
                    if let Some(identifier) = field_token(&child, "name", source) {
                        parameters.push(Parameter {
                            declared_type: node_field_text(&child, "type", source),
                            identifier,
                        });
                    }
                }
                _ => {}
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    ParameterList::new(open, parameters, close)
}

// --- Free helper functions ---

fn node_span(node: &tree_sitter::Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(start.row, start.column, end.row, end.column)
}

fn token_of(node: &tree_sitter::Node, source: &str) -> Option<Token> {
    let text = node.utf8_text(source.as_bytes()).ok()?;
    Some(Token::new(text, node_span(node)))
}

fn field_token(node: &tree_sitter::Node, field: &str, source: &str) -> Option<Token> {
    token_of(&node.child_by_field_name(field)?, source)
}

fn node_field_text(node: &tree_sitter::Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)?
        .utf8_text(source.as_bytes())
        .ok()
        .map(|s| s.to_string())
}

/// Find the first child node with the given kind
fn find_child_by_kind<'a>(
    node: &tree_sitter::Node<'a>,
    kind: &str,
) -> Option<tree_sitter::Node<'a>> {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).find(|c| c.kind() == kind);
    result
}

/// Depth-first search for the first descendant with the given kind
fn find_descendant_by_kind<'a>(
    node: &tree_sitter::Node<'a>,
    kind: &str,
) -> Option<tree_sitter::Node<'a>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();
    for child in children {
        if child.kind() == kind {
            return Some(child);
        }
        if let Some(found) = find_descendant_by_kind(&child, kind) {
            return Some(found);
        }
    }
    None
}
