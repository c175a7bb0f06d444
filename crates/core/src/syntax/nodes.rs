//! Node payloads for the member syntax tree

use serde::{Deserialize, Serialize};

/// A 0-based source range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A zero-width span at a single position
    pub fn point(line: usize, column: usize) -> Self {
        Self::new(line, column, line, column)
    }

    /// Whether `(line, column)` falls inside this span (end inclusive, so a
    /// caret placed right after the last character still counts)
    pub fn contains(&self, line: usize, column: usize) -> bool {
        let after_start =
            line > self.start_line || (line == self.start_line && column >= self.start_column);
        let before_end =
            line < self.end_line || (line == self.end_line && column <= self.end_column);
        after_start && before_end
    }
}

/// The literal text of a name or punctuation token, with its location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// 0-based line the token starts on
    pub fn line(&self) -> usize {
        self.span.start_line
    }
}

/// A possibly-dotted name as written after `namespace`.
///
/// `A.B.C` is `Qualified { left: Qualified { left: A, right: B }, right: C }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Name {
    Identifier(Token),
    Qualified { left: Box<Name>, right: Token },
}

impl Name {
    /// Build a name from dotted components, leftmost first
    pub fn from_components<I>(components: I) -> Option<Self>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut components = components.into_iter();
        let mut name = Name::Identifier(components.next()?);
        for right in components {
            name = Name::Qualified {
                left: Box::new(name),
                right,
            };
        }
        Some(name)
    }
}

/// `<T, U>` on a type or method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterList {
    pub open: Token,
    pub parameters: Vec<Token>,
    pub close: Token,
}

impl TypeParameterList {
    pub fn new(open: Token, parameters: Vec<Token>, close: Token) -> Self {
        Self {
            open,
            parameters,
            close,
        }
    }

    /// A list with default `<` / `>` delimiters and unspanned parameter names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Token::new("<", Span::default()),
            names
                .into_iter()
                .map(|n| Token::new(n, Span::default()))
                .collect(),
            Token::new(">", Span::default()),
        )
    }
}

/// A single formal parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Declared type exactly as written in source (`List<T>`, `int[]`, ...)
    pub declared_type: Option<String>,
    pub identifier: Token,
}

impl Parameter {
    pub fn new(declared_type: impl Into<String>, identifier: Token) -> Self {
        Self {
            declared_type: Some(declared_type.into()),
            identifier,
        }
    }
}

/// `(int x, string y)` on a method, constructor or indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterList {
    pub open: Token,
    pub parameters: Vec<Parameter>,
    pub close: Token,
}

impl ParameterList {
    pub fn new(open: Token, parameters: Vec<Parameter>, close: Token) -> Self {
        Self {
            open,
            parameters,
            close,
        }
    }

    /// A list with default `(` / `)` delimiters built from `(type, name)` pairs
    pub fn from_pairs<I, T, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        T: Into<String>,
        N: Into<String>,
    {
        Self::new(
            Token::new("(", Span::default()),
            pairs
                .into_iter()
                .map(|(ty, name)| Parameter::new(ty, Token::new(name, Span::default())))
                .collect(),
            Token::new(")", Span::default()),
        )
    }
}

/// The closed set of node shapes the naming walk distinguishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxKind {
    CompilationUnit,
    NamespaceDeclaration {
        name: Name,
    },
    TypeDeclaration {
        identifier: Token,
        type_parameters: Option<TypeParameterList>,
    },
    MethodDeclaration {
        identifier: Token,
        type_parameters: Option<TypeParameterList>,
        parameters: Option<ParameterList>,
    },
    ConstructorDeclaration {
        identifier: Token,
        parameters: Option<ParameterList>,
    },
    PropertyDeclaration {
        identifier: Token,
    },
    IndexerDeclaration {
        identifier: Token,
        parameters: Option<ParameterList>,
    },
    EventDeclaration {
        identifier: Token,
    },
    AccessorList,
    AccessorDeclaration {
        keyword: Token,
    },
    /// Any other grammar node, tagged with its raw kind
    Other(String),
}

impl SyntaxKind {
    /// Short label used in logs and error messages
    pub fn label(&self) -> &str {
        match self {
            SyntaxKind::CompilationUnit => "compilation unit",
            SyntaxKind::NamespaceDeclaration { .. } => "namespace",
            SyntaxKind::TypeDeclaration { .. } => "type",
            SyntaxKind::MethodDeclaration { .. } => "method",
            SyntaxKind::ConstructorDeclaration { .. } => "constructor",
            SyntaxKind::PropertyDeclaration { .. } => "property",
            SyntaxKind::IndexerDeclaration { .. } => "indexer",
            SyntaxKind::EventDeclaration { .. } => "event",
            SyntaxKind::AccessorList => "accessor list",
            SyntaxKind::AccessorDeclaration { .. } => "accessor",
            SyntaxKind::Other(kind) => kind,
        }
    }

    /// Property, indexer or event: the declarations whose accessors get
    /// `get_`/`set_`/`add_`/`remove_` names
    pub fn is_accessor_owner(&self) -> bool {
        matches!(
            self,
            SyntaxKind::PropertyDeclaration { .. }
                | SyntaxKind::IndexerDeclaration { .. }
                | SyntaxKind::EventDeclaration { .. }
        )
    }

    /// Identifier token of a named declaration
    pub fn identifier(&self) -> Option<&Token> {
        match self {
            SyntaxKind::TypeDeclaration { identifier, .. }
            | SyntaxKind::MethodDeclaration { identifier, .. }
            | SyntaxKind::ConstructorDeclaration { identifier, .. }
            | SyntaxKind::PropertyDeclaration { identifier }
            | SyntaxKind::IndexerDeclaration { identifier, .. }
            | SyntaxKind::EventDeclaration { identifier } => Some(identifier),
            _ => None,
        }
    }
}
