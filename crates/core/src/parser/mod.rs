//! Source parsing into member syntax trees

pub mod csharp;

pub use csharp::CSharpParser;

use crate::syntax::SyntaxTree;
use rayon::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for parsing operations
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}

impl CSharpParser {
    /// Parse multiple files in parallel.
    ///
    /// Each file gets its own tree-sitter parser, so there is no contention.
    /// Trees come back in input order; failures are reported as
    /// `"path: error"` strings. Returns `(trees, parse_errors)`.
    pub fn parse_files_parallel(&self, files: &[PathBuf]) -> (Vec<SyntaxTree>, Vec<String>) {
        let per_file: Vec<Result<SyntaxTree, String>> = files
            .par_iter()
            .map(|file| {
                self.parse_file(file)
                    .map_err(|e| format!("{}: {}", file.display(), e))
            })
            .collect();

        let mut trees = Vec::new();
        let mut errors = Vec::new();

        for result in per_file {
            match result {
                Ok(tree) => trees.push(tree),
                Err(e) => errors.push(e),
            }
        }

        (trees, errors)
    }
}
