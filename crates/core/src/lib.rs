//! bpname core - function breakpoint names for C# members
//!
//! This crate derives the fully-qualified name a debugger's "New Function
//! Breakpoint" dialog accepts for one method, constructor or accessor:
//! - C# lowering via Tree-sitter into an immutable declaration tree
//! - Caret-to-member location
//! - Scope-chain naming with generic and overload segments

pub mod config;
pub mod discovery;
pub mod locate;
pub mod name;
pub mod parser;
pub mod syntax;

pub use config::BpnameConfig;
pub use discovery::discover_files;
pub use locate::{collect_members, locate_member, LocateError};
pub use name::{BreakpointName, BreakpointRequest, NameFactory};
pub use parser::{CSharpParser, ParseError};
pub use syntax::{NodeId, SyntaxKind, SyntaxTree};

/// bpname version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name every method, constructor and accessor in `tree`, in document order
pub fn breakpoint_names(tree: &SyntaxTree) -> Vec<BreakpointName> {
    collect_members(tree)
        .into_iter()
        .map(|request| NameFactory::new(request).build())
        .collect()
}
