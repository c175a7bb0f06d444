//! Tests for breakpoint name construction over hand-built syntax trees
//!
//! These trees are assembled directly, without a parser, so each test pins
//! down exactly which scope shapes the naming walk sees.

use bpname_core::name::{BreakpointRequest, NameFactory};
use bpname_core::syntax::{
    Name, NodeId, ParameterList, Span, SyntaxKind, SyntaxTree, Token, TypeParameterList,
};

fn token(text: &str) -> Token {
    Token::new(text, Span::default())
}

fn token_on_line(text: &str, line: usize) -> Token {
    Token::new(text, Span::new(line, 0, line, text.len()))
}

fn namespace(tree: &mut SyntaxTree, parent: NodeId, dotted: &str) -> NodeId {
    let name = Name::from_components(dotted.split('.').map(token)).unwrap();
    tree.add_node(
        Some(parent),
        SyntaxKind::NamespaceDeclaration { name },
        Span::default(),
    )
}

fn type_decl(
    tree: &mut SyntaxTree,
    parent: NodeId,
    name: &str,
    type_parameters: Option<TypeParameterList>,
) -> NodeId {
    tree.add_node(
        Some(parent),
        SyntaxKind::TypeDeclaration {
            identifier: token(name),
            type_parameters,
        },
        Span::default(),
    )
}

fn method(tree: &mut SyntaxTree, parent: NodeId, name: &str) -> NodeId {
    tree.add_node(
        Some(parent),
        SyntaxKind::MethodDeclaration {
            identifier: token(name),
            type_parameters: None,
            parameters: None,
        },
        Span::default(),
    )
}

fn unit(path: &str) -> (SyntaxTree, NodeId) {
    let mut tree = SyntaxTree::new(path);
    let root = tree.add_node(None, SyntaxKind::CompilationUnit, Span::default());
    (tree, root)
}

/// Property (or other owner) with one accessor; returns (owner, accessor)
fn owner_with_accessor(
    tree: &mut SyntaxTree,
    parent: NodeId,
    owner: SyntaxKind,
    keyword: &str,
) -> (NodeId, NodeId) {
    let owner = tree.add_node(Some(parent), owner, Span::default());
    let list = tree.add_node(Some(owner), SyntaxKind::AccessorList, Span::default());
    let accessor = tree.add_node(
        Some(list),
        SyntaxKind::AccessorDeclaration {
            keyword: token(keyword),
        },
        Span::default(),
    );
    (owner, accessor)
}

fn first_line(rendered: &str) -> &str {
    rendered.lines().next().unwrap()
}

#[test]
fn test_member_without_scopes_has_no_prefix() {
    let (mut tree, root) = unit("/src/Top.cs");
    let m = method(&mut tree, root, "Main");
    let identifier = token("Main");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "");
    assert_eq!(first_line(&factory.render()), "Main");
}

#[test]
fn test_nested_types_inside_namespace() {
    let (mut tree, root) = unit("/src/N.cs");
    let ns = namespace(&mut tree, root, "N");
    let a = type_decl(&mut tree, ns, "A", None);
    let b = type_decl(&mut tree, a, "B", None);
    let m = method(&mut tree, b, "Run");
    let identifier = token("Run");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "N.A.B.");
    assert_eq!(first_line(&factory.render()), "N.A.B.Run");
}

#[test]
fn test_dotted_namespace_keeps_source_order() {
    let (mut tree, root) = unit("/src/N.cs");
    let ns = namespace(&mut tree, root, "N1.N2.N3");
    let t = type_decl(&mut tree, ns, "T", None);
    let m = method(&mut tree, t, "Go");
    let identifier = token("Go");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "N1.N2.N3.T.");
}

#[test]
fn test_nested_namespace_declarations() {
    let (mut tree, root) = unit("/src/N.cs");
    let outer = namespace(&mut tree, root, "Company.Product");
    let inner = namespace(&mut tree, outer, "Feature");
    let t = type_decl(&mut tree, inner, "Service", None);
    let m = method(&mut tree, t, "Start");
    let identifier = token("Start");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "Company.Product.Feature.Service.");
}

#[test]
fn test_generic_type_segment() {
    let (mut tree, root) = unit("/src/Foo.cs");
    let t = type_decl(
        &mut tree,
        root,
        "Foo",
        Some(TypeParameterList::from_names(["T", "U"])),
    );
    let m = method(&mut tree, t, "Bar");
    let identifier = token("Bar");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "Foo<T, U>.");
}

#[test]
fn test_empty_type_parameter_list_renders_brackets() {
    let (mut tree, root) = unit("/src/Foo.cs");
    let t = type_decl(
        &mut tree,
        root,
        "Foo",
        Some(TypeParameterList::from_names(Vec::<String>::new())),
    );
    let m = method(&mut tree, t, "Bar");
    let identifier = token("Bar");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "Foo<>.");
}

#[test]
fn test_generic_method_with_parameters() {
    let (mut tree, root) = unit("/src/Helper.cs");
    let ns = namespace(&mut tree, root, "MyApp.Utils");
    let t = type_decl(
        &mut tree,
        ns,
        "Helper",
        Some(TypeParameterList::from_names(["T"])),
    );
    let m = method(&mut tree, t, "Compute");
    let identifier = token_on_line("Compute", 9);
    let type_parameters = TypeParameterList::from_names(["U"]);
    let parameters = ParameterList::from_pairs([("int", "x"), ("string", "y")]);

    let request = BreakpointRequest::new(&tree, m, &identifier)
        .with_type_parameters(Some(&type_parameters))
        .with_parameters(Some(&parameters));
    let factory = NameFactory::new(request);

    assert_eq!(factory.member_segment(), "Compute<U>(int x, string y)");
    assert_eq!(
        factory.render(),
        "MyApp.Utils.Helper<T>.Compute<U>(int x, string y)\nat /src/Helper.cs[:10]"
    );
}

#[test]
fn test_property_getter_ignores_parameter_lists() {
    let (mut tree, root) = unit("/src/Box.cs");
    let t = type_decl(&mut tree, root, "Box", None);
    let (owner, getter) = owner_with_accessor(
        &mut tree,
        t,
        SyntaxKind::PropertyDeclaration {
            identifier: token("Value"),
        },
        "get",
    );
    let identifier = token("Value");
    let type_parameters = TypeParameterList::from_names(["T"]);
    let parameters = ParameterList::from_pairs([("int", "index")]);

    let request = BreakpointRequest::new(&tree, owner, &identifier)
        .with_accessor(getter)
        .with_type_parameters(Some(&type_parameters))
        .with_parameters(Some(&parameters));

    assert_eq!(first_line(&NameFactory::new(request).render()), "Box.get_Value");
}

#[test]
fn test_indexer_setter() {
    let (mut tree, root) = unit("/src/List.cs");
    let t = type_decl(&mut tree, root, "MyList", None);
    let (owner, setter) = owner_with_accessor(
        &mut tree,
        t,
        SyntaxKind::IndexerDeclaration {
            identifier: token("Item"),
            parameters: Some(ParameterList::from_pairs([("int", "i")])),
        },
        "set",
    );
    let identifier = token("Item");

    let request = BreakpointRequest::new(&tree, owner, &identifier).with_accessor(setter);
    assert_eq!(
        first_line(&NameFactory::new(request).render()),
        "MyList.set_Item"
    );
}

#[test]
fn test_event_accessors() {
    let (mut tree, root) = unit("/src/Source.cs");
    let t = type_decl(&mut tree, root, "Source", None);
    let (owner, add) = owner_with_accessor(
        &mut tree,
        t,
        SyntaxKind::EventDeclaration {
            identifier: token("Changed"),
        },
        "add",
    );
    let identifier = token("Changed");

    let request = BreakpointRequest::new(&tree, owner, &identifier).with_accessor(add);
    assert_eq!(
        first_line(&NameFactory::new(request).render()),
        "Source.add_Changed"
    );
}

#[test]
fn test_accessor_with_unexpected_owner_falls_back_to_plain_member() {
    let (mut tree, root) = unit("/src/Odd.cs");
    let t = type_decl(&mut tree, root, "Odd", None);
    // Accessor list hanging off a method: not a property, indexer or event
    let (owner, getter) = owner_with_accessor(
        &mut tree,
        t,
        SyntaxKind::MethodDeclaration {
            identifier: token("Strange"),
            type_parameters: None,
            parameters: None,
        },
        "get",
    );
    let identifier = token("Strange");
    let parameters = ParameterList::from_pairs([("int", "x")]);

    let request = BreakpointRequest::new(&tree, owner, &identifier)
        .with_accessor(getter)
        .with_parameters(Some(&parameters));
    assert_eq!(
        first_line(&NameFactory::new(request).render()),
        "Odd.Strange(int x)"
    );
}

#[test]
fn test_walk_stops_at_unsupported_container() {
    let (mut tree, root) = unit("/src/Partial.cs");
    let ns = namespace(&mut tree, root, "Outer");
    let other = tree.add_node(
        Some(ns),
        SyntaxKind::Other("ERROR".to_string()),
        Span::default(),
    );
    let t = type_decl(&mut tree, other, "Inner", None);
    let m = method(&mut tree, t, "Run");
    let identifier = token("Run");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "Inner.");
}

#[test]
fn test_type_inside_namespace_inside_type_is_not_revisited() {
    // Types are only collected before the first namespace
    let (mut tree, root) = unit("/src/Weird.cs");
    let t_outer = type_decl(&mut tree, root, "Outer", None);
    let ns = namespace(&mut tree, t_outer, "N");
    let t_inner = type_decl(&mut tree, ns, "Inner", None);
    let m = method(&mut tree, t_inner, "Run");
    let identifier = token("Run");

    let factory = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier));
    assert_eq!(factory.scope_prefix(), "N.Inner.");
}

#[test]
fn test_location_suffix_is_one_based() {
    let (mut tree, root) = unit("/src/Line.cs");
    let m = method(&mut tree, root, "M");
    let identifier = token_on_line("M", 9);

    let name = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier)).build();
    assert_eq!(name.line, 10);
    assert!(name.to_string().ends_with("[:10]"));
}

#[test]
fn test_button_text_setter_end_to_end() {
    let (mut tree, root) = unit(r"C:\src\Button.cs");
    let ns = namespace(&mut tree, root, "MyApp.Widgets");
    let t = type_decl(&mut tree, ns, "Button", None);
    let (owner, setter) = owner_with_accessor(
        &mut tree,
        t,
        SyntaxKind::PropertyDeclaration {
            identifier: token_on_line("Text", 41),
        },
        "set",
    );
    let identifier = token_on_line("Text", 41);

    let request = BreakpointRequest::new(&tree, owner, &identifier).with_accessor(setter);
    assert_eq!(
        NameFactory::new(request).render(),
        "MyApp.Widgets.Button.set_Text\nat C:\\src\\Button.cs[:42]"
    );
}

#[test]
fn test_render_is_idempotent_and_matches_display() {
    let (mut tree, root) = unit("/src/Same.cs");
    let t = type_decl(&mut tree, root, "Same", None);
    let m = method(&mut tree, t, "Twice");
    let identifier = token_on_line("Twice", 3);
    let parameters = ParameterList::from_pairs([("object", "o")]);

    let factory = NameFactory::new(
        BreakpointRequest::new(&tree, m, &identifier).with_parameters(Some(&parameters)),
    );
    let first = factory.render();
    let second = factory.render();
    assert_eq!(first, second);
    assert_eq!(first, factory.to_string());
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_breakpoint_name_serializes() {
    let (mut tree, root) = unit("/src/Json.cs");
    let m = method(&mut tree, root, "Emit");
    let identifier = token_on_line("Emit", 0);

    let name = NameFactory::new(BreakpointRequest::new(&tree, m, &identifier)).build();
    let json = serde_json::to_value(&name).unwrap();
    assert_eq!(json["name"], "Emit");
    assert_eq!(json["file"], "/src/Json.cs");
    assert_eq!(json["line"], 1);
}
