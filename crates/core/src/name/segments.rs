//! Formatters for the bracketed parts of a breakpoint name

use crate::syntax::{ParameterList, TypeParameterList};

/// Render `<T, U>` from a type parameter list.
///
/// An empty list still renders its brackets (`<>`).
pub fn type_parameter_segment(list: &TypeParameterList) -> String {
    let names: Vec<&str> = list.parameters.iter().map(|p| p.text()).collect();
    format!("{}{}{}", list.open.text(), names.join(", "), list.close.text())
}

/// Render `(int x, List<T> items)` from a formal parameter list.
///
/// Types are the declared source text, not resolved names. A parameter
/// without a declared type renders as its bare identifier.
pub fn parameter_list_segment(list: &ParameterList) -> String {
    let params: Vec<String> = list
        .parameters
        .iter()
        .map(|param| match &param.declared_type {
            Some(ty) => format!("{} {}", ty, param.identifier.text()),
            None => param.identifier.text().to_string(),
        })
        .collect();
    format!("{}{}{}", list.open.text(), params.join(", "), list.close.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Parameter, Span, Token};

    #[test]
    fn test_type_parameters_are_comma_space_separated() {
        let list = TypeParameterList::from_names(["T", "U"]);
        assert_eq!(type_parameter_segment(&list), "<T, U>");
    }

    #[test]
    fn test_single_type_parameter() {
        let list = TypeParameterList::from_names(["TKey"]);
        assert_eq!(type_parameter_segment(&list), "<TKey>");
    }

    #[test]
    fn test_empty_type_parameter_list_keeps_brackets() {
        let list = TypeParameterList::from_names(Vec::<String>::new());
        assert_eq!(type_parameter_segment(&list), "<>");
    }

    #[test]
    fn test_parameters_use_declared_type_text() {
        let list = ParameterList::from_pairs([
            ("int", "x"),
            ("System.String", "y"),
            ("List<T>", "items"),
        ]);
        assert_eq!(
            parameter_list_segment(&list),
            "(int x, System.String y, List<T> items)"
        );
    }

    #[test]
    fn test_empty_parameter_list() {
        let list = ParameterList::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(parameter_list_segment(&list), "()");
    }

    #[test]
    fn test_untyped_parameter_renders_name_only() {
        let list = ParameterList::new(
            Token::new("(", Span::default()),
            vec![Parameter {
                declared_type: None,
                identifier: Token::new("value", Span::default()),
            }],
            Token::new(")", Span::default()),
        );
        assert_eq!(parameter_list_segment(&list), "(value)");
    }
}
