//! Integration tests for the markup parser.

use wombat_ast::{Document, ElementTag, QuoteStyle};
use wombat_markup::{MAX_NESTING_DEPTH, ParseError, Parser, Token, TokenKind, Tokenizer, parse};

/// Helper to parse markup that is expected to be well-formed
fn parse_ok(input: &str) -> Document {
    let (document, errors) = parse(input);
    assert!(errors.is_empty(), "unexpected errors for {input:?}: {errors:?}");
    document
}

/// Helper to get the only top-level element
fn single(document: &Document) -> &ElementTag {
    assert_eq!(document.elements.len(), 1, "expected exactly one element");
    &document.elements[0]
}

/// Helper to list an element's attributes as (key, value) pairs
fn attribute_pairs(element: &ElementTag) -> Vec<(&str, &str)> {
    element
        .attributes
        .iter()
        .map(|attr| (attr.key.value.as_str(), attr.value.value.as_str()))
        .collect()
}

#[test]
fn test_element_with_value() {
    let document = parse_ok("<t>v</t>");
    let element = single(&document);

    assert_eq!(element.name, Token::new(TokenKind::Tag, "t"));
    assert!(element.attributes.is_empty());
    assert!(element.children.is_empty());
    assert_eq!(element.text(), Some("v"));
    assert_eq!(
        element.value.as_ref().map(|value| &value.token),
        Some(&Token::new(TokenKind::Value, "v"))
    );
    assert_eq!(element.closing_token, Token::new(TokenKind::Tag, "t"));
    assert!(!element.is_self_closing());
}

#[test]
fn test_self_closing_with_attribute() {
    let document = parse_ok(r#"<t k="v"/>"#);
    let element = single(&document);

    assert_eq!(attribute_pairs(element), vec![("k", "v")]);
    assert_eq!(element.attributes[0].key.token.kind, TokenKind::Key);
    assert_eq!(element.attributes[0].value.token.kind, TokenKind::Value);
    assert_eq!(element.attributes[0].quote, QuoteStyle::Double);
    assert!(element.value.is_none());
    assert!(element.children.is_empty());
    assert!(element.is_self_closing());
    assert_eq!(element.closing_token, Token::new(TokenKind::CloseAngle, ">"));
}

#[test]
fn test_single_quoted_attribute() {
    let document = parse_ok("<t k='v'/>");
    let element = single(&document);
    assert_eq!(attribute_pairs(element), vec![("k", "v")]);
    assert_eq!(element.attributes[0].quote, QuoteStyle::Single);
}

#[test]
fn test_nested_element() {
    let document = parse_ok("<outer><inner>x</inner></outer>");
    let outer = single(&document);

    assert!(outer.value.is_none());
    assert_eq!(outer.children.len(), 1);
    assert_eq!(outer.children[0].tag_name(), "inner");
    assert_eq!(outer.children[0].text(), Some("x"));
    assert_eq!(outer.closing_token.literal, "outer");
}

#[test]
fn test_multiple_children_keep_order() {
    let document = parse_ok("<list><item>1</item><item>2</item><end/></list>");
    let list = single(&document);

    let names: Vec<&str> = list.children.iter().map(ElementTag::tag_name).collect();
    assert_eq!(names, vec!["item", "item", "end"]);
    assert_eq!(list.children[0].text(), Some("1"));
    assert_eq!(list.children[1].text(), Some("2"));
    assert!(list.children[2].is_self_closing());
}

#[test]
fn test_deep_nesting_across_lines() {
    let document = parse_ok("<a>\n  <b>\n    <c>z</c>\n  </b>\n</a>\n");
    let c = document.find("c").unwrap();
    assert_eq!(c.text(), Some("z"));
    assert_eq!(document.elements[0].children[0].children[0].tag_name(), "c");
}

#[test]
fn test_empty_element() {
    let document = parse_ok("<e></e>");
    let element = single(&document);
    assert!(element.is_empty());
    assert_eq!(element.closing_token, Token::new(TokenKind::Tag, "e"));
    assert!(!element.is_self_closing());
}

#[test]
fn test_attributes_with_children() {
    let document = parse_ok(r#"<person id="7" kind='staff'><name>Justin</name><dob>09-27-1989</dob></person>"#);
    let person = single(&document);
    assert_eq!(attribute_pairs(person), vec![("id", "7"), ("kind", "staff")]);
    assert_eq!(person.children.len(), 2);
    assert_eq!(person.children[1].text(), Some("09-27-1989"));
}

#[test]
fn test_attribute_order_preserved() {
    let document = parse_ok(r#"<t a="1" b="2"/>"#);
    assert_eq!(attribute_pairs(single(&document)), vec![("a", "1"), ("b", "2")]);
}

#[test]
fn test_duplicate_attribute_keys_kept() {
    let document = parse_ok(r#"<t k="1" k="2"/>"#);
    let element = single(&document);
    assert_eq!(attribute_pairs(element), vec![("k", "1"), ("k", "2")]);
    assert_eq!(element.attribute("k"), Some("1"));
}

#[test]
fn test_multiple_top_level_elements() {
    let document = parse_ok("<name>Justin</name>\n<dob>09-27-1989</dob>\n<phone>8675309</phone>");
    let names: Vec<&str> = document.elements.iter().map(ElementTag::tag_name).collect();
    assert_eq!(names, vec!["name", "dob", "phone"]);
    assert_eq!(document.token_literal(), "name");
}

#[test]
fn test_empty_input() {
    let document = parse_ok("");
    assert!(document.is_empty());
    assert_eq!(document.token_literal(), "");

    let document = parse_ok(" \n\t ");
    assert!(document.is_empty());
}

#[test]
fn test_quote_mismatch_isolated() {
    let (document, errors) = parse(r#"<t k="v'></t><u>ok</u>"#);

    assert_eq!(document.elements.len(), 2);
    assert!(document.elements[0].attributes.is_empty());
    assert_eq!(document.elements[1].text(), Some("ok"));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_quote_mismatch());
    assert!(errors[0].to_string().contains("mismatching quotes"));
}

#[test]
fn test_malformed_element_then_well_formed() {
    let (document, errors) = parse("<a>x</z><b>ok</b>");

    assert_eq!(single(&document).tag_name(), "b");
    assert_eq!(
        errors,
        vec![ParseError::MismatchedClosingTag {
            expected: "a".to_string(),
            found: "z".to_string(),
        }]
    );
}

#[test]
fn test_broken_closing_resyncs_on_next_element() {
    // The failed element stops on the `<` of the next one.
    let (document, errors) = parse("<a>x<b>ok</b>");
    assert_eq!(single(&document).tag_name(), "b");
    assert!(matches!(errors[0], ParseError::MissingClosingTag { ref tag, .. } if tag == "a"));
}

#[test]
fn test_value_and_children_never_both() {
    let (document, errors) = parse("<a>x<b/></a>");
    assert!(!errors.is_empty());
    for element in &document.elements {
        assert!(element.value.is_none() || element.children.is_empty());
    }
}

#[test]
fn test_missing_closing_tag() {
    let (document, errors) = parse("<a>x");
    assert!(document.is_empty());
    assert!(matches!(
        errors.as_slice(),
        [ParseError::MissingClosingOpenAngle { tag, found }] if tag == "a" && found.is_eof()
    ));
}

#[test]
fn test_missing_closing_angle_on_close_tag() {
    let (document, errors) = parse("<a>x</a");
    assert!(document.is_empty());
    assert!(matches!(errors[0], ParseError::MissingClosingTagAngle { .. }));
}

#[test]
fn test_self_closing_without_angle() {
    let (document, errors) = parse("<a/<b/>");
    assert_eq!(single(&document).tag_name(), "b");
    assert!(matches!(errors[0], ParseError::MissingSelfClosingAngle { ref tag, .. } if tag == "a"));
}

#[test]
fn test_missing_equal() {
    let (document, errors) = parse(r#"<a k"v"/>"#);
    assert!(document.is_empty());
    assert!(matches!(errors[0], ParseError::ExpectedEqual { ref key, .. } if key == "k"));
    assert!(errors[0].to_string().contains("expected '='"));
    assert!(matches!(errors[1], ParseError::MissingCloseAngle { .. }));
}

#[test]
fn test_unquoted_attribute_value() {
    let (document, errors) = parse("<a k=v/>");
    // The element itself still closes; only the attribute is dropped.
    let element = single(&document);
    assert!(element.attributes.is_empty());
    assert!(element.is_self_closing());
    assert!(matches!(errors[0], ParseError::UnquotedAttributeValue { ref key, .. } if key == "k"));
}

#[test]
fn test_missing_attribute_value() {
    let (_, errors) = parse(r#"<a k=""/>"#);
    assert!(matches!(errors[0], ParseError::ExpectedAttributeValue { .. }));
}

#[test]
fn test_missing_closing_quote() {
    let (document, errors) = parse(r#"<a k="v>x</a>"#);
    let element = single(&document);
    assert!(element.attributes.is_empty());
    assert_eq!(element.text(), Some("x"));
    assert!(matches!(errors[0], ParseError::MissingClosingQuote { ref key, .. } if key == "k"));
    assert!(!errors[0].is_quote_mismatch());
}

#[test]
fn test_illegal_content() {
    let (document, errors) = parse("<a>@</a>");
    assert!(document.is_empty());
    assert!(matches!(
        errors[0],
        ParseError::MissingClosingOpenAngle { ref found, .. } if found.kind == TokenKind::Illegal
    ));
}

#[test]
fn test_unexpected_content_after_open_angle() {
    let (_, errors) = parse("<a><=</a>");
    assert!(matches!(errors[0], ParseError::UnexpectedContent { ref tag, .. } if tag == "a"));
}

#[test]
fn test_errors_accumulate_in_order() {
    let (document, errors) = parse(r#"<a k="1'/><b>x</c><d>ok</d>"#);
    assert_eq!(document.elements.len(), 2);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].is_quote_mismatch());
    assert!(matches!(errors[1], ParseError::MismatchedClosingTag { .. }));
}

#[test]
fn test_parser_errors_accessor_and_diagnostics() {
    let mut parser = Parser::new(Tokenizer::xml("<a>x</b>")).with_diagnostics();
    let document = parser.parse_document();
    assert!(document.is_empty());
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_quote_mismatch_without_closing_tag() {
    let (document, errors) = parse(r#"<t k="v'>"#);
    assert!(document.is_empty());
    assert!(errors[0].is_quote_mismatch());
    assert!(matches!(errors[1], ParseError::MissingClosingOpenAngle { .. }));
}

/// Helper to build `<a>` nested `depth` times around `x`
fn nested(depth: usize) -> String {
    format!("{}x{}", "<a>".repeat(depth), "</a>".repeat(depth))
}

/// Helper to count how many elements deep the first chain goes
fn chain_depth(document: &Document) -> usize {
    let mut depth = 0;
    let mut current = document.elements.first();
    while let Some(element) = current {
        depth += 1;
        current = element.children.first();
    }
    depth
}

#[test]
fn test_nesting_at_limit_is_accepted() {
    let document = parse_ok(&nested(MAX_NESTING_DEPTH));
    assert_eq!(chain_depth(&document), MAX_NESTING_DEPTH);
}

#[test]
fn test_nesting_past_limit_is_reported_once() {
    let input = format!("{}<b>ok</b>", nested(5000));
    let (document, errors) = parse(&input);

    assert_eq!(
        errors,
        vec![ParseError::NestingTooDeep {
            tag: "a".to_string(),
            limit: MAX_NESTING_DEPTH,
        }]
    );
    assert_eq!(document.elements.len(), 2);
    assert_eq!(chain_depth(&document), MAX_NESTING_DEPTH);
    assert_eq!(document.elements[1].text(), Some("ok"));
}

#[test]
fn test_custom_nesting_limit() {
    let input = r#"<a><b><c k="1"/><c>deep</c></b><b>kept</b></a>"#;
    let (document, errors) = Parser::new(Tokenizer::xml(input))
        .with_max_depth(2)
        .run_with_errors();

    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|error| matches!(error, ParseError::NestingTooDeep { tag, limit: 2 } if tag == "c"))
    );
    let root = single(&document);
    assert_eq!(root.children.len(), 2);
    assert!(root.children[0].is_empty());
    assert_eq!(root.children[1].text(), Some("kept"));
}
