//! Integration tests for joining selectors with combinators.
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use selkie_selector::{Combinator, Render, Selector, combine, element, id};

#[test]
fn test_next_sibling() {
    let joined = combine(&element("h1").unwrap(), "+", &element("p").unwrap());
    assert_eq!(joined.render(), "h1 + p");
    assert_eq!(joined.combinator(), &Combinator::NextSibling);
    assert_eq!(joined.left(), "h1");
    assert_eq!(joined.right(), "p");
}

#[test]
fn test_child() {
    let joined = combine(&element("ul").unwrap(), ">", &element("li").unwrap());
    assert_eq!(joined.render(), "ul > li");
}

#[test]
fn test_descendant_renders_three_spaces() {
    let joined = combine(&element("nav").unwrap(), " ", &element("a").unwrap());
    assert_eq!(joined.render(), "nav   a");
    assert_eq!(joined.combinator(), &Combinator::Descendant);
}

#[test]
fn test_nested_combinations_associate_as_built() {
    let a = element("div")
        .unwrap()
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();
    let b = element("table").unwrap().id("data").unwrap();
    let c = element("tr").unwrap().pseudo_class("nth-of-type(even)").unwrap();
    let d = element("td").unwrap().pseudo_class("nth-of-type(even)").unwrap();

    let joined = combine(&combine(&combine(&a, "+", &b), "~", &c), " ", &d);
    assert_eq!(
        joined.render(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_right_nested_combination() {
    let inner = combine(&element("li").unwrap(), "+", &element("li").unwrap());
    let joined = combine(&id("menu").unwrap(), ">", &inner);
    assert_eq!(joined.render(), "#menu > li + li");
}

#[test]
fn test_unknown_token_is_accepted_verbatim() {
    let joined = combine(&element("col").unwrap(), "||", &element("td").unwrap());
    assert_eq!(joined.render(), "col || td");
    assert_eq!(joined.combinator(), &Combinator::Other("||".to_string()));
}

#[test]
fn test_combined_render_is_idempotent() {
    let joined = combine(&element("a").unwrap(), "~", &element("b").unwrap());
    assert_eq!(joined.render(), joined.render());
    assert_eq!(joined.to_string(), joined.render());
}

#[test]
fn test_selector_enum_folds_left() {
    let start = Selector::from(element("h2").unwrap());
    let folded = start
        .combine("+", &element("p").unwrap())
        .combine(">", &element("em").unwrap());
    assert_eq!(folded.render(), "h2 + p > em");
    assert_eq!(start.render(), "h2");
}

#[test]
fn test_combined_selector_serializes_token() {
    let joined = combine(&element("ul").unwrap(), ">", &element("li").unwrap());
    let json = serde_json::to_value(Selector::from(joined)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "combined": { "left": "ul", "combinator": ">", "right": "li" }
        })
    );
}
