//! Integration tests for selector fragment construction and combination.

use quokka_selector::{
    Category, Combinator, SelectorError, SelectorFragment, Stringify, attr, class, combine,
    element, id, pseudo_class, pseudo_element,
};

// Category Ordering Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_full_category_order_renders_in_call_order() {
    let fragment = element("a")
        .and_then(|f| f.id("link"))
        .and_then(|f| f.class("external"))
        .and_then(|f| f.attr("href$=\".png\""))
        .and_then(|f| f.pseudo_class("focus"))
        .and_then(|f| f.pseudo_element("first-line"))
        .unwrap();
    assert_eq!(
        fragment.stringify(),
        "a#link.external[href$=\".png\"]:focus::first-line"
    );
    assert_eq!(fragment.last_category(), Some(Category::PseudoElement));
}

#[test]
fn test_each_category_starts_a_fresh_fragment() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("container").stringify(), ".container");
    assert_eq!(attr("href").stringify(), "[href]");
    assert_eq!(pseudo_class("hover").stringify(), ":hover");
    assert_eq!(pseudo_element("after").stringify(), "::after");
}

#[test]
fn test_repeatable_categories_may_repeat() {
    let fragment = id("main")
        .class("container")
        .and_then(|f| f.class("editable"))
        .unwrap();
    assert_eq!(fragment.stringify(), "#main.container.editable");

    let fragment = element("input")
        .attr("type=text")
        .and_then(|f| f.attr("required"))
        .and_then(|f| f.pseudo_class("enabled"))
        .and_then(|f| f.pseudo_class("focus"))
        .unwrap();
    assert_eq!(
        fragment.stringify(),
        "input[type=text][required]:enabled:focus"
    );
}

#[test]
fn test_skipping_categories_is_allowed() {
    let fragment = element("div").pseudo_element("before").unwrap();
    assert_eq!(fragment.stringify(), "div::before");

    let fragment = class("nav").pseudo_class("hover").unwrap();
    assert_eq!(fragment.stringify(), ".nav:hover");
}

#[test]
fn test_lower_category_after_higher_is_out_of_order() {
    let err = class("draggable").element("div").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            appended: Category::Type,
            last: Category::Class,
        }
    );

    let err = class("y").id("x").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            appended: Category::Id,
            last: Category::Class,
        }
    );

    let err = attr("href").class("external").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            appended: Category::Class,
            last: Category::Attribute,
        }
    );

    let err = pseudo_class("hover").attr("href").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            appended: Category::Attribute,
            last: Category::PseudoClass,
        }
    );

    let err = pseudo_element("after").pseudo_class("hover").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            appended: Category::PseudoClass,
            last: Category::PseudoElement,
        }
    );
}

#[test]
fn test_every_strictly_descending_pair_is_out_of_order() {
    let all = [
        Category::Type,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];
    let start = |c: Category| match c {
        Category::Type => element("div"),
        Category::Id => id("x"),
        Category::Class => class("x"),
        Category::Attribute => attr("x"),
        Category::PseudoClass => pseudo_class("x"),
        Category::PseudoElement => pseudo_element("x"),
    };
    let append = |f: SelectorFragment, c: Category| match c {
        Category::Type => f.element("div"),
        Category::Id => f.id("x"),
        Category::Class => f.class("x"),
        Category::Attribute => f.attr("x"),
        Category::PseudoClass => f.pseudo_class("x"),
        Category::PseudoElement => f.pseudo_element("x"),
    };
    for (i, &first) in all.iter().enumerate() {
        for &second in &all[..i] {
            let err = append(start(first), second).unwrap_err();
            assert_eq!(
                err,
                SelectorError::OutOfOrder {
                    appended: second,
                    last: first,
                },
                "{first:?} then {second:?}"
            );
        }
    }
}

// Occurrence Tests

#[test]
fn test_duplicate_element_is_rejected() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Category::Type));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let err = id("a").id("b").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Category::Id));
}

#[test]
fn test_duplicate_pseudo_element_is_rejected() {
    let err = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Category::PseudoElement));
}

#[test]
fn test_duplicate_takes_precedence_over_ordering() {
    // id after id ties on rank; it must report Duplicate, not OutOfOrder.
    let err = element("div")
        .id("a")
        .and_then(|f| f.id("b"))
        .unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Category::Id));
}

#[test]
fn test_failed_append_consumes_without_side_effects() {
    let fragment = id("main").class("container").unwrap();
    let err = fragment.clone().id("other").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Category::Id));
    // The surviving clone is untouched by the failed append.
    assert_eq!(fragment.stringify(), "#main.container");
}

// Combinator Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_next_sibling() {
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let combined = combine(&left, Combinator::NextSibling, &right);
    assert_eq!(combined.stringify(), "div#main + table#data");
    assert_eq!(
        combined.stringify(),
        format!("{} + {}", left.stringify(), right.stringify())
    );
}

#[test]
fn test_combine_child_and_subsequent_sibling() {
    let combined = combine(&element("ul"), Combinator::Child, &element("li"));
    assert_eq!(combined.stringify(), "ul > li");

    let combined = combine(&element("h1"), Combinator::SubsequentSibling, &element("p"));
    assert_eq!(combined.stringify(), "h1 ~ p");
}

#[test]
fn test_descendant_combinator_renders_three_spaces() {
    let combined = combine(&element("tr"), Combinator::Descendant, &element("td"));
    assert_eq!(combined.stringify(), "tr   td");
}

#[test]
fn test_nested_combine() {
    let inner = combine(
        &element("tr").pseudo_class("nth-of-type(even)").unwrap(),
        Combinator::Descendant,
        &element("td").pseudo_class("nth-of-type(even)").unwrap(),
    );
    let middle = combine(
        &element("table").id("data").unwrap(),
        Combinator::SubsequentSibling,
        &inner,
    );
    let outer = combine(
        &element("div")
            .id("main")
            .and_then(|f| f.class("container"))
            .and_then(|f| f.class("draggable"))
            .unwrap(),
        Combinator::NextSibling,
        &middle,
    );
    assert_eq!(
        outer.stringify(),
        "div#main.container.draggable + table#data ~ \
         tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combinator_from_char() {
    assert_eq!(Combinator::try_from(' '), Ok(Combinator::Descendant));
    assert_eq!(Combinator::try_from('>'), Ok(Combinator::Child));
    assert_eq!(Combinator::try_from('+'), Ok(Combinator::NextSibling));
    assert_eq!(Combinator::try_from('~'), Ok(Combinator::SubsequentSibling));
    assert_eq!(
        Combinator::try_from('|'),
        Err(SelectorError::UnknownCombinator('|'))
    );
}

// Independence Tests

#[test]
fn test_interleaved_builds_do_not_share_state() {
    let first = element("div");
    let second = element("table");
    let first = first.id("main").unwrap();
    let second = second.id("data").unwrap();
    let first = first.class("container").unwrap();
    assert_eq!(first.stringify(), "div#main.container");
    assert_eq!(second.stringify(), "table#data");
}

#[test]
fn test_stringify_is_repeatable() {
    let fragment = element("p").class("note").unwrap();
    assert_eq!(fragment.stringify(), "p.note");
    assert_eq!(fragment.stringify(), "p.note");

    let combined = combine(&element("a"), Combinator::Child, &element("b"));
    assert_eq!(combined.stringify(), "a > b");
    assert_eq!(combined.stringify(), "a > b");
}

#[test]
fn test_cloned_fragment_forks_independently() {
    let base = element("div").class("card").unwrap();
    let hovered = base.clone().pseudo_class("hover").unwrap();
    let focused = base.clone().pseudo_class("focus").unwrap();
    assert_eq!(base.stringify(), "div.card");
    assert_eq!(hovered.stringify(), "div.card:hover");
    assert_eq!(focused.stringify(), "div.card:focus");
}

// Error Message Tests

#[test]
fn test_error_messages_name_the_grammar_order() {
    let err = class("y").id("x").unwrap_err();
    let message = err.to_string();
    assert!(message.contains(
        "selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element"
    ));
    assert!(message.contains("cannot append id after class"));

    let err = id("a").id("b").unwrap_err();
    let message = err.to_string();
    assert!(message.contains(
        "element, id and pseudo-element should not occur more than \
         one time inside the selector"
    ));
}
