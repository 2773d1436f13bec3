use orientqb::output::{escape_string, escape_template, join, join_quoted, render, render_for_template};
use orientqb::{Direction, Projection, Value};
use rust_decimal::Decimal;

fn strip_and_unescape(rendered: &str) -> String {
    let inner = rendered
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .expect("quoted literal");
    let mut original = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => original.extend(chars.next()),
            c => original.push(c),
        }
    }
    original
}

#[test]
fn test_obrien() {
    assert_eq!(render(&Value::from("O'Brien")), r"'O\'Brien'");
}

#[test]
fn test_string_escaping_round_trips() {
    for original in [
        "O'Brien",
        "''",
        "it's a 'test'",
        r"back\'slash",
        r"C:\dir\",
        r"x\' OR '1'='1",
        "plain",
        "",
    ] {
        let rendered = render(&Value::from(original));
        assert_eq!(strip_and_unescape(&rendered), original);
    }
}

#[test]
fn test_scalars() {
    assert_eq!(render(&Value::Null), "null");
    assert_eq!(render(&Value::from(false)), "false");
    assert_eq!(render(&Value::from(-42)), "-42");
    assert_eq!(render(&Value::from(5.0)), "5.0");
    assert_eq!(render(&Value::from(5.1)), "5.1");
    assert_eq!(render(&Value::from(Decimal::new(51, 1))), "5.1");
}

#[test]
fn test_labels_quoted_as_declared() {
    assert_eq!(render(&Value::from(Direction::In)), "'IN'");
    assert_eq!(render(&Value::label("Person")), "'Person'");
}

#[test]
fn test_template_rendering_doubles_percent() {
    assert_eq!(render_for_template(&Value::from("5%")), "'5%%'");
    assert_eq!(render(&Value::from("5%")), "'5%'");
    assert_eq!(render_for_template(&Value::from(5)), "5");
}

#[test]
fn test_escape_helpers() {
    assert_eq!(escape_string("a'b"), r"a\'b");
    assert_eq!(escape_string(r"a\b"), r"a\\b");
    assert_eq!(escape_template("%'"), r"%%\'");
}

#[test]
fn test_list_of_labels() {
    assert_eq!(join_quoted(["friend", "colleague"]), "'friend', 'colleague'");
    assert_eq!(
        render(&Value::list(["a", "b"])),
        render(&Value::from(vec!["a", "b"]))
    );
}

#[test]
fn test_join_projections() {
    let items = [Projection::atomic("a"), Projection::atomic("b").plus(1)];
    assert_eq!(join(&items), "a, b + 1");
}

#[test]
fn test_backslashes_escaped_before_quotes() {
    assert_eq!(render(&Value::from(r"C:\dir\")), r"'C:\\dir\\'");
    assert_eq!(
        render(&Value::from(r"x\' OR '1'='1")),
        r"'x\\\' OR \'1\'=\'1'"
    );
    assert_eq!(
        Projection::atomic("name").plus(r"a\").render(),
        r"name + 'a\\'"
    );
}

#[test]
fn test_template_escape_order() {
    assert_eq!(escape_template("50% o'clock"), r"50%% o\'clock");
    assert_eq!(render_for_template(&Value::from(r"5%\")), r"'5%%\\'");
}

#[test]
fn test_whole_float_keeps_fraction() {
    assert_eq!(render(&Value::from(-2.0)), "-2.0");
    assert_eq!(render(&Value::from(0.25)), "0.25");
    assert_eq!(render(&Value::from(0.0)), "0.0");
}

#[test]
fn test_extreme_floats_use_exponent() {
    assert_eq!(render(&Value::from(1e300)), "1e300");
    assert_eq!(render(&Value::from(-2.5e20)), "-2.5e20");
    assert_eq!(render(&Value::from(1e-10)), "1e-10");
    assert_eq!(render(&Value::from(1e15)), "1000000000000000.0");
}

#[test]
fn test_non_finite_floats() {
    assert_eq!(render(&Value::from(f64::NAN)), "NaN");
    assert_eq!(render(&Value::from(f64::INFINITY)), "Infinity");
    assert_eq!(render(&Value::from(f64::NEG_INFINITY)), "-Infinity");
}

#[test]
fn test_nested_list_flattens() {
    let value = Value::List(vec![
        Value::from(1),
        Value::List(vec![Value::from("a"), Value::from("b")]),
    ]);
    assert_eq!(render(&value), "1, 'a', 'b'");
}

#[test]
fn test_empty_list() {
    assert_eq!(render(&Value::List(vec![])), "");
    assert_eq!(join_quoted(Vec::<&str>::new()), "");
}
