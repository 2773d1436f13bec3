#![cfg(feature = "cli")]

use orientqb::cli::{
    CliError, IndexOrder, LiteralOptions, TargetOptions, execute_literal, execute_target,
};

fn literal(input: &str) -> Result<String, CliError> {
    execute_literal(&LiteralOptions {
        input: Some(input.to_string()),
        template: false,
    })
}

#[test]
fn test_literal_string() {
    assert_eq!(literal(r#""O'Brien""#).unwrap(), r"'O\'Brien'");
}

#[test]
fn test_literal_numbers() {
    assert_eq!(literal("42").unwrap(), "42");
    assert_eq!(literal("5.0").unwrap(), "5.0");
    assert_eq!(literal("5.25").unwrap(), "5.25");
}

#[test]
fn test_literal_array_is_argument_list() {
    assert_eq!(literal(r#"["friend", 1, true, null]"#).unwrap(), "'friend', 1, true, null");
}

#[test]
fn test_literal_template_mode() {
    let options = LiteralOptions {
        input: Some(r#""100%""#.to_string()),
        template: true,
    };
    assert_eq!(execute_literal(&options).unwrap(), "'100%%'");
}

#[test]
fn test_literal_errors() {
    assert!(matches!(literal("{\"a\": 1}"), Err(CliError::Value(_))));
    assert!(matches!(literal("not json"), Err(CliError::Json(_))));
    assert!(matches!(
        execute_literal(&LiteralOptions::default()),
        Err(CliError::NoInput)
    ));
}

#[test]
fn test_target_default() {
    let target = execute_target(&TargetOptions::default()).unwrap();
    assert_eq!(target.render(), "V");
}

#[test]
fn test_target_selectors() {
    let classes = TargetOptions {
        classes: vec!["Person".into(), "Company".into()],
        ..Default::default()
    };
    assert_eq!(execute_target(&classes).unwrap().render(), "Person, Company");

    let cluster = TargetOptions {
        cluster: Some(9),
        ..Default::default()
    };
    assert_eq!(execute_target(&cluster).unwrap().render(), "cluster:9");

    let index = TargetOptions {
        index: Some("Person.name".into()),
        order: Some(IndexOrder::Desc),
        ..Default::default()
    };
    assert_eq!(
        execute_target(&index).unwrap().render(),
        "indexvaluesdesc:Person.name"
    );

    let nested = TargetOptions {
        nested: Some("select from V".into()),
        ..Default::default()
    };
    assert_eq!(execute_target(&nested).unwrap().render(), "(select from V)");
}

#[test]
fn test_target_conflicts() {
    let both = TargetOptions {
        classes: vec!["V".into()],
        cluster: Some(1),
        ..Default::default()
    };
    assert!(matches!(execute_target(&both), Err(CliError::ConflictingTarget)));

    let order_only = TargetOptions {
        order: Some(IndexOrder::Asc),
        ..Default::default()
    };
    assert!(matches!(
        execute_target(&order_only),
        Err(CliError::OrderWithoutIndex)
    ));
}
