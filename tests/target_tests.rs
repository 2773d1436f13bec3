use orientqb::Target;
use orientqb::functions::count;
use orientqb::Projection;

#[test]
fn test_default_is_all_vertices() {
    assert_eq!(Target::default().render(), "V");
}

#[test]
fn test_cluster() {
    assert_eq!(Target::cluster(3).render(), "cluster:3");
}

#[test]
fn test_classes() {
    assert_eq!(Target::classes(["Person"]).render(), "Person");
    assert_eq!(Target::classes(vec!["A".to_string(), "B".to_string()]).render(), "A, B");
}

#[test]
fn test_index_values() {
    assert_eq!(Target::index_values("idx").render(), "indexvalues:idx");
    assert_eq!(Target::index_values_asc("idx").render(), "indexvaluesasc:idx");
    assert_eq!(Target::index_values_desc("idx").render(), "indexvaluesdesc:idx");
}

#[test]
fn test_nested_wraps_once() {
    let statement = format!("select {} from V", count(Projection::wildcard()));
    let target = Target::nested(&statement);
    assert_eq!(target.render(), format!("({})", statement));
    assert_eq!(target.render(), "(select count(*) from V)");
}

#[test]
fn test_verbatim() {
    let target = Target::from("#10:3");
    assert_eq!(target.to_string(), "#10:3");
    assert_eq!(Target::new("OUser").as_str(), "OUser");
}

#[test]
fn test_negative_cluster() {
    assert_eq!(Target::cluster(-1).to_string(), "cluster:-1");
}

#[test]
fn test_nested_keeps_inner_parentheses() {
    let target = Target::nested(&"select from (select from V)");
    assert_eq!(target.as_str(), "(select from (select from V))");
}
