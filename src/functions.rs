//! Builders for OrientDB SQL functions.
//!
//! Every builder returns a function composite: its name is its own rendering,
//! since a function call yields a new value with no inherited identity.
//! Variadic arguments are joined into a single hole.
//!
//! ```
//! use orientqb::Projection;
//! use orientqb::functions::{out, shortest_path_with_direction, sum};
//! use orientqb::Direction;
//!
//! assert_eq!(out(["friend", "colleague"]).render(), "out('friend', 'colleague')");
//! assert_eq!(
//!     sum([Projection::atomic("a"), Projection::atomic("b")]).render(),
//!     "sum(a, b)"
//! );
//! assert_eq!(
//!     shortest_path_with_direction(
//!         Projection::atomic("$current"),
//!         Projection::atomic("#8:32"),
//!         Direction::Out,
//!     )
//!     .render(),
//!     "shortestPath($current, #8:32, 'OUT')"
//! );
//! ```

use std::fmt::Display;

use crate::output::{self, LIST_SEPARATOR};
use crate::projection::Projection;
use crate::value::{DateFormat, Direction, TimeZone, Value};

fn call<I>(function: &str, arguments: I) -> Projection
where
    I: IntoIterator<Item = Projection>,
{
    Projection::composite(&format!("{}(%s)", function), [joined(arguments)])
}

fn joined<I>(projections: I) -> Projection
where
    I: IntoIterator<Item = Projection>,
{
    Projection::atomic(output::join(projections))
}

fn labels<I, S>(function: &str, labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Projection::composite(
        &format!("{}(%s)", function),
        [Projection::atomic(output::join_quoted(labels))],
    )
}

// Aggregates and collections

pub fn avg<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("avg", projections)
}

pub fn sum<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("sum", projections)
}

pub fn max<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("max", projections)
}

pub fn min<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("min", projections)
}

/// First non-null argument.
pub fn coalesce<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("coalesce", projections)
}

pub fn difference<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("difference", projections)
}

pub fn intersect<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("intersect", projections)
}

pub fn union_all<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    call("unionAll", projections)
}

pub fn count(projection: Projection) -> Projection {
    Projection::composite("count(%s)", [projection])
}

pub fn distinct(projection: Projection) -> Projection {
    Projection::composite("distinct(%s)", [projection])
}

pub fn expand(projection: Projection) -> Projection {
    Projection::composite("expand(%s)", [projection])
}

pub fn first(projection: Projection) -> Projection {
    Projection::composite("first(%s)", [projection])
}

pub fn list(projection: Projection) -> Projection {
    Projection::composite("list(%s)", [projection])
}

pub fn set(projection: Projection) -> Projection {
    Projection::composite("set(%s)", [projection])
}

pub fn map(key: Projection, value: Projection) -> Projection {
    Projection::composite("map(%s, %s)", [key, value])
}

/// Distance in kilometres between two points.
pub fn distance(
    lat_point1: Projection,
    lon_point1: Projection,
    lat_point2: Projection,
    lon_point2: Projection,
) -> Projection {
    Projection::composite(
        "distance(%s, %s, %s, %s)",
        [lat_point1, lon_point1, lat_point2, lon_point2],
    )
}

// Dates

pub fn date(projection: Projection) -> Projection {
    Projection::composite("date(%s)", [projection])
}

pub fn date_with_format(projection: Projection, format: &DateFormat) -> Projection {
    Projection::composite("date(%s, %s)", [projection, Projection::value(format)])
}

pub fn date_with_format_and_zone(
    projection: Projection,
    format: &DateFormat,
    zone: &TimeZone,
) -> Projection {
    Projection::composite(
        "date(%s, %s, %s)",
        [projection, Projection::value(format), Projection::value(zone)],
    )
}

pub fn sysdate() -> Projection {
    Projection::atomic("sysdate()")
}

pub fn sysdate_with_format(format: &DateFormat) -> Projection {
    Projection::composite("sysdate(%s)", [Projection::value(format)])
}

pub fn sysdate_with_format_and_zone(format: &DateFormat, zone: &TimeZone) -> Projection {
    let arguments = Value::List(vec![Value::from(format), Value::from(zone)]);
    Projection::composite("sysdate(%s)", [Projection::value(arguments)])
}

// Graph traversal

pub fn out<I, S>(edge_labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels("out", edge_labels)
}

pub fn in_<I, S>(edge_labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels("in", edge_labels)
}

pub fn both<I, S>(edge_labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels("both", edge_labels)
}

pub fn out_e<I, S>(edge_labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels("outE", edge_labels)
}

pub fn in_e<I, S>(edge_labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels("inE", edge_labels)
}

pub fn both_e<I, S>(edge_labels: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels("bothE", edge_labels)
}

/// Incoming vertex of the current edge.
pub fn in_v() -> Projection {
    Projection::atomic("inV()")
}

/// Outgoing vertex of the current edge.
pub fn out_v() -> Projection {
    Projection::atomic("outV()")
}

pub fn shortest_path(source: Projection, destination: Projection) -> Projection {
    call("shortestPath", [source, destination])
}

pub fn shortest_path_with_direction(
    source: Projection,
    destination: Projection,
    direction: Direction,
) -> Projection {
    call(
        "shortestPath",
        [source, destination, Projection::value(direction)],
    )
}

/// Cheapest path using `weight_field` on each edge as its cost.
pub fn dijkstra(source: Projection, destination: Projection, weight_field: &str) -> Projection {
    call(
        "dijkstra",
        [source, destination, Projection::value(weight_field)],
    )
}

pub fn dijkstra_with_direction(
    source: Projection,
    destination: Projection,
    weight_field: &str,
    direction: Direction,
) -> Projection {
    call(
        "dijkstra",
        [
            source,
            destination,
            Projection::value(weight_field),
            Projection::value(direction),
        ],
    )
}

pub fn traversed_element(index: i64) -> Projection {
    Projection::composite("traversedElement(%s)", [Projection::value(index)])
}

pub fn traversed_element_range(index: i64, items: i64) -> Projection {
    call("traversedElement", [Projection::value(index), Projection::value(items)])
}

pub fn traversed_edge(index: i64) -> Projection {
    Projection::composite("traversedEdge(%s)", [Projection::value(index)])
}

pub fn traversed_edge_range(index: i64, items: i64) -> Projection {
    call("traversedEdge", [Projection::value(index), Projection::value(items)])
}

pub fn traversed_vertex(index: i64) -> Projection {
    Projection::composite("traversedVertex(%s)", [Projection::value(index)])
}

pub fn traversed_vertex_range(index: i64, items: i64) -> Projection {
    call("traversedVertex", [Projection::value(index), Projection::value(items)])
}

// Miscellaneous

/// Positional column of the current record. Only meaningful in `WHERE`.
pub fn column(index: i64) -> Projection {
    Projection::composite("column(%s)", [Projection::value(index)])
}

pub fn eval(expression: &str) -> Projection {
    Projection::composite("eval(%s)", [Projection::value(expression)])
}

pub fn gremlin(script: &str) -> Projection {
    Projection::composite("gremlin(%s)", [Projection::value(script)])
}

/// `format('<text>', args...)`. Only projections can be arguments; constants
/// belong in the format text itself.
///
/// ```
/// use orientqb::Projection;
/// use orientqb::functions::format;
///
/// let p = format("%s has 100%", [Projection::atomic("name")]);
/// assert_eq!(p.render(), "format('%s has 100%', name)");
/// ```
pub fn format<I: IntoIterator<Item = Projection>>(format: &str, projections: I) -> Projection {
    let template = format!("format('{}', %s)", output::escape_template(format));
    Projection::composite(&template, [joined(projections)])
}

/// `ifnull(args..., <default>)`
pub fn ifnull<I>(default: impl Into<Value>, projections: I) -> Projection
where
    I: IntoIterator<Item = Projection>,
{
    let template = format!(
        "ifnull(%s{}{})",
        LIST_SEPARATOR,
        output::render_for_template(&default.into())
    );
    Projection::composite(&template, [joined(projections)])
}

/// A subquery used as a projection: `( <statement> )`.
pub fn nested(statement: &impl Display) -> Projection {
    Projection::composite("( %s )", [Projection::atomic(statement.to_string())])
}

/// Only valid in `WHERE`.
pub fn any() -> Projection {
    Projection::atomic("any()")
}

/// Only valid in `WHERE`.
pub fn all() -> Projection {
    Projection::atomic("all()")
}

/// Composite key for a full-text index lookup: `[a, b, ...]`.
pub fn join<I: IntoIterator<Item = Projection>>(projections: I) -> Projection {
    Projection::composite("[%s]", [joined(projections)])
}
