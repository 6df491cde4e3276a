use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    thread,
};

use pretty_assertions::assert_eq;
use scorexpr::{Registry, parse};

fn sigmoid(a: f64, x: f64, b: f64) -> f64 {
    1.0 / (1.0 + (-a * x - b).exp())
}

fn values(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(name, value)| ((*name).to_string(), *value)).collect()
}

#[test]
fn variables_are_registered_while_parsing() {
    let registry = Registry::new();
    parse("(sigmoid (+ (* a x) b))", &registry).unwrap().unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.names(), vec!["a", "b", "x"]);
    assert_eq!(registry.find_variable("x").unwrap().value(), 0.0);
}

#[test]
fn re_evaluation_reflects_new_values_without_reparsing() {
    let registry = Registry::new();
    let expr = parse("(sigmoid (+ (* a x) b))", &registry).unwrap().unwrap();

    let x = registry.find_variable("x").unwrap();
    let a = registry.find_variable("a").unwrap();
    let b = registry.find_variable("b").unwrap();

    x.set_value(1.0);
    a.set_value(2.0);
    b.set_value(3.0);
    assert_eq!(expr.evaluate(), sigmoid(2.0, 1.0, 3.0));

    x.set_value(4.0);
    a.set_value(5.0);
    b.set_value(6.0);
    assert_eq!(x.value(), 4.0);
    assert_eq!(expr.evaluate(), sigmoid(5.0, 4.0, 6.0));

    registry.refresh(&values(&[("x", 0.2), ("a", 0.6), ("b", 0.8)]));
    assert_eq!(x.value(), 0.2);
    assert_eq!(a.value(), 0.6);
    assert_eq!(b.value(), 0.8);
    assert_eq!(expr.evaluate(), sigmoid(0.6, 0.2, 0.8));
}

#[test]
fn refresh_resets_variables_missing_from_the_map() {
    let registry = Registry::new();
    let expr = parse("(+ a b)", &registry).unwrap().unwrap();

    registry.refresh(&values(&[("a", 1.0), ("b", 2.0)]));
    assert_eq!(expr.evaluate(), 3.0);

    registry.refresh(&values(&[("a", 5.0)]));
    assert_eq!(registry.find_variable("b").unwrap().value(), 0.0);
    assert_eq!(expr.evaluate(), 5.0);
}

#[test]
fn refresh_ignores_unknown_names() {
    let registry = Registry::new();
    parse("(* 2 a)", &registry).unwrap().unwrap();

    registry.refresh(&values(&[("a", 1.0), ("zzz", 9.0)]));
    assert!(!registry.contains("zzz"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn repeated_names_share_one_cell() {
    let registry = Registry::new();
    let expr = parse("(+ (* x x) x)", &registry).unwrap().unwrap();
    assert_eq!(registry.len(), 1);

    registry.lookup_or_create("x").set_value(3.0);
    assert_eq!(expr.evaluate(), 12.0);
}

#[test]
fn trees_parsed_against_one_registry_share_cells() {
    let registry = Registry::new();
    let doubled = parse("(* 2 x)", &registry).unwrap().unwrap();
    let squared = parse("(** x 2)", &registry).unwrap().unwrap();

    assert!(registry.set("x", 3.0));
    assert_eq!(doubled.evaluate(), 6.0);
    assert_eq!(squared.evaluate(), 9.0);
}

#[test]
fn registries_are_isolated() {
    let first = Registry::new();
    let second = Registry::new();
    let in_first = parse("(+ x 1)", &first).unwrap().unwrap();
    let in_second = parse("(+ x 1)", &second).unwrap().unwrap();

    first.set("x", 10.0);
    assert_eq!(in_first.evaluate(), 11.0);
    assert_eq!(in_second.evaluate(), 1.0);
}

#[test]
fn set_does_not_create_variables() {
    let registry = Registry::new();
    assert!(!registry.set("missing", 1.0));
    assert!(registry.is_empty());
}

#[test]
fn failed_parse_keeps_variables_registered_before_the_error() {
    let registry = Registry::new();
    assert!(parse("(+ a (atan b))", &registry).is_err());
    assert!(registry.contains("a"));
    assert!(!registry.contains("b"));
}

#[test]
fn concurrent_lookups_return_the_same_cell() {
    let registry = Registry::new();

    let cells = thread::scope(|scope| {
        let handles = (0..8).map(|_| scope.spawn(|| registry.lookup_or_create("shared")))
                            .collect::<Vec<_>>();
        handles.into_iter()
               .map(|handle| handle.join().unwrap())
               .collect::<Vec<_>>()
    });

    assert_eq!(registry.len(), 1);
    assert!(cells.iter().all(|cell| Arc::ptr_eq(cell, &cells[0])));
}

#[test]
fn concurrent_parses_register_each_name_once() {
    let registry = Registry::new();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                     for _ in 0..50 {
                         parse("(+ (* a x) (- b y))", &registry).unwrap().unwrap();
                     }
                 });
        }
    });

    assert_eq!(registry.names(), vec!["a", "b", "x", "y"]);
}

#[test]
fn refresh_runs_safely_alongside_parsing() {
    let registry = Registry::new();
    parse("(+ a b)", &registry).unwrap().unwrap();
    let mapped = values(&[("a", 1.5), ("b", -2.0), ("n0_3", 7.0)]);

    thread::scope(|scope| {
        scope.spawn(|| {
                 for _ in 0..200 {
                     registry.refresh(&mapped);
                 }
             });
        for worker in 0..4 {
            let registry = &registry;
            scope.spawn(move || {
                     for index in 0..50 {
                         let formula = format!("(* a (+ n{worker}_{index} b))");
                         parse(&formula, registry).unwrap().unwrap();
                     }
                 });
        }
    });

    let names = registry.names();
    let unique = names.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), names.len());
    assert_eq!(names.len(), 2 + 4 * 50);

    for name in &names {
        let value = registry.find_variable(name).unwrap().value();
        let allowed = mapped.get(name).copied().unwrap_or(0.0);
        assert!(value == allowed || value == 0.0, "{name} = {value}");
    }

    registry.refresh(&mapped);
    for name in &names {
        let value = registry.find_variable(name).unwrap().value();
        assert_eq!(value, mapped.get(name).copied().unwrap_or(0.0), "{name}");
    }
}

#[test]
fn variables_of_a_tree_are_listed_once() {
    let registry = Registry::new();
    let expr = parse("(if (> x 0) (* x w) (- w))", &registry).unwrap().unwrap();
    assert_eq!(expr.variables(), vec!["w", "x"]);
}
