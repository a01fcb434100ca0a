use std::thread;
use tri_list::{Element, TriList, TriListError};

fn scenario() -> TriList<i32, String, f64> {
    TriList::from([
        Element::First(1),
        Element::Second("a".to_string()),
        Element::Third(2.5),
        Element::First(2),
    ])
}

fn ints(list: &TriList<i32, String, f64>) -> Vec<i32> {
    list.range_over::<i32, _>().collect()
}

#[test]
fn test_literal_scenario() {
    let mut list = scenario();
    assert_eq!(ints(&list), vec![1, 2]);

    list.modify_only(|x: i32| x + 1);
    assert_eq!(ints(&list), vec![2, 3]);

    list.modify_only(|x: i32| x * 10);
    assert_eq!(ints(&list), vec![20, 30]);

    // Text and real values are untouched by the int transforms
    let all: Vec<_> = list.iter().collect();
    assert_eq!(
        all,
        vec![
            Element::First(20),
            Element::Second("a".to_string()),
            Element::Third(2.5),
            Element::First(30),
        ]
    );

    list.reset::<i32, _>();
    assert_eq!(ints(&list), vec![1, 2]);
}

#[test]
fn test_order_preservation() {
    let mut list = TriList::<u32, String, bool>::new();
    list.push_back(true);
    list.push_back(1u32);
    list.push_back("one".to_string());
    list.push_back(2u32);
    list.push_back(false);
    list.push_back("two".to_string());

    let all: Vec<_> = list.iter().collect();
    assert_eq!(
        all,
        vec![
            Element::Third(true),
            Element::First(1),
            Element::Second("one".to_string()),
            Element::First(2),
            Element::Third(false),
            Element::Second("two".to_string()),
        ]
    );
}

#[test]
fn test_per_type_filtering() {
    let list = TriList::<u32, String, bool>::new()
        .with("x".to_string())
        .with(10u32)
        .with(true)
        .with(20u32)
        .with("y".to_string())
        .with(30u32);

    assert_eq!(list.range_over::<u32, _>().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(
        list.range_over::<String, _>().collect::<Vec<_>>(),
        vec!["x".to_string(), "y".to_string()]
    );
    assert_eq!(list.range_over::<bool, _>().collect::<Vec<_>>(), vec![true]);
}

#[test]
fn test_composition_order() {
    let mut list = TriList::<i32, (), ()>::new().with(3i32);
    list.modify_only(|x: i32| x * 2);
    list.modify_only(|x: i32| x - 1);

    // f2(f1(3)) = 5, f1(f2(3)) would be 4
    assert_eq!(list.range_over::<i32, _>().next(), Some(5));
}

#[test]
fn test_reset_restores_identity_and_is_idempotent() {
    let mut list = scenario();
    list.modify_only(|s: String| s.repeat(3));
    list.modify_only(|s: String| s.to_uppercase());
    assert_eq!(list.range_over::<String, _>().next(), Some("AAA".to_string()));

    list.reset::<String, _>();
    let once: Vec<_> = list.iter().collect();
    list.reset::<String, _>();
    let twice: Vec<_> = list.iter().collect();

    assert_eq!(once, twice);
    assert_eq!(once, list.raw().to_vec());
    assert_eq!(list.transform_count::<String, _>(), 0);
}

#[test]
fn test_type_independence() {
    let mut list = scenario();
    let reals_before: Vec<f64> = list.range_over::<f64, _>().collect();
    let text_before: Vec<String> = list.range_over::<String, _>().collect();

    list.modify_only(|x: i32| x + 1000);
    list.reset::<i32, _>();
    list.modify_only(|x: i32| -x);

    assert_eq!(list.range_over::<f64, _>().collect::<Vec<_>>(), reals_before);
    assert_eq!(list.range_over::<String, _>().collect::<Vec<_>>(), text_before);
    assert_eq!(ints(&list), vec![-1, -2]);
}

#[test]
fn test_round_trip() {
    let mut list = scenario();
    list.modify_only(|x: f64| x * 4.0);
    list.push_back(99i32);

    assert_eq!(list.range_over::<i32, _>().last(), Some(99));
}

#[test]
fn test_stored_values_never_rewritten() {
    let mut list = scenario();
    let stored = list.raw().to_vec();

    list.modify_only(|x: i32| x * 7);
    list.modify_only(|s: String| s + "b");
    list.modify_only(|x: f64| x.floor());
    let _: Vec<_> = list.iter().collect();

    assert_eq!(list.raw(), stored.as_slice());
}

#[test]
fn test_owned_traversal_applies_chains() {
    let mut list = scenario();
    list.modify_only(|s: String| format!("{}!", s));

    let all: Vec<_> = list.into_iter().collect();
    assert_eq!(all[1], Element::Second("a!".to_string()));
    assert_eq!(all[0], Element::First(1));
}

#[test]
fn test_collect_and_extend() {
    let mut list: TriList<i32, String, f64> = vec![Element::First(1), Element::Third(0.5)]
        .into_iter()
        .collect();
    list.extend([Element::Second("z".to_string()), Element::First(4)]);

    assert_eq!(list.len(), 4);
    assert_eq!(ints(&list), vec![1, 4]);
    assert_eq!(list.get(2), Some(Element::Second("z".to_string())));
    assert_eq!(list.get(4), None);
}

#[test]
fn test_concurrent_readers() {
    let mut list = TriList::<u64, String, bool>::with_capacity(1000);
    for i in 0..1000u64 {
        list.push_back(i);
    }
    list.push_back("end".to_string());
    list.modify_only(|x: u64| x * 2);

    // Shared read access from multiple threads
    let shared = &list;
    let sums: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || shared.range_over::<u64, _>().sum::<u64>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for sum in sums {
        assert_eq!(sum, 999 * 1000);
    }
}

#[test]
fn test_error_display() {
    let out_of_bounds = TriListError::IndexOutOfBounds { index: 5, len: 2 };
    let mismatch = TriListError::TypeMismatch {
        index: 0,
        expected: "bool",
        found: "u8",
    };

    assert_eq!(
        format!("{}", out_of_bounds),
        "Index 5 out of bounds for list of length 2"
    );
    assert_eq!(
        format!("{}", mismatch),
        "Type mismatch at index 0: expected bool, found u8"
    );
    assert!(format!("{:?}", mismatch).contains("TypeMismatch"));
}

#[test]
fn test_get_as() -> Result<(), TriListError> {
    let mut list = scenario();
    list.modify_only(|x: i32| x + 1);

    assert_eq!(list.get_as::<i32, _>(3)?, 3);
    assert_eq!(list.get_as::<String, _>(1)?, "a");
    assert!(matches!(
        list.get_as::<f64, _>(0),
        Err(TriListError::TypeMismatch { index: 0, .. })
    ));
    Ok(())
}

#[test]
fn test_default_implementation() {
    let mut list: TriList<i32, String, f64> = Default::default();
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
    assert_eq!(list.range_over::<i32, _>().next(), None);

    list.push_back(1.5f64);
    assert_eq!(list.len(), 1);
}
