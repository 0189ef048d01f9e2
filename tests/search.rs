//! Public API tests for breadth-first search

use bfs_path::logging::init_tracing;
use bfs_path::{search, search_with, ErrorKind, FromFn, Graph, SearchOptions, Target};
use std::collections::HashMap;

fn graph(edges: &[(char, &str)]) -> HashMap<char, Vec<char>> {
    edges
        .iter()
        .map(|(node, neighbors)| (*node, neighbors.chars().collect()))
        .collect()
}

#[test]
fn test_documented_scenarios() {
    let _ = init_tracing(false, Some("debug"), false);

    let back_edge = graph(&[('a', "b"), ('b', "ac"), ('c', "b")]);
    assert_eq!(
        search(&back_edge, 'a', &Target::node('c')).unwrap(),
        Some(vec!['a', 'b', 'c'])
    );

    let successors = FromFn(|n: &i32| vec![n + 1, n + 2]);
    assert_eq!(
        search(&successors, 0, &Target::node(3)).unwrap(),
        Some(vec![0, 1, 3])
    );

    let ring = graph(&[('a', "b"), ('b', "c"), ('c', "d"), ('d', "a")]);
    let longer_than_two = Target::predicate(|path: &[char]| path.len() > 2);
    assert_eq!(
        search(&ring, 'a', &longer_than_two).unwrap(),
        Some(vec!['a', 'b', 'c'])
    );

    let one_way = graph(&[('a', "b"), ('b', "a"), ('c', "b")]);
    assert_eq!(search(&one_way, 'a', &Target::node('c')).unwrap(), None);
}

fn alphabet(finite: bool) -> Graph<'static, char> {
    if finite {
        Graph::adjacency(graph(&[('a', "b"), ('b', "")]))
    } else {
        Graph::from_fn(|c: &char| char::from_u32(*c as u32 + 1).into_iter().collect())
    }
}

#[test]
fn test_runtime_chosen_representation() {
    for finite in [true, false] {
        let g = alphabet(finite);
        assert_eq!(
            search(&g, 'a', &Target::node('b')).unwrap(),
            Some(vec!['a', 'b'])
        );
    }

    assert!(search(&alphabet(true), 'a', &Target::node('c')).unwrap().is_none());
    assert_eq!(
        search(&alphabet(false), 'a', &Target::node('d')).unwrap(),
        Some(vec!['a', 'b', 'c', 'd'])
    );
}

#[test]
fn test_not_found_distinct_from_contract_violation() {
    let complete = graph(&[('a', "b"), ('b', "")]);
    assert_eq!(search(&complete, 'a', &Target::node('z')).unwrap(), None);

    let incomplete = graph(&[('a', "b")]);
    let err = search(&incomplete, 'a', &Target::node('z')).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Contract);
    assert_eq!(err.to_string(), "node has no adjacency entry: 'b'");
}

#[test]
fn test_options_from_toml_bound_generator() {
    let opts = SearchOptions::from_toml_str("max_depth = 5").unwrap();
    let doubling = FromFn(|n: &u64| vec![n * 2]);

    let result = search_with(&doubling, 1, &Target::node(3), &opts).unwrap();
    assert!(!result.found);
    assert!(result.truncated);
    assert_eq!(result.stats.dequeued, 6);

    let result = search_with(&doubling, 1, &Target::node(32), &opts).unwrap();
    assert_eq!(result.path, Some(vec![1, 2, 4, 8, 16, 32]));
    assert_eq!(result.path_length, 5);
}

#[test]
fn test_result_serializes_without_path_when_not_found() {
    let one_way = graph(&[('a', "b"), ('b', "a")]);
    let result = search_with(&one_way, 'a', &Target::node('c'), &SearchOptions::default()).unwrap();
    let json = result.to_json().unwrap();

    assert_eq!(json["found"], false);
    assert!(json.get("path").is_none());
    assert_eq!(json["path_length"], 0);
    assert_eq!(json["truncated"], false);
}
