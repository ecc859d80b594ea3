#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Route Contract Tests
//!
//! The site's public surface is small: the health check, two JSON endpoints
//! and the server-rendered pages. The golden file at
//! tests/fixtures/api_routes.txt is the source of truth for it.
//!
//! If this test fails, review the route change and update api_routes.txt if
//! it is intentional.
//!
//! Run with: cargo test --test api_contract

use std::collections::BTreeSet;
use std::fs;

const GOLDEN_FILE: &str = "tests/fixtures/api_routes.txt";

fn golden_lines() -> Vec<String> {
    fs::read_to_string(GOLDEN_FILE)
        .expect("Failed to read api_routes.txt")
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// Extract `METHOD /path` pairs from the router in main.rs
fn extract_routes_from_source() -> BTreeSet<String> {
    let content = fs::read_to_string("src/main.rs").expect("Failed to read main.rs");

    let mut routes = BTreeSet::new();
    for line in content.lines().map(str::trim) {
        if line.starts_with("//") {
            continue;
        }
        let Some(start) = line.find(".route(\"") else {
            continue;
        };
        let rest = &line[start + 8..];
        let Some(end) = rest.find('"') else {
            continue;
        };
        let method = if line.contains("get(") {
            "GET"
        } else if line.contains("post(") {
            "POST"
        } else {
            continue;
        };
        routes.insert(format!("{} {}", method, &rest[..end]));
    }
    routes
}

#[test]
fn api_routes_match_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let actual = extract_routes_from_source();

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    if !added.is_empty() || !removed.is_empty() {
        let mut msg = String::from("\n\nROUTE CONTRACT VIOLATION!\n\n");
        for route in &added {
            msg.push_str(&format!("  + {}\n", route));
        }
        for route in &removed {
            msg.push_str(&format!("  - {}\n", route));
        }
        msg.push_str("\nIf intentional: update tests/fixtures/api_routes.txt\n");
        panic!("{}", msg);
    }
}

#[test]
fn golden_file_is_sorted() {
    let routes = golden_lines();
    let mut sorted = routes.clone();
    sorted.sort();
    assert_eq!(
        routes, sorted,
        "api_routes.txt is not sorted! Please sort alphabetically."
    );
}

#[test]
fn routes_use_brace_path_syntax() {
    // axum 0.8 panics at startup on the old `:param` / `*rest` forms
    for route in extract_routes_from_source() {
        let path = route.split_once(' ').map(|(_, p)| p).unwrap_or("");
        assert!(
            !path.contains("/:") && !path.contains("/*"),
            "route uses pre-0.8 capture syntax: {}",
            route
        );
    }
}
