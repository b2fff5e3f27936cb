//! Behaviour of the list-view pipeline as seen by an admin table
//!
//! These tests drive the public API the same way a products or orders
//! table does: type a query, click headers, move between pages.

use crochet::prelude::*;
use serde_json::{Value, json};

fn products() -> Vec<Value> {
    vec![
        json!({"name": "Red Bag", "price": 30, "category": {"name": "Bags"}}),
        json!({"name": "Blue Hat", "price": 12, "category": {"name": "Hats"}}),
        json!({"name": "Green Bag", "price": 18, "category": {"name": "Bags"}}),
        json!({"name": "Baby Blanket", "price": 55}),
        json!({"name": "Bunny", "price": 12, "category": {"name": "Toys"}}),
    ]
}

fn names(items: &[Value]) -> Vec<&str> {
    items.iter().map(|i| i["name"].as_str().unwrap()).collect()
}

fn search_fields() -> Vec<String> {
    vec!["name".to_string(), "category.name".to_string()]
}

#[test]
fn test_unsorted_view_matches_source_order() {
    let list = ListViewController::new(products(), search_fields(), 10);
    assert_eq!(list.view().items, products());
    assert_eq!(sort(&products(), None), products());
}

#[test]
fn test_header_clicks_toggle_direction() {
    let mut list = ListViewController::new(products(), search_fields(), 10);

    list.request_sort("price");
    assert_eq!(list.sort_state(), Some(&SortState::ascending("price")));
    assert_eq!(
        names(&list.view().items),
        ["Blue Hat", "Bunny", "Green Bag", "Red Bag", "Baby Blanket"]
    );

    list.request_sort("price");
    assert_eq!(list.sort_state(), Some(&SortState::descending("price")));
    assert_eq!(
        names(&list.view().items),
        ["Baby Blanket", "Red Bag", "Green Bag", "Blue Hat", "Bunny"]
    );

    list.request_sort("name");
    assert_eq!(list.sort_state(), Some(&SortState::ascending("name")));
}

#[test]
fn test_equal_prices_keep_source_order() {
    let mut list = ListViewController::new(products(), search_fields(), 10);
    list.request_sort("price");
    let asc = list.view().items;
    assert_eq!(names(&asc[..2]), ["Blue Hat", "Bunny"]);

    list.request_sort("price");
    let desc = list.view().items;
    assert_eq!(names(&desc[3..]), ["Blue Hat", "Bunny"]);
}

#[test]
fn test_nested_sort_key_with_missing_values() {
    let mut list = ListViewController::new(products(), search_fields(), 10);
    list.request_sort("category.name");
    assert_eq!(
        names(&list.view().items),
        ["Red Bag", "Green Bag", "Blue Hat", "Bunny", "Baby Blanket"]
    );

    list.request_sort("category.name");
    assert_eq!(
        names(&list.view().items),
        ["Bunny", "Blue Hat", "Red Bag", "Green Bag", "Baby Blanket"]
    );
}

#[test]
fn test_search_then_sort_then_page() {
    let mut list = ListViewController::new(products(), search_fields(), 1);
    list.set_query("BAG");
    list.request_sort("price");

    let first = list.view();
    assert_eq!(first.total_count, 2);
    assert_eq!(first.total_pages, 2);
    assert_eq!(names(&first.items), ["Green Bag"]);

    list.set_page(2);
    let second = list.view();
    assert_eq!(names(&second.items), ["Red Bag"]);
    assert_eq!((second.first_index, second.last_index), (2, 2));
}

#[test]
fn test_search_matches_nested_category() {
    let mut list = ListViewController::new(products(), search_fields(), 10);
    list.set_query("toys");
    assert_eq!(names(&list.view().items), ["Bunny"]);
}

#[test]
fn test_filter_function_matches_example() {
    let items = vec![json!({"name": "Red Bag"}), json!({"name": "Blue Hat"})];
    let result = filter(&items, "bag", &["name".to_string()]);
    assert_eq!(result, vec![json!({"name": "Red Bag"})]);
}

#[test]
fn test_paginate_twenty_five_items() {
    let items: Vec<Value> = (1..=25).map(|i| json!({"n": i})).collect();
    let page = paginate(&items, 3, 10);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page_items.len(), 5);
    assert_eq!(page.first_index, 21);
    assert_eq!(page.last_index, 25);
}

#[test]
fn test_narrowing_query_returns_to_first_page() {
    let items: Vec<Value> = (1..=45)
        .map(|i| json!({"name": if i <= 15 { format!("Scarf {i}") } else { format!("Coaster {i}") }}))
        .collect();
    let mut list = ListViewController::new(items, vec!["name".to_string()], 10);

    list.set_page(3);
    assert_eq!(list.view().first_index, 21);

    list.set_query("scarf");
    let view = list.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_count, 15);
    assert_eq!(view.items.len(), 10);
}

#[test]
fn test_status_chip_resets_page_but_resort_does_not() {
    let statuses = ["pending", "shipped", "delivered"];
    let orders: Vec<Value> = (0..60)
        .map(|i| json!({"id": i, "status": statuses[i % 3], "total": (i * 7) % 50}))
        .collect();
    let mut list = ListViewController::new(orders, vec!["status".to_string()], 10);

    list.set_page(4);
    list.request_sort("total");
    assert_eq!(list.current_page(), 4);

    list.set_filter("status", Some(FieldValue::String("shipped".to_string())));
    assert_eq!(list.current_page(), 1);

    let view = list.view();
    assert_eq!(view.total_count, 20);
    assert!(view.items.iter().all(|o| o["status"] == "shipped"));
    let totals: Vec<i64> = view.items.iter().map(|o| o["total"].as_i64().unwrap()).collect();
    assert!(totals.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_empty_list_renders_single_page() {
    let list: ListViewController<Value> = ListViewController::new(Vec::new(), search_fields(), 10);
    let view = list.view();
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.total_count, 0);
    assert_eq!((view.first_index, view.last_index), (0, 0));
}
