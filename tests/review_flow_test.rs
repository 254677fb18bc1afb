// Browser tests for the review tabs.
// Run with: wasm-pack test --headless --firefox -- --no-default-features --features wasm-test
#![cfg(target_arch = "wasm32")]

use leptos::*;
use sockshop::components::product_tabs::ProductTabs;
use sockshop::models::review::Review;
use sockshop::relay::{EventRelay, RelayEvent, Topic};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

mod dom;
use dom::*;

wasm_bindgen_test_configure!(run_in_browser);

// Mounts the tabs on a fresh relay and records everything published on it.
async fn mount_tabs(id: &str) -> (web_sys::HtmlElement, Rc<RefCell<Vec<Review>>>) {
    let root = container(id);
    let relay = Rc::new(EventRelay::new());
    let published = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&published);
    relay.subscribe(Topic::ReviewSubmitted, move |event| {
        let RelayEvent::ReviewSubmitted(review) = event;
        sink.borrow_mut().push(review.clone());
    });

    mount_to(root.clone(), move || view! { <ProductTabs relay=relay/> });
    settle().await;
    (root, published)
}

fn fill_review(root: &web_sys::Element, name: &str, body: &str, rating: &str) {
    type_into_input(root, "#name", name);
    type_into_textarea(root, "#review", body);
    choose(root, "#rating", rating);
}

#[wasm_bindgen_test]
async fn test_valid_review_reaches_list() {
    let (root, published) = mount_tabs("valid-review").await;
    assert!(text(&root).contains("There are no reviews yet"));

    fill_review(&root, "Alice", "Great socks", "5");
    click(&root, "#recommend-yes");
    click(&root, "#submit-review");
    settle().await;

    assert_eq!(published.borrow().len(), 1);
    assert_eq!(published.borrow()[0].name, "Alice");

    let entries = query_all(&root, ".review");
    assert_eq!(entries.len(), 1);
    let entry = text(&entries[0]);
    assert!(entry.contains("Alice"));
    assert!(entry.contains("Great socks"));
    assert!(entry.contains("Rating: 5"));
    assert!(entry.contains("Would recommend this product"));
    assert!(!text(&root).contains("There are no reviews yet"));
    assert!(query_all(&root, ".errors").is_empty());

    // Name, body and rating reset; the recommend answer stays.
    assert_eq!(query::<HtmlInputElement>(&root, "#name").value(), "");
    assert_eq!(query::<HtmlTextAreaElement>(&root, "#review").value(), "");
    assert_eq!(query::<HtmlSelectElement>(&root, "#rating").value(), "");
    assert!(query::<HtmlInputElement>(&root, "#recommend-yes").checked());

    remove(root);
}

#[wasm_bindgen_test]
async fn test_empty_submit_lists_every_error() {
    let (root, published) = mount_tabs("empty-review").await;

    click(&root, "#submit-review");
    settle().await;

    let errors: Vec<String> = query_all(&root, ".errors li").iter().map(|li| text(li)).collect();
    assert_eq!(
        errors,
        vec!["Name required", "Rating required", "Review required", "Would recommend required"]
    );
    assert!(published.borrow().is_empty());
    assert!(query_all(&root, ".review").is_empty());

    remove(root);
}

#[wasm_bindgen_test]
async fn test_failed_submit_keeps_draft_and_recovers() {
    let (root, published) = mount_tabs("retry-review").await;

    fill_review(&root, "Bob", "Too warm", "2");
    click(&root, "#submit-review");
    settle().await;

    let errors: Vec<String> = query_all(&root, ".errors li").iter().map(|li| text(li)).collect();
    assert_eq!(errors, vec!["Would recommend required"]);
    assert_eq!(query::<HtmlInputElement>(&root, "#name").value(), "Bob");
    assert!(published.borrow().is_empty());

    click(&root, "#recommend-no");
    click(&root, "#submit-review");
    settle().await;

    assert!(query_all(&root, ".errors").is_empty());
    assert_eq!(published.borrow().len(), 1);
    assert!(!published.borrow()[0].would_recommend);
    assert!(text(&root).contains("Would not recommend this product."));

    remove(root);
}

#[wasm_bindgen_test]
async fn test_two_reviews_listed_in_order() {
    let (root, _published) = mount_tabs("ordered-reviews").await;

    fill_review(&root, "Alice", "Great socks", "5");
    click(&root, "#recommend-yes");
    click(&root, "#submit-review");
    settle().await;

    fill_review(&root, "Carol", "Fine", "3");
    click(&root, "#submit-review");
    settle().await;

    let names: Vec<String> = query_all(&root, ".review p:first-child").iter().map(|p| text(p)).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);

    remove(root);
}

#[wasm_bindgen_test]
async fn test_tabs_toggle_panels() {
    let (root, _published) = mount_tabs("tab-toggle").await;
    let panels = query_all(&root, ".tab-panel");
    let display = |i: usize| panels[i].style().get_property_value("display").unwrap();
    assert_eq!(display(0), "block");
    assert_eq!(display(1), "none");

    query_all(&root, ".tab")[1].click();
    settle().await;

    assert_eq!(display(0), "none");
    assert_eq!(display(1), "block");
    assert!(query_all(&root, ".tab")[1].class_list().contains("active-tab"));

    remove(root);
}
