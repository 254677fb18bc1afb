// DOM helpers shared by the browser tests.
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Appends a fresh container to the body to mount a component into.
pub fn container(id: &str) -> HtmlElement {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element.unchecked_into()
}

pub fn remove(container: HtmlElement) {
    document().body().unwrap().remove_child(&container).unwrap();
}

// Give the reactive system a moment to flush effects into the DOM.
pub async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

pub fn query<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| node.unchecked_into())
        .collect()
}

pub fn text(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

fn dispatch(target: &Element, name: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(name, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

pub fn type_into_input(root: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = query(root, selector);
    input.set_value(value);
    dispatch(&input, "input");
}

pub fn type_into_textarea(root: &Element, selector: &str, value: &str) {
    let textarea: HtmlTextAreaElement = query(root, selector);
    textarea.set_value(value);
    dispatch(&textarea, "input");
}

pub fn choose(root: &Element, selector: &str, value: &str) {
    let select: HtmlSelectElement = query(root, selector);
    select.set_value(value);
    dispatch(&select, "change");
}

pub fn click(root: &Element, selector: &str) {
    let element: HtmlElement = query(root, selector);
    element.click();
}
