//! Mounts components into the test page and reads back what they rendered.

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use yew::platform::time::sleep;
use yew::{AppHandle, BaseComponent, Renderer};

pub fn mount<C: BaseComponent>(props: C::Properties) -> (AppHandle<C>, Element) {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let root = document.create_element("div").expect("root element");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("attach root");
    let app = Renderer::<C>::with_root_and_props(root.clone(), props).render();
    (app, root)
}

/// Lets effects, spawned futures and the re-renders they trigger run.
pub async fn settle() {
    for _ in 0..5 {
        sleep(Duration::from_millis(5)).await;
    }
}

pub fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn by_test_id(root: &Element, test_id: &str) -> Option<Element> {
    find(root, &format!("[data-testid=\"{test_id}\"]"))
}

pub fn find_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn text(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

pub fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("clickable element")
        .click();
}

pub fn fill(root: &Element, test_id: &str, value: &str) {
    by_test_id(root, test_id)
        .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
        .expect("input field")
        .set_value(value);
}
