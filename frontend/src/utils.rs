use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, File, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node, Storage, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_local_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_value_by_query(selectors: &str) -> String {
    query_selector(selectors)
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn get_input_value(name: &str) -> String {
    get_value_by_query(&format!("[name={name}]"))
}

pub fn get_input_file(name: &str) -> Option<File> {
    query_selector(&format!("[name={name}]"))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

pub fn clear_input(name: &str) {
    if let Some(input) = query_selector(&format!("[name={name}]")).and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn query_selector_all(selectors: &str) -> Vec<HtmlElement> {
    let mut list: Vec<HtmlElement> = Vec::new();
    if let Some(node_list) = get_document().and_then(|d| d.query_selector_all(selectors).ok()) {
        for ind in 0..node_list.length() {
            if let Some(html_elem) = get_html_element(get_element_from_node(node_list.get(ind))) {
                list.push(html_elem);
            }
        }
    }
    list
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.map(|el| el.dyn_into::<HtmlElement>().ok()).and_then(|el| el)
}

pub fn get_element_from_node(el: Option<Node>) -> Option<Element> {
    el.map(|el| el.dyn_into::<Element>().ok()).and_then(|el| el)
}

pub fn attr_data(key: &str) -> String {
    format!("data-{key}")
}

pub fn value_from_target(target: Option<EventTarget>) -> String {
    target.map(|target| get_value_from_input(JsValue::from(target))).unwrap_or_default()
}

pub fn storage_get(key: &str) -> Option<String> {
    get_local_storage().and_then(|s| s.get_item(key).ok()).and_then(|v| v)
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(s) = get_local_storage() {
        if s.set_item(key, value).is_err() {
            log::error!("storage_set: {key}");
        }
    }
}

pub fn storage_remove(key: &str) {
    if let Some(s) = get_local_storage() {
        s.remove_item(key).ok();
    }
}

pub fn window_open(url: &str) {
    if let Some(w) = get_window() {
        if w.open_with_url_and_target(url, "_blank").is_err() {
            log::error!("window_open: {url}");
        }
    }
}

pub fn obj_to_string<T>(data: &T) -> String
    where T: serde::Serialize
{
    serde_wasm_bindgen::to_value(data).ok()
        .and_then(|val| js_sys::JSON::stringify(&val).ok())
        .map(String::from)
        .unwrap_or_default()
}

pub fn string_to_obj<T>(text: &str) -> Option<T>
    where T: serde::de::DeserializeOwned
{
    js_sys::JSON::parse(text).ok()
        .and_then(|val| serde_wasm_bindgen::from_value(val).ok())
}
