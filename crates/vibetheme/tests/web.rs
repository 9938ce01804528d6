#![cfg(target_arch = "wasm32")]
//! Browser adapter tests. Run with `wasm-pack test --headless --firefox`.

use std::cell::RefCell;
use std::rc::Rc;

use vibetheme::web::{self, DomSink, LocalStorage, MediaQueryScheme, PREFERS_DARK_QUERY};
use vibetheme::{
    presets, ColorSchemeSource, StyleSink, ThemeManagerConfig, ThemeRole, ThemeStorage,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{HtmlElement, MediaQueryList, MediaQueryListEvent, MediaQueryListEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> HtmlElement {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn theme_color_metas() -> Vec<web_sys::Element> {
    let document = web_sys::window().unwrap().document().unwrap();
    let list = document
        .query_selector_all("meta[name=\"theme-color\"]")
        .unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.dyn_into::<web_sys::Element>().unwrap())
        .collect()
}

fn dispatch_change(query: &MediaQueryList, matches: bool) {
    let init = MediaQueryListEventInit::new();
    init.set_matches(matches);
    init.set_media(PREFERS_DARK_QUERY);
    let event = MediaQueryListEvent::new_with_event_init_dict("change", &init).unwrap();
    query.dispatch_event(&event).unwrap();
}

fn clean_storage(key: &str) -> LocalStorage {
    let mut storage = LocalStorage::new().unwrap();
    storage.remove(key).unwrap();
    storage
}

#[wasm_bindgen_test]
fn dom_sink_writes_root_and_single_meta_tag() {
    let mut sink = DomSink::new().unwrap();
    sink.add_class("sepia");
    sink.set_property("--ring", "30 40% 50%");
    sink.ensure_meta_tag("theme-color");
    sink.ensure_meta_tag("theme-color");

    let root = root();
    assert!(root.class_list().contains("sepia"));
    assert_eq!(
        root.style().get_property_value("--ring").unwrap(),
        "30 40% 50%"
    );

    let metas = theme_color_metas();
    assert_eq!(metas.len(), 1);
    assert_eq!(metas[0].get_attribute("content"), None);

    sink.remove_class("sepia");
    assert!(!root.class_list().contains("sepia"));
}

#[wasm_bindgen_test]
fn local_storage_round_trips() {
    let key = "vibetheme-test-round-trip";
    let mut storage = clean_storage(key);
    assert_eq!(storage.get(key).unwrap(), None);

    storage.set(key, "ocean").unwrap();
    assert_eq!(storage.get(key).unwrap().as_deref(), Some("ocean"));

    storage.remove(key).unwrap();
    assert_eq!(storage.get(key).unwrap(), None);
}

#[wasm_bindgen_test]
fn media_query_scheme_reports_current_match() {
    let expected = web_sys::window()
        .unwrap()
        .match_media(PREFERS_DARK_QUERY)
        .unwrap()
        .unwrap()
        .matches();
    assert_eq!(MediaQueryScheme::new().unwrap().prefers_dark(), expected);
}

#[wasm_bindgen_test]
fn browser_manager_applies_to_document() {
    let key = "vibetheme-test-apply";
    clean_storage(key);

    let config = ThemeManagerConfig::new()
        .builtin_themes(true)
        .storage_key(key)
        .default_theme("ocean")
        .enable_system_theme(false);
    let manager = web::browser_manager(config).unwrap();
    assert_eq!(manager.theme(), "ocean");

    let root = root();
    assert!(root.class_list().contains("ocean"));
    assert!(!root.class_list().contains("light"));
    assert_eq!(
        root.style().get_property_value("--primary").unwrap(),
        presets::ocean().get(ThemeRole::Primary).unwrap()
    );
    assert_eq!(theme_color_metas().len(), 1);
}

#[wasm_bindgen_test]
fn dropping_watch_stops_following() {
    let key = "vibetheme-test-watch";
    clean_storage(key);

    let config = ThemeManagerConfig::new()
        .builtin_themes(true)
        .storage_key(key);
    let manager = Rc::new(RefCell::new(web::browser_manager(config).unwrap()));
    let started_dark = manager.borrow().theme() == "dark";

    let watch = web::watch_media_query(&manager).unwrap();
    let query = watch.query().clone();
    dispatch_change(&query, !started_dark);
    let followed = manager.borrow().theme().to_string();
    assert_eq!(followed, if started_dark { "light" } else { "dark" });

    // Forget the saved choice so only the missing listener can stop a switch.
    manager.borrow_mut().storage_mut().remove(key).unwrap();
    drop(watch);
    dispatch_change(&query, started_dark);
    assert_eq!(manager.borrow().theme(), followed);
}
