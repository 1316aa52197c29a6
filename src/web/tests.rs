//! Browser tests for the `web_sys` adapters
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

use super::bindings::{collect_fields, start};
use super::*;
use crate::config::StorageConfig;
use crate::fields::{FieldElement, FieldSynchronizer};
use crate::storage::{FallbackStore, Medium, MemoryMedium, RawStorage, Storage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

// =========================================================
// Helpers
// =========================================================

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn element(html: &str) -> Element {
    let container = document().create_element("div").unwrap();
    container.set_inner_html(html);
    container.first_element_child().unwrap()
}

fn test_cookie() -> DocumentCookie {
    DocumentCookie::new(&StorageConfig {
        cookie_name: "formstash_test".to_string(),
        ..Default::default()
    })
}

// =========================================================
// Logging
// =========================================================

#[wasm_bindgen_test]
fn test_start_installs_console_logger() {
    start();
    // Safe to call again: the second init is reported, not a panic
    start();
    assert!(log::max_level() >= log::LevelFilter::Warn);
}

// =========================================================
// Media
// =========================================================

#[wasm_bindgen_test]
fn test_cookie_round_trip_keeps_separators() {
    let cookie = test_cookie();
    let data = r#"{"k":"\"a; b=c, d%\""}"#;

    cookie.write(data).unwrap();
    assert_eq!(cookie.read().unwrap().as_deref(), Some(data));

    cookie.write("").unwrap();
}

#[wasm_bindgen_test]
fn test_fallback_store_over_cookie() {
    let store = FallbackStore::new(test_cookie());
    store.set_item("k", "\"v\"").unwrap();

    let reloaded = FallbackStore::new(test_cookie());
    assert_eq!(reloaded.get_item("k", false).unwrap().as_deref(), Some("\"v\""));

    store.clear().unwrap();
    assert_eq!(store.get_item("k", true).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_window_name_round_trip() {
    WindowName.write("{}").unwrap();
    assert_eq!(WindowName.read().unwrap().as_deref(), Some("{}"));
    WindowName.write("").unwrap();
}

#[wasm_bindgen_test]
fn test_native_storage_round_trip() {
    let storage = Storage::native(NativeStorage::probe().unwrap());
    storage.set("formstash_test.a", &vec!["x", "y"]);

    assert_eq!(
        storage.get_from_real_storage::<Vec<String>>("formstash_test.a"),
        Some(vec!["x".to_string(), "y".to_string()])
    );

    storage.delete_by_namespace("formstash_test.");
    assert_eq!(storage.get::<Vec<String>>("formstash_test.a"), None);
}

// =========================================================
// DomField
// =========================================================

#[wasm_bindgen_test]
fn test_control_type_is_normalised() {
    let kind = |html: &str| DomField::new(element(html)).control_type();

    assert_eq!(kind("<input name='a'>").as_deref(), Some("text"));
    assert_eq!(kind("<input type='TEXT'>").as_deref(), Some("text"));
    assert_eq!(kind("<input type='bogus'>").as_deref(), Some("text"));
    assert_eq!(kind("<input type='checkbox'>").as_deref(), Some("checkbox"));
    assert_eq!(kind("<select></select>").as_deref(), Some("select-one"));
    assert_eq!(
        kind("<select multiple></select>").as_deref(),
        Some("select-multiple")
    );
    assert_eq!(kind("<textarea></textarea>").as_deref(), Some("textarea"));
    assert_eq!(kind("<div></div>"), None);
}

#[wasm_bindgen_test]
fn test_multi_select_selection() {
    let field = DomField::new(element(
        "<select multiple><option value='a' selected>A</option>\
         <option value='b'>B</option><option value='c'>C</option></select>",
    ));

    assert_eq!(field.option_values(), vec!["a", "b", "c"]);
    assert_eq!(field.selected_values(), vec!["a"]);

    field.set_selected_values(&["b".to_string(), "c".to_string()]);
    assert_eq!(field.selected_values(), vec!["b", "c"]);
}

#[wasm_bindgen_test]
fn test_restore_into_dom_form() {
    let form = element(
        "<form>\
         <input type='checkbox' name='agree' data-stored-field>\
         <input type='text' name='city' data-stored-field='billing' value='Paris'>\
         <input type='text' name='ignored' value='x'>\
         </form>",
    );
    let storage = Storage::fallback(FallbackStore::new(MemoryMedium::new()));
    storage.set("stored_field_agree", &true);
    storage.set("stored_field_city_billing", "Berlin");
    let config = StorageConfig::default();
    let fields = [DomField::new(form.clone())];

    assert!(FieldSynchronizer::new(&storage, &config).restore_chosen_fields(&fields));

    let city = DomField::new(form.query_selector("[name=city]").unwrap().unwrap());
    let agree = DomField::new(form.query_selector("[name=agree]").unwrap().unwrap());
    assert_eq!(city.value(), "Berlin");
    assert!(agree.is_checked());
}

// =========================================================
// collect_fields
// =========================================================

#[wasm_bindgen_test]
fn test_collect_fields_from_single_element() {
    let input: JsValue = element("<input name='a'>").into();
    assert_eq!(collect_fields(&input).len(), 1);
}

#[wasm_bindgen_test]
fn test_collect_fields_from_array_skips_non_elements() {
    let array = js_sys::Array::new();
    array.push(&element("<input name='a'>").into());
    array.push(&JsValue::from_str("not an element"));
    array.push(&element("<select name='b'></select>").into());

    assert_eq!(collect_fields(array.unchecked_ref()).len(), 2);
}

#[wasm_bindgen_test]
fn test_collect_fields_from_node_list() {
    let form = element("<form><input name='a'><input name='b'><span></span></form>");
    let nodes = form.query_selector_all("input").unwrap();

    assert_eq!(collect_fields(nodes.unchecked_ref()).len(), 2);
}
