#![cfg(target_arch = "wasm32")]

use cardkkang_game::{
    CounterStore, FixedClock, KeyValueStore, StorageKeys, Theme, ThemePreference,
};
use cardkkang_web::dom;
use cardkkang_web::storage::{WebStorage, local_storage};
use cardkkang_web::theme;
use chrono::NaiveDate;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn test_keys() -> StorageKeys {
    StorageKeys::new("cardkkang-test", "v1")
}

fn clear() {
    local_storage().expect("localStorage").clear().expect("clear storage");
}

#[wasm_bindgen_test]
fn web_storage_round_trips_strings() {
    clear();
    let store = WebStorage::new();
    assert_eq!(store.get_item("cardkkang-test:missing").expect("read"), None);
    store.set_item("cardkkang-test:k", "42").expect("write");
    assert_eq!(
        store.get_item("cardkkang-test:k").expect("read").as_deref(),
        Some("42")
    );
}

#[wasm_bindgen_test]
fn counters_persist_in_local_storage() {
    clear();
    let day = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date");
    let store = CounterStore::new(WebStorage::new(), test_keys(), FixedClock::new(day));
    store.add_cards(10);
    store.add_cards(5);
    let raw = local_storage().expect("localStorage");
    assert_eq!(
        raw.get_item("cardkkang-test:v1:total").expect("read").as_deref(),
        Some("15")
    );
    assert_eq!(
        raw.get_item("cardkkang-test:v1:day:2024-03-09")
            .expect("read")
            .as_deref(),
        Some("15")
    );
    assert_eq!(store.reset_daily().grand_total, 15);
}

#[wasm_bindgen_test]
fn theme_toggle_updates_class_and_storage() {
    clear();
    let root = dom::root_element().expect("html element");
    let next = theme::toggle(Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert!(root.class_list().contains(theme::DARK_CLASS));
    assert_eq!(theme::preference().load(), Theme::Dark);

    theme::toggle(next);
    assert!(!root.class_list().contains(theme::DARK_CLASS));
    let pref = ThemePreference::new(WebStorage::new(), &StorageKeys::default());
    assert_eq!(pref.load(), Theme::Light);
}
