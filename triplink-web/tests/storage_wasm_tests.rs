//! Browser-only checks of the storage-backed `KvStore` implementations.
//! Run with `wasm-pack test --headless --chrome triplink-web`.

#![cfg(target_arch = "wasm32")]

use triplink_core::store::{KvStore, keys};
use triplink_core::trip::{NavParams, resolve};
use triplink_web::storage::{LocalStore, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_store_round_trips_raw_values() {
    let store = LocalStore;
    store.set_raw(keys::DISTANCE, "120").unwrap();
    assert_eq!(store.get_raw(keys::DISTANCE).unwrap().as_deref(), Some("120"));
    store.remove(keys::DISTANCE).unwrap();
    assert_eq!(store.get_raw(keys::DISTANCE).unwrap(), None);
}

#[wasm_bindgen_test]
fn session_store_is_a_separate_scope() {
    LocalStore.set_raw(keys::USER_ROLE, "USER").unwrap();
    assert_eq!(SessionStore.get_raw(keys::USER_ROLE).unwrap(), None);
    LocalStore.remove(keys::USER_ROLE).unwrap();
}

#[wasm_bindgen_test]
fn resolver_writes_distance_back_to_local_storage() {
    let store = LocalStore;
    store.remove(keys::DISTANCE).unwrap();
    let nav = NavParams {
        distance: Some("80".into()),
        ..NavParams::default()
    };
    let ctx = resolve(&nav, &store);
    assert_eq!(ctx.distance_km, Some(80.0));
    assert_eq!(store.get_raw(keys::DISTANCE).unwrap().as_deref(), Some("80"));
    store.remove(keys::DISTANCE).unwrap();
}
