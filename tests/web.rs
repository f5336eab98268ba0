//! Browser-side checks, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use disturbance_engine::FieldHandle;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn bad_buffer_length_is_a_js_error() {
    let rgba = vec![255u8; 7];
    assert!(FieldHandle::new(&rgba, 2, 2, 1, 2.0, 0.75, 0.6).is_err());
}

#[wasm_bindgen_test]
fn bad_config_json_is_a_js_error() {
    let rgba = vec![255u8; 16];
    assert!(FieldHandle::from_config_json(&rgba, 2, 2, "{\"friction\": 2}".to_string()).is_err());
    assert!(FieldHandle::from_config_json(&rgba, 2, 2, "not json".to_string()).is_err());
}

#[wasm_bindgen_test]
fn tick_loop_runs_in_browser() {
    let rgba = vec![255u8; 8 * 8 * 4];
    let mut field = FieldHandle::new(&rgba, 8, 8, 1, 3.0, 0.75, 0.6).unwrap();
    field.pointer_enter();
    field.pointer_move(4.0, 4.0);
    field.tick();
    field.pointer_leave();
    let mut ticks = 0;
    while field.tick() {
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert!(field.is_idle());
}
