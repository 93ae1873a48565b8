#![cfg(target_arch = "wasm32")]
//! Browser tests; run with `wasm-pack test --headless --chrome lightbox-web`.

mod fixture;
mod modal_tests;
mod zoom_tests;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
