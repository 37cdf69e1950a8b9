// Browser smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_builds_board() {
    whack_round::start_game().expect("board installs");
    let doc = web_sys::window().unwrap().document().unwrap();
    let holes = doc.query_selector_all(".wm-hole").unwrap();
    assert_eq!(holes.length() as usize, whack_round::RoundConfig::default().positions);
    let time = doc.get_element_by_id("wm-time").unwrap();
    assert_eq!(time.text_content().as_deref(), Some("00:30"));
}

#[wasm_bindgen_test]
fn format_remaining_matches_native() {
    assert_eq!(whack_round::format_remaining(61_000), "01:01");
}
