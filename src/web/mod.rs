//! Browser wiring: builds (or adopts) the board markup, owns the single
//! thread-local controller and routes clicks and timeouts into it.
//!
//! Host pages may ship their own markup. Anything with class `wm-hole` is a
//! position (ordered by `data-index`, falling back to document order); the
//! `wm-time`, `wm-score`, `wm-message` and `wm-start` ids are reused when
//! present and created otherwise.

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::config::RoundConfig;
use crate::round::RoundController;

mod presenter;
mod timers;

pub use presenter::DomPresenter;
pub use timers::BrowserTimers;

type BrowserController = RoundController<BrowserTimers, DomPresenter, StdRng>;

thread_local! {
    static CONTROLLER: RefCell<Option<BrowserController>> = const { RefCell::new(None) };
}

/// Run `f` against the installed controller. Returns `None` when nothing is
/// installed yet or the controller is already borrowed further up the stack.
pub(crate) fn with_controller<T>(f: impl FnOnce(&mut BrowserController) -> T) -> Option<T> {
    CONTROLLER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            log::warn!("round controller busy; dropping re-entrant call");
            None
        }
    })
}

const STYLE: &str = "
#wm-board { display:grid; grid-template-columns:repeat(3, 96px); gap:18px; justify-content:center; margin:24px auto; }
.wm-hole { width:96px; height:96px; border-radius:50%; background:#3b2a1a; box-shadow:inset 0 8px 16px rgba(0,0,0,0.55); cursor:pointer; transition:background 80ms; }
.wm-hole.up { background:#c8733a; }
.wm-hole.up.hit { background:#ffd166; }
#wm-hud { display:flex; gap:24px; justify-content:center; font-family:'Fira Code', monospace; font-size:20px; color:#ffd166; }
#wm-message { text-align:center; min-height:1.5em; font-family:'Fira Code', monospace; color:#eee; }
#wm-start { display:block; margin:12px auto; padding:6px 18px; font-size:16px; }
";

struct Layout {
    time: Element,
    score: Element,
    message: Element,
    start_button: Element,
    holes: Vec<Element>,
}

pub fn start_web_mode(config: RoundConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if CONTROLLER.with(|c| c.borrow().is_some()) {
        log::warn!("whack round already installed; ignoring second start_game");
        return Ok(());
    }

    let layout = ensure_layout(&doc, config.positions)?;
    let config = config.with_positions(layout.holes.len());
    let total = config.total_duration_ms;

    // Listeners are wired before the layout moves into the presenter.
    for (idx, hole) in layout.holes.iter().enumerate() {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_controller(|c| c.activate_input(idx));
        }) as Box<dyn FnMut(_)>);
        hole.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_controller(|c| c.start());
        }) as Box<dyn FnMut(_)>);
        layout
            .start_button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let presenter = DomPresenter::new(
        layout.time,
        layout.score,
        layout.message,
        layout.start_button,
        layout.holes,
    );
    let mut controller = RoundController::new(
        config,
        BrowserTimers::new(win),
        presenter,
        StdRng::from_entropy(),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Idle board shows the full round length.
    {
        use crate::presenter::Presenter;
        let p = controller.presenter_mut();
        p.on_tick(total);
        p.on_score_changed(0);
    }

    CONTROLLER.with(|c| c.replace(Some(controller)));
    log::info!("whack round ready");
    Ok(())
}

fn ensure_layout(doc: &Document, default_positions: usize) -> Result<Layout, JsValue> {
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    if doc.get_element_by_id("wm-style").is_none() {
        let style = doc.create_element("style")?;
        style.set_id("wm-style");
        style.set_text_content(Some(STYLE));
        body.append_child(&style)?;
    }

    let hud = ensure_element(doc, &body, "div", "wm-hud", None)?;
    let time = ensure_element(doc, &hud, "span", "wm-time", Some("00:00"))?;
    let score = ensure_element(doc, &hud, "span", "wm-score", Some("0"))?;
    let board = ensure_element(doc, &body, "div", "wm-board", None)?;
    let message = ensure_element(doc, &body, "div", "wm-message", None)?;
    let start_button = ensure_element(doc, &body, "button", "wm-start", Some("Start"))?;

    let mut holes = collect_holes(doc)?;
    if holes.is_empty() {
        for idx in 0..default_positions {
            let hole = doc.create_element("div")?;
            hole.set_class_name("wm-hole");
            hole.set_attribute("data-index", &idx.to_string())?;
            board.append_child(&hole)?;
            holes.push(hole);
        }
    }

    Ok(Layout {
        time,
        score,
        message,
        start_button,
        holes,
    })
}

/// Reuse `#id` if the page already has it, otherwise create it under `parent`.
fn ensure_element(
    doc: &Document,
    parent: &web_sys::Node,
    tag: &str,
    id: &str,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element(tag)?;
    el.set_id(id);
    if text.is_some() {
        el.set_text_content(text);
    }
    parent.append_child(&el)?;
    Ok(el)
}

fn collect_holes(doc: &Document) -> Result<Vec<Element>, JsValue> {
    let list = doc.query_selector_all(".wm-hole")?;
    let mut holes: Vec<(usize, Element)> = Vec::new();
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<Element>() else {
            continue;
        };
        let order = el
            .get_attribute("data-index")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(i as usize);
        holes.push((order, el));
    }
    holes.sort_by_key(|(order, _)| *order);
    Ok(holes.into_iter().map(|(_, el)| el).collect())
}

pub fn start_round() {
    with_controller(|c| c.start());
}

pub fn stop_round() {
    with_controller(|c| c.stop());
}

pub fn activate(position: usize) {
    with_controller(|c| c.activate_input(position));
}
