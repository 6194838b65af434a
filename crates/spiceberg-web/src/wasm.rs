#![forbid(unsafe_code)]

//! `wasm-bindgen` entry point and DOM event wiring.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Reflect};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use spiceberg_core::ambient::{IN_PAGE_LINK_SELECTOR, scroll_target};
use spiceberg_core::{LandingController, ThemeTable};
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, TouchEvent, Window,
};

use crate::anchors::{CONFIG_ATTR, ElementLookup, PageAnchors, read_config};
use crate::dom::DomSurface;

struct Page {
    controller: LandingController,
    surface: DomSurface,
}

type SharedPage = Rc<RefCell<Page>>;

thread_local! {
    static CURRENT: RefCell<Option<SharedPage>> = const { RefCell::new(None) };
}

/// Run `f` against the page unless a handler further up the stack holds it.
fn with_page<R>(
    page: &SharedPage,
    f: impl FnOnce(&mut LandingController, &mut DomSurface) -> R,
) -> Option<R> {
    let Ok(mut guard) = page.try_borrow_mut() else {
        tracing::trace!("page busy; dropping re-entrant event");
        return None;
    };
    let Page {
        controller,
        surface,
    } = &mut *guard;
    Some(f(controller, surface))
}

const LOADING: &str = "loading";

/// `console.error`, reachable without a tracing subscriber.
fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn report_boot_error(err: &JsValue) {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    console_error(&format!("SPICE BERG failed to boot: {detail}"));
}

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!("spiceberg panic at {}:{}: {info}", loc.file(), loc.line()),
                None => format!("spiceberg panic: {info}"),
            };
            console_error(&msg);
        }));
    });
}

fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn first_changed_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.screen_x()))
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Module entry point: boot now if the document is ready, otherwise on
/// `DOMContentLoaded`. A deferred boot failure goes to `console.error`.
#[cfg_attr(not(test), wasm_bindgen(start))]
#[cfg_attr(test, allow(dead_code))]
pub fn start() -> Result<(), JsValue> {
    install_panic_hook();
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == LOADING {
        listen(&document, "DOMContentLoaded", move |_: Event| {
            if let Err(err) = boot() {
                report_boot_error(&err);
            }
        })
    } else {
        boot().map(drop)
    }
}

fn boot() -> Result<SharedPage, JsValue> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let anchors = PageAnchors::resolve(&document).map_err(to_js)?;
    let config_raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTR));
    let config = read_config(config_raw.as_deref()).map_err(to_js)?;
    let items = anchors.dish_items(&document);
    let speeds = anchors.layer_speeds(&document);

    let mut controller =
        LandingController::new(config, ThemeTable::builtin(), items).map_err(to_js)?;
    controller.set_parallax_layers(speeds.iter().map(Option::as_deref));
    let mut surface = DomSurface::new(document.clone(), anchors)?;

    let reveal_count = surface.anchors().reveal_targets.len();
    controller.track_reveals(reveal_count, &mut surface);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    controller.boot(&mut surface, &mut SmallRng::seed_from_u64(seed));

    let page: SharedPage = Rc::new(RefCell::new(Page {
        controller,
        surface,
    }));
    wire_navigation(&page, &document)?;
    wire_gestures(&page)?;
    wire_scroll(&page, &window)?;
    wire_reveal(&page)?;
    wire_anchor_links(&document)?;

    CURRENT.with(|slot| *slot.borrow_mut() = Some(page.clone()));
    tracing::info!("SPICE BERG initialized");
    Ok(page)
}

fn to_js(err: spiceberg_core::LandingError) -> JsValue {
    tracing::error!(%err, "landing page boot error");
    JsValue::from_str(&err.to_string())
}

fn wire_navigation(page: &SharedPage, document: &Document) -> Result<(), JsValue> {
    let (prev, next) = {
        let anchors = page.borrow().surface.anchors().clone();
        (anchors.prev_button, anchors.next_button)
    };

    let p = page.clone();
    listen(&prev, "click", move |_: Event| {
        with_page(&p, |c, s| c.prev(s));
    })?;
    let p = page.clone();
    listen(&next, "click", move |_: Event| {
        with_page(&p, |c, s| c.next(s));
    })?;
    let p = page.clone();
    listen(document, "keydown", move |event: KeyboardEvent| {
        with_page(&p, |c, s| c.key_down(&event.key(), s));
    })
}

fn wire_gestures(page: &SharedPage) -> Result<(), JsValue> {
    let (track, cards) = {
        let anchors = page.borrow().surface.anchors().clone();
        (anchors.track, anchors.cards)
    };

    let p = page.clone();
    listen_passive(&track, "touchstart", move |event: TouchEvent| {
        if let Some(x) = first_changed_touch_x(&event) {
            with_page(&p, |c, _| c.touch_start(x));
        }
    })?;
    let p = page.clone();
    listen_passive(&track, "touchend", move |event: TouchEvent| {
        if let Some(x) = first_changed_touch_x(&event) {
            with_page(&p, |c, s| c.touch_end(x, s));
        }
    })?;

    let p = page.clone();
    let t = track.clone();
    listen(&track, "mousedown", move |event: MouseEvent| {
        let x = f64::from(event.page_x() - t.offset_left());
        with_page(&p, |c, s| c.mouse_down(x, s));
    })?;
    let p = page.clone();
    listen(&track, "mouseleave", move |_: MouseEvent| {
        with_page(&p, |c, s| c.mouse_leave(s));
    })?;
    let p = page.clone();
    let t = track.clone();
    listen(&track, "mouseup", move |event: MouseEvent| {
        let x = f64::from(event.page_x() - t.offset_left());
        with_page(&p, |c, s| c.mouse_up(x, s));
    })?;

    for (index, card) in cards.iter().enumerate() {
        let p = page.clone();
        let element = card.clone();
        listen(card, "mousemove", move |event: MouseEvent| {
            let rect = element.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            with_page(&p, |c, s| {
                c.card_hover(index, x, y, rect.width(), rect.height(), s);
            });
        })?;
        let p = page.clone();
        listen(card, "mouseleave", move |_: MouseEvent| {
            with_page(&p, |c, s| c.card_leave(index, s));
        })?;
    }
    Ok(())
}

/// Render one parallax frame. Returns `false` if the page was busy, in
/// which case the frame gate is still pending.
fn run_frame(page: &SharedPage, window: &Window) -> bool {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    with_page(page, |c, s| {
        let has_hero = s.anchors().hero.is_some();
        c.animation_frame(scroll_y, viewport, has_hero, s);
    })
    .is_some()
}

fn wire_scroll(page: &SharedPage, window: &Window) -> Result<(), JsValue> {
    // Holds the frame callback so a busy frame can re-request itself.
    let slot: Rc<OnceCell<js_sys::Function>> = Rc::new(OnceCell::new());
    let p = page.clone();
    let w = window.clone();
    let retry = slot.clone();
    let frame = Closure::wrap(Box::new(move |_timestamp: f64| {
        if run_frame(&p, &w) {
            return;
        }
        if let Some(again) = retry.get() {
            if w.request_animation_frame(again).is_err() {
                tracing::warn!("requestAnimationFrame rejected; parallax frame skipped");
            }
        }
    }) as Box<dyn FnMut(f64)>);
    let frame: js_sys::Function = frame.into_js_value().unchecked_into();
    let _ = slot.set(frame.clone());

    let p = page.clone();
    let w = window.clone();
    listen(window, "scroll", move |_: Event| {
        let schedule = with_page(&p, |c, _| c.scroll_requested()).unwrap_or(false);
        if schedule && w.request_animation_frame(&frame).is_err() {
            tracing::warn!("requestAnimationFrame rejected; parallax frame skipped");
        }
    })
}

fn wire_reveal(page: &SharedPage) -> Result<(), JsValue> {
    let (targets, options) = {
        let guard = page.borrow();
        (
            guard.surface.anchors().reveal_targets.clone(),
            guard.controller.reveal_options(),
        )
    };
    if targets.is_empty() {
        return Ok(());
    }

    let p = page.clone();
    let observed = targets.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = observed
                .iter()
                .position(|el| el.is_same_node(Some(target.as_ref())))
            else {
                continue;
            };
            let intersecting = entry.is_intersecting();
            let revealed = with_page(&p, |c, s| c.reveal_observed(index, intersecting, s));
            if revealed == Some(true) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

fn wire_anchor_links(document: &Document) -> Result<(), JsValue> {
    for link in document.select_all(IN_PAGE_LINK_SELECTOR) {
        let doc = document.clone();
        let href_source = link.clone();
        listen(&link, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(selector) = scroll_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

fn booted_page() -> Option<SharedPage> {
    CURRENT.with(|slot| slot.borrow().clone())
}

/// Script-facing handle to the booted landing page.
#[wasm_bindgen]
pub struct SpiceBerg {
    page: SharedPage,
}

#[wasm_bindgen]
impl SpiceBerg {
    /// Handle to the page booted by `start`, if boot has completed.
    pub fn current() -> Option<SpiceBerg> {
        booted_page().map(|page| Self { page })
    }

    pub fn next(&self) {
        with_page(&self.page, |c, s| c.next(s));
    }

    pub fn prev(&self) {
        with_page(&self.page, |c, s| c.prev(s));
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: i32) {
        with_page(&self.page, |c, s| c.go_to_slide(index as isize, s));
    }

    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> u32 {
        self.page.borrow().controller.active_index() as u32
    }

    #[wasm_bindgen(js_name = activeTheme)]
    pub fn active_theme(&self) -> String {
        self.page.borrow().controller.active_theme().to_owned()
    }

    /// Apply a theme by key; returns `false` for unknown keys.
    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&self, key: &str) -> bool {
        with_page(&self.page, |c, s| c.apply_theme(key, s)).unwrap_or(false)
    }
}
