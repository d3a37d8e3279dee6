//! Browser tests, run with `wasm-pack test --headless --firefox reveal-leptos`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use reveal_engine::{Scheduler, VisibilityObserver};
use reveal_leptos::{DomObserver, LeptosScheduler, StagedTextReveal, VisibilityGate};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().and_then(|w| w.document()).expect("document")
}

#[wasm_bindgen_test]
fn text_renders_one_span_per_segment() {
    let _handle = leptos::mount::mount_to_body(|| {
        view! {
            <div id="text-host">
                <StagedTextReveal text="hi there" />
            </div>
        }
    });

    let spans = document()
        .query_selector_all("#text-host span > span")
        .expect("query");
    assert_eq!(spans.length(), 3);

    let host = document().get_element_by_id("text-host").expect("host");
    assert_eq!(host.text_content().as_deref(), Some("hi there"));

    let spaces = document()
        .query_selector_all("#text-host .reveal-space")
        .expect("query");
    assert_eq!(spaces.length(), 1);
}

#[wasm_bindgen_test]
fn gate_starts_hidden() {
    let _handle = leptos::mount::mount_to_body(|| {
        view! {
            <div id="gate-host">
                <VisibilityGate>
                    <p>"Bass is a feeling."</p>
                </VisibilityGate>
            </div>
        }
    });

    let gate = document()
        .query_selector("#gate-host > div")
        .expect("query")
        .expect("gate element");
    assert_eq!(gate.get_attribute("data-reveal").as_deref(), Some("hidden"));
    assert!(gate.get_attribute("style").unwrap_or_default().contains("opacity:0"));
}

#[wasm_bindgen_test]
fn dom_observer_subscribes_and_releases() {
    let target = document().create_element("div").expect("div");
    document().body().expect("body").append_child(&target).expect("append");

    let subscription = DomObserver::default().observe(&target, 0.5, Box::new(|_| {}));
    let mut subscription = subscription.expect("IntersectionObserver available");
    assert!(subscription.is_active());
    subscription.unsubscribe();
}

#[wasm_bindgen_test]
async fn scheduler_cancel_prevents_callback() {
    let fired = Rc::new(Cell::new(0));

    let kept = Rc::clone(&fired);
    let _kept = LeptosScheduler.after(Duration::from_millis(5), Box::new(move || kept.set(kept.get() + 1)));
    let dropped = Rc::clone(&fired);
    let mut handle = LeptosScheduler.after(Duration::from_millis(5), Box::new(move || dropped.set(dropped.get() + 10)));
    handle.cancel();

    sleep(Duration::from_millis(30)).await;

    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn visible_blocks_reveal_and_complete_once() {
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&completions);
    let _handle = leptos::mount::mount_to_body(move || {
        view! {
            <div id="live-host">
                <VisibilityGate threshold=0.0>
                    <p>"No filler, just energy."</p>
                </VisibilityGate>
                <StagedTextReveal
                    text=""
                    threshold=0.0
                    on_complete=Callback::new(move |_| {
                        counter.fetch_add(1, Ordering::SeqCst);
                    })
                />
            </div>
        }
    });

    sleep(Duration::from_millis(200)).await;

    let gate = document()
        .query_selector("#live-host > div")
        .expect("query")
        .expect("gate element");
    assert_eq!(gate.get_attribute("data-reveal").as_deref(), Some("revealed"));
    assert!(gate.get_attribute("style").unwrap_or_default().contains("opacity:1"));
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    // Late observer callbacks after release must not fire again.
    sleep(Duration::from_millis(100)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}

async fn sleep(duration: Duration) {
    let (tx, rx) = futures_channel();
    set_timeout(tx, duration);
    let _ = rx.await;
}

/// One-shot wake-up built on a JS promise.
fn futures_channel() -> (impl FnOnce() + 'static, wasm_bindgen_futures::JsFuture) {
    let mut resolve = None;
    let promise = js_sys::Promise::new(&mut |res, _rej| resolve = Some(res));
    let resolve = resolve.expect("promise executor runs synchronously");
    let wake = move || {
        let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
    };
    (wake, wasm_bindgen_futures::JsFuture::from(promise))
}
