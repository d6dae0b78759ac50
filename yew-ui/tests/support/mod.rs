// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for callfunnel-ui component tests.
//
// Provides mount/cleanup helpers and window-global hook injection so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Fire a native `pointerdown` event on `el`.
pub fn pointer_down(el: &web_sys::Element) {
    let event = web_sys::PointerEvent::new("pointerdown").unwrap();
    el.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Window hook injection
// ---------------------------------------------------------------------------

/// Install a recording hook at `window.<name>`. Returns the array that
/// collects the first argument of every invocation.
pub fn inject_recording_hook(name: &str) -> Array {
    let calls = Array::new();
    let calls_handle = calls.clone();
    let hook = Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(
        move |first: JsValue, _second: JsValue, _third: JsValue| {
            calls_handle.push(&first);
        },
    );
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &name.into(), hook.as_ref()).unwrap();
    hook.forget();
    calls
}

/// Install a hook at `window.<name>` that always throws.
pub fn inject_throwing_hook(name: &str) {
    let hook = Function::new_no_args("throw new Error('hook exploded');");
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &name.into(), &hook).unwrap();
}

/// Install a fresh `dataLayer`-style queue array at `window.<name>` and
/// return it.
pub fn inject_queue(name: &str) -> Array {
    let queue = Array::new();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &name.into(), &queue).unwrap();
    queue
}

/// Remove a previously injected hook so tests don't leak into each other.
pub fn remove_hook(name: &str) {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &name.into());
}

/// Remove all four hooks the dispatcher knows about.
pub fn remove_all_hooks() {
    for name in [
        pixel_tracker::PRIMARY_HOOK,
        pixel_tracker::SECONDARY_HOOK,
        pixel_tracker::ANALYTICS_HOOK,
        pixel_tracker::QUEUE_HOOK,
    ] {
        remove_hook(name);
    }
}
