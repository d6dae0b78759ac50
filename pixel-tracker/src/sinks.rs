/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Browser side of the dispatcher: resolve the optional page hooks once,
//! then fan a dispatch out to whichever of them exist.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::{
    DispatchReport, TrackingContext, ANALYTICS_HOOK, CALL_CLICK_EVENT, PRIMARY_HOOK, QUEUE_HOOK,
    RAW_CALL_EVENT, SECONDARY_HOOK,
};

/// The four optional page-level reporting hooks, resolved once.
///
/// Every slot may be absent; a dispatch simply skips empty slots. Fields are
/// public so a host can hand the dispatcher its own sinks instead of having
/// them read off `window`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackingSinks {
    /// `window.raTag`. Its calling convention is not under our control, so
    /// both known forms are tried on dispatch.
    pub primary: Option<Function>,
    /// `window.nbpix`.
    pub secondary: Option<Function>,
    /// `window.gtag`.
    pub analytics: Option<Function>,
    /// `window.dataLayer`, honored only when it resolves to a real array.
    pub queue: Option<Array>,
}

impl TrackingSinks {
    /// Resolve all four hooks from the global `window`. A missing `window`
    /// (e.g. a worker context) resolves to no sinks at all.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let window: JsValue = window.into();
        Self {
            primary: global_function(&window, PRIMARY_HOOK),
            secondary: global_function(&window, SECONDARY_HOOK),
            analytics: global_function(&window, ANALYTICS_HOOK),
            queue: global_array(&window, QUEUE_HOOK),
        }
    }

    /// True when no hook resolved at all.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.secondary.is_none()
            && self.analytics.is_none()
            && self.queue.is_none()
    }

    /// One dispatch: attempt every resolved hook in order. A hook that
    /// throws is skipped without affecting the hooks after it. The `Err` arm
    /// covers only the shared payload construction; per-hook failures never
    /// surface here.
    pub fn dispatch(&self, ctx: &TrackingContext) -> Result<DispatchReport, JsValue> {
        let payload = serde_wasm_bindgen::to_value(ctx)?;
        let mut report = DispatchReport::default();

        if let Some(primary) = &self.primary {
            let event: JsValue = CALL_CLICK_EVENT.into();
            let three_arg = primary
                .call3(&JsValue::NULL, &"event".into(), &event, &payload)
                .is_ok();
            let two_arg = primary.call2(&JsValue::NULL, &event, &payload).is_ok();
            report.primary_fired = three_arg || two_arg;
        }

        if let Some(secondary) = &self.secondary {
            report.secondary_fired = secondary
                .call3(
                    &JsValue::NULL,
                    &"event".into(),
                    &RAW_CALL_EVENT.into(),
                    &payload,
                )
                .is_ok();
        }

        if let Some(analytics) = &self.analytics {
            report.analytics_fired = analytics
                .call3(
                    &JsValue::NULL,
                    &"event".into(),
                    &CALL_CLICK_EVENT.into(),
                    &payload,
                )
                .is_ok();
        }

        if let Some(queue) = &self.queue {
            let record = Object::new();
            Reflect::set(&record, &"event".into(), &CALL_CLICK_EVENT.into())?;
            if let Some(fields) = payload.dyn_ref::<Object>() {
                Object::assign(&record, fields);
            }
            queue.push(&record);
            report.queue_fired = true;
        }

        log::debug!("tracking dispatch attempted: {report:?}");
        Ok(report)
    }
}

fn global_function(window: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(window, &name.into())
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn global_array(window: &JsValue, name: &str) -> Option<Array> {
    Reflect::get(window, &name.into())
        .ok()
        .filter(Array::is_array)
        .map(JsCast::unchecked_into)
}

/// Wall-clock timestamp in a human-readable locale form, e.g. `"1:02:03 PM"`.
pub fn locale_timestamp() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}
