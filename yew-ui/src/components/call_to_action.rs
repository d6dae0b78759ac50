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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Call-to-action panel: promotional banner, reservation countdown, and a
//! `tel:` link that reports the click to the page's optional tracking hooks.
//!
//! The dispatch fires on pointer-down so it happens before the `tel:`
//! navigation the click may trigger; navigation itself is the anchor's
//! native behavior and is never intercepted.

use gloo_timers::callback::Timeout;
use pixel_tracker::{
    classify, locale_timestamp, DispatchOutcome, DispatchPolicy, TrackingContext, TrackingSinks,
};
use web_sys::PointerEvent;
use yew::prelude::*;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::status_chip::StatusChip;
use crate::constants::{call_destination, CHIP_HIDE_ERROR_MS, CHIP_HIDE_SENT_MS};

/// What dispatches from this component report as their source.
const DISPATCH_SOURCE: &str = "call_to_action";

#[derive(Properties, PartialEq, Clone)]
pub struct CallToActionProps {
    /// The host page has produced its final message; the countdown only
    /// decrements while this is true.
    pub message_ready: bool,
    /// Select the alternate destination number and label.
    #[prop_or_default]
    pub switch_number: bool,
    /// Render the verification chip. The dispatch itself always happens.
    #[prop_or(true)]
    pub show_status_indicator: bool,
    /// Surface a dispatch that found no hook as an error instead of masking
    /// it as sent.
    #[prop_or_default]
    pub report_missing_as_error: bool,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let outcome = use_state(DispatchOutcome::default);
    let fired_at = use_state(|| None::<String>);
    let chip_visible = use_state(|| false);
    // Pending auto-hide timer. Storing a new timeout drops, and thereby
    // cancels, the previous one, so the newest dispatch owns the full
    // visibility window. Dropped on unmount as well.
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    // Hooks are resolved once per mount, not probed on every click.
    let sinks = use_state(TrackingSinks::from_window);

    let (href, label) = call_destination(props.switch_number);

    let on_pointer_down = {
        let outcome = outcome.clone();
        let fired_at = fired_at.clone();
        let chip_visible = chip_visible.clone();
        let hide_timer = hide_timer.clone();
        let sinks = sinks.clone();
        let policy = DispatchPolicy {
            report_missing_as_error: props.report_missing_as_error,
        };
        let switched = props.switch_number;
        Callback::from(move |_: PointerEvent| {
            let ctx = TrackingContext {
                source: DISPATCH_SOURCE,
                label: label.to_string(),
                destination: href.to_string(),
                switched,
            };

            let result = match sinks.dispatch(&ctx) {
                Ok(report) => {
                    if report.any_fired() {
                        log::info!("call_click dispatched: {report:?}");
                    } else if policy.report_missing_as_error {
                        log::warn!("call_click found no tracking hook: {ctx:?}");
                    } else {
                        log::info!("call_click found no tracking hook, console record only: {ctx:?}");
                    }
                    classify(&report, policy)
                }
                Err(err) => {
                    log::error!("call_click dispatch failed: {err:?}");
                    DispatchOutcome::Error
                }
            };

            outcome.set(result);
            fired_at.set(Some(locale_timestamp()));
            chip_visible.set(true);

            let delay_ms = match result {
                DispatchOutcome::Error => CHIP_HIDE_ERROR_MS,
                _ => CHIP_HIDE_SENT_MS,
            };
            let chip_visible = chip_visible.clone();
            *hide_timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                chip_visible.set(false);
            }));
        })
    };

    let button_class = match *outcome {
        DispatchOutcome::Sent => "call-button call-button-ring-sent",
        DispatchOutcome::Error => "call-button call-button-ring-error",
        DispatchOutcome::Idle => "call-button",
    };

    html! {
        <div class="call-to-action fade-in-up">
            <div class="cta-banner">
                <p class="cta-banner-text">
                    { "Tap on the button below to make a quick call & that's it. \
                       You'll be qualified on the call by a licensed agent in minutes 👇" }
                </p>
            </div>
            {
                if props.show_status_indicator {
                    html! {
                        <StatusChip
                            outcome={*outcome}
                            fired_at={(*fired_at).clone()}
                            visible={*chip_visible}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <a class={button_class} href={href} onpointerdown={on_pointer_down}>
                { label }
            </a>
            <p class="cta-urgency">
                { "Due to high call volume, your official agent is waiting for only " }
                <span class="cta-urgency-minutes">{ "3 minutes" }</span>
                { ", then your spot will not be reserved." }
            </p>
            <CountdownTimer armed={props.message_ready} outcome={*outcome} />
        </div>
    }
}
