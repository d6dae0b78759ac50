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

//! Transient verification chip for the last tracking dispatch.

use pixel_tracker::DispatchOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusChipProps {
    pub outcome: DispatchOutcome,
    /// Locale timestamp of the last dispatch, if any.
    #[prop_or_default]
    pub fired_at: Option<String>,
    /// The chip renders nothing while this is false.
    pub visible: bool,
}

/// Color-coded pill showing how the last dispatch went. The host toggles
/// `visible`; the chip itself owns no timers.
#[function_component(StatusChip)]
pub fn status_chip(props: &StatusChipProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let (class, style, text) = match props.outcome {
        DispatchOutcome::Sent => (
            "status-chip status-chip-sent",
            "background: #16a34a; color: #fff;",
            "Event sent",
        ),
        DispatchOutcome::Error => (
            "status-chip status-chip-error",
            "background: #dc2626; color: #fff;",
            "Event failed",
        ),
        DispatchOutcome::Idle => (
            "status-chip status-chip-idle",
            "background: #d1d5db; color: #1f2937;",
            "Waiting",
        ),
    };

    html! {
        <span class={class} style={style}>
            { text }
            {
                if let Some(fired_at) = &props.fired_at {
                    html! { <span class="status-chip-time">{ format!(" at {fired_at}") }</span> }
                } else {
                    html! {}
                }
            }
        </span>
    }
}
