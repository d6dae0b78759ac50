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

//! Self-contained countdown component for the reservation timer.

use gloo_timers::callback::Interval;
use pixel_tracker::DispatchOutcome;
use yew::prelude::*;

use crate::constants::COUNTDOWN_START_SECS;

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownTimerProps {
    /// Decrement only while this is true.
    pub armed: bool,
    /// Seconds on the clock when the component mounts.
    #[prop_or(COUNTDOWN_START_SECS)]
    pub start_secs: u32,
    /// Last dispatch outcome; drives the text color.
    #[prop_or_default]
    pub outcome: DispatchOutcome,
}

/// Counts down once per whole second while armed, stops at zero, and keeps
/// displaying the final value. Owns at most one interval at a time; the
/// interval is cancelled whenever an input changes or the component unmounts.
#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let remaining = use_state(|| props.start_secs);

    {
        let remaining = remaining.clone();
        use_effect_with((props.armed, *remaining), move |(armed, secs)| {
            let interval = if *armed && *secs > 0 {
                let secs = *secs;
                let remaining = remaining.clone();
                Some(Interval::new(1000, move || {
                    remaining.set(secs.saturating_sub(1));
                }))
            } else {
                None
            };

            // Cleanup on unmount or when armed/remaining change
            move || {
                drop(interval);
            }
        });
    }

    let color = match props.outcome {
        DispatchOutcome::Sent => "#16a34a",
        DispatchOutcome::Error => "#dc2626",
        DispatchOutcome::Idle => "#ef4444",
    };

    html! {
        <p class="countdown-timer" style={format!("color: {color};")}>
            { format_remaining(*remaining) }
        </p>
    }
}

/// `"m:ss"`: unpadded minutes, zero-padded seconds.
pub fn format_remaining(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
