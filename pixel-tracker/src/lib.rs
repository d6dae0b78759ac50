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

//! Best-effort click tracking for the call funnel UI.
//!
//! A dispatch is one attempt to hand a user interaction to a small fixed set
//! of optional page-level hooks (`raTag`, `nbpix`, `gtag`, `dataLayer`).
//! Absence of a hook is normal, a throwing hook is skipped, and nothing is
//! ever retried; worst case is a missing analytics signal, which must never
//! get in the way of the call the user is about to place.
//!
//! The browser glue lives in [`TrackingSinks`]; the types and outcome
//! classification here are target-independent and natively testable.

use serde::Serialize;

mod sinks;
pub use sinks::{locale_timestamp, TrackingSinks};

/// Property name of the primary page hook (`window.raTag`).
pub const PRIMARY_HOOK: &str = "raTag";
/// Property name of the secondary page hook (`window.nbpix`).
pub const SECONDARY_HOOK: &str = "nbpix";
/// Property name of the generic analytics hook (`window.gtag`).
pub const ANALYTICS_HOOK: &str = "gtag";
/// Property name of the tag-manager event queue (`window.dataLayer`).
pub const QUEUE_HOOK: &str = "dataLayer";

/// Event name reported to the primary, analytics, and queue hooks.
pub const CALL_CLICK_EVENT: &str = "call_click";
/// Event name reported to the secondary hook.
pub const RAW_CALL_EVENT: &str = "raw_call";

/// Key/value set handed verbatim to every hook of a single dispatch.
///
/// Built fresh per interaction; nothing is carried over between dispatches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrackingContext {
    /// Identifier of the UI surface that produced the interaction.
    pub source: &'static str,
    /// Display label of the selected call destination.
    pub label: String,
    /// `tel:` URI of the selected call destination.
    pub destination: String,
    /// Whether the alternate destination was selected.
    pub switched: bool,
}

/// Which hooks a single dispatch managed to invoke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub primary_fired: bool,
    pub secondary_fired: bool,
    pub analytics_fired: bool,
    pub queue_fired: bool,
}

impl DispatchReport {
    /// True when at least one hook accepted the event.
    ///
    /// This determination depends only on the attempts themselves; how a
    /// none-fired dispatch is shown to the user is decided separately by
    /// [`classify`].
    pub fn any_fired(&self) -> bool {
        self.primary_fired || self.secondary_fired || self.analytics_fired || self.queue_fired
    }
}

/// Result classification of a dispatch as surfaced to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No dispatch has happened yet.
    #[default]
    Idle,
    Sent,
    Error,
}

/// How a dispatch that found no hook at all is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchPolicy {
    /// Surface the no-hook case as [`DispatchOutcome::Error`] instead of
    /// masking it as a success. Off by default to match the shipped widget.
    pub report_missing_as_error: bool,
}

/// Map a finished attempt to its displayed outcome under `policy`.
pub fn classify(report: &DispatchReport, policy: DispatchPolicy) -> DispatchOutcome {
    if report.any_fired() || !policy.report_missing_as_error {
        DispatchOutcome::Sent
    } else {
        DispatchOutcome::Error
    }
}
