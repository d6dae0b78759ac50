/// Seconds on the reservation countdown when the widget mounts.
pub const COUNTDOWN_START_SECS: u32 = 180;

/// Auto-hide delay for the status chip after a successful dispatch.
pub const CHIP_HIDE_SENT_MS: u32 = 3_500;
/// Auto-hide delay for the status chip after a failed dispatch.
pub const CHIP_HIDE_ERROR_MS: u32 = 4_500;

// Fixed destination pairs; `switch_number` picks between them.
pub const CALL_HREF_DEFAULT: &str = "tel:+18336638513";
pub const CALL_LABEL_DEFAULT: &str = "CALL (833)-366-8513";
pub const CALL_HREF_ALTERNATE: &str = "tel:+13236897861";
pub const CALL_LABEL_ALTERNATE: &str = "CALL (323)-689-7861";

/// Destination `(href, label)` for the call button.
pub fn call_destination(switch_number: bool) -> (&'static str, &'static str) {
    if switch_number {
        (CALL_HREF_ALTERNATE, CALL_LABEL_ALTERNATE)
    } else {
        (CALL_HREF_DEFAULT, CALL_LABEL_DEFAULT)
    }
}
