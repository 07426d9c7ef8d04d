// Accessibility helpers

/// Critical CSS injected early: visible focus indicators and the screen
/// reader utility class used by the live region.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #3B6EF5;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the polite live region for screen readers.
///
/// Announcements go to the #form-status element: running-total changes,
/// validation outcomes, and submission results.
pub fn set_status(msg: &str) {
    crate::dom::set_text_by_id("form-status", msg);
}
