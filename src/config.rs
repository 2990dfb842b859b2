use log::Level;

/// WhatsApp number (country code, no `+`) that receives contact form messages.
pub const CHAT_NUMBER: &str = "5511999999999";
pub const CHAT_BASE_URL: &str = "https://wa.me";

// Navbar hysteresis band, in pixels of vertical scroll.
pub const NAV_COMPACT_ENTER: f64 = 60.0;
pub const NAV_COMPACT_EXIT: f64 = 40.0;

/// Simulated round trip before the contact form shows its success panel.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Fraction of the viewport height trimmed from top and bottom before a
/// reveal section counts as visible.
pub const REVEAL_VIEWPORT_INSET: f64 = 0.10;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
