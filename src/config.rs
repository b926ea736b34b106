#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn get_subscribe_url() -> String {
    format!("{}/brevo-subscribe.php", get_backend_url())
}

/// Launch instant the countdown ticks toward, local time.
pub const LAUNCH_DATE: &str = "2026-01-15T00:00:00";
