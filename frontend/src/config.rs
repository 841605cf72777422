#[cfg(all(feature = "http-submit", debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(all(feature = "http-submit", not(debug_assertions)))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(feature = "http-submit")]
pub const CONTACT_PATH: &str = "/api/contact";

// Fixed header
pub const HEADER_HEIGHT: f64 = 80.0;
pub const HEADER_SCROLL_GAP: f64 = 20.0;
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

// Reveal-on-scroll observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_CLASS: &str = "animate-in";

// Contact form
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;
pub const COUNTER_WARNING_RATIO: f64 = 0.9;
pub const FIELD_HIGHLIGHT_MS: u32 = 2_000;
pub const SUCCESS_BANNER_MS: u32 = 8_000;
pub const ERROR_BANNER_MS: u32 = 6_000;
pub const BANNER_EXIT_MS: u32 = 500;
pub const FORM_GROUP_STAGGER_MS: u32 = 100;
pub const FORM_GROUP_BASE_DELAY_MS: u32 = 200;

// Simulated backend
pub const SIMULATED_DELAY_MS: u32 = 2_000;
pub const SIMULATED_FAILURE_RATE: f64 = 0.1;

// FAQ
pub const FAQ_SCROLL_DELAY_MS: u32 = 300;
pub const FAQ_PANEL_FADE_MS: u32 = 50;
