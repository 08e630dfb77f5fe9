// DOM hooks and browser-side tuning for the web front end

// Page elements
pub const CANVAS_ELEMENT_ID: &str = "starfield";
pub const CONTEXT_2D: &str = "2d";

// localStorage key holding the persisted field
pub const STORAGE_KEY: &str = "starfield-state";

// Backing store resolution
pub const DEVICE_PIXEL_RATIO_MIN: f64 = 1.0;
pub const DEVICE_PIXEL_RATIO_MAX: f64 = 3.0; // caps fill cost on dense phone screens

// Keys whose browser default (page scrolling) is suppressed when handled
pub const SCROLL_KEYS: &[&str] = &["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", " "];

#[inline]
pub fn clamp_device_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(DEVICE_PIXEL_RATIO_MIN, DEVICE_PIXEL_RATIO_MAX)
    } else {
        DEVICE_PIXEL_RATIO_MIN
    }
}

/// Backing store pixels for a CSS length; never zero.
#[inline]
pub fn backing_px(css_px: f64, dpr: f64) -> u32 {
    if !css_px.is_finite() || css_px <= 0.0 {
        return 1;
    }
    ((css_px * clamp_device_pixel_ratio(dpr)).round() as u32).max(1)
}

#[inline]
pub fn suppresses_scroll(key: &str) -> bool {
    SCROLL_KEYS.contains(&key)
}
