use log::Level;

pub const STORE_NAME: &str = "Tecnophones";
pub const STORE_TOWN: &str = "Maciá";
pub const STORE_ADDRESS: &str = "Magnasco 105 | MACIA - VILLAGUAY / E. RÍOS";
pub const STORE_HOURS: &str = "Lunes a Sábado: 9:00 - 13:00 / 17:00 - 21:00";

// International format, digits only, as wa.me expects it.
pub const WHATSAPP_NUMBER: &str = "5493455000000";

pub const MAP_URL: &str = "https://www.google.com/maps/search/?api=1&query=Magnasco+105+Macia+Entre+Rios";
pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/";

/// Pixels of vertical scroll after which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
