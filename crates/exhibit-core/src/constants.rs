// Interaction tuning and asset table shared by the web frontend.

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths at or below this are mobile

// Pointer tracking (percent units)
pub const CENTER_PERCENT: f32 = 50.0;
pub const TOUCH_RESET_DELAY_MS: u32 = 100; // touch end -> snap back to center
pub const PRIMARY_BUTTON: i16 = 0; // MouseEvent.button for the main button

// Background parallax
pub const PARALLAX_FACTOR: f32 = -0.02; // % of translate per % of displacement
pub const BACKGROUND_SCALE: f32 = 1.05; // hides edges revealed by the translate

// Press darkening
pub const PRESS_OVERLAY_OPACITY: f32 = 0.3;

// Spotlight falloff radius (% of the gradient box)
pub const SPOTLIGHT_FALLOFF_DESKTOP: u32 = 50;
pub const SPOTLIGHT_FALLOFF_MOBILE: u32 = 40;

// Glow diameters in rem; anchors are offset by half the diameter
pub const GLOW_VIOLET_REM: f32 = 10.0;
pub const GLOW_PINK_REM: f32 = 6.0;
pub const GLOW_BLENDED_REM: f32 = 8.0;
pub const GLOW_PINK_DELAY_SEC: f32 = 0.5;

pub const GLOW_VIOLET_GRADIENT: &str =
    "radial-gradient(circle, rgba(159,122,234,0.7) 0%, rgba(159,122,234,0) 70%)";
pub const GLOW_PINK_GRADIENT: &str =
    "radial-gradient(circle, rgba(236,72,153,0.7) 0%, rgba(236,72,153,0) 70%)";
pub const GLOW_BLENDED_GRADIENT: &str = "radial-gradient(circle, rgba(159,122,234,0.8) 0%, rgba(236,72,153,0.4) 50%, rgba(159,122,234,0) 70%)";

// Assets
pub const EVENT_TITLE: &str = "iii Exhibition | Beginning 2025";

pub const DESKTOP_BACKGROUND_SRC: &str = "/images/japanese-gradient-background.png";
pub const MOBILE_BACKGROUND_SRC: &str = "/images/mobile-background.png";

pub const INFO_SRC: &str = "/images/info.png";
pub const INFO_ALT: &str =
    "iii Exhibition | Beginning 2025 - 7.4 (Fri) ~ 7.7 (Mon) - 11:00 ~ 19:00";

pub const EVENT_MARK_SRC: &str = "/images/iii.svg";
pub const EVENT_MARK_ALT: &str = "iii exhibition Beginning 2025";
pub const EVENT_MARK_SIZE: (u32, u32) = (140, 60);

pub const VENUE_SRC: &str = "/images/venue-ok.svg";
pub const VENUE_ALT: &str = "Exhibition venue information";
pub const VENUE_SIZE: (u32, u32) = (140, 200);

pub const DATES_SRC: &str = "/images/dates-ok.svg";
pub const DATES_ALT: &str = "Exhibition date information";
pub const DATES_SIZE: (u32, u32) = (140, 200);

// Institution wordmark, rendered as inline SVG text
pub const WORDMARK_TEXT: &str = "東京大学制作展";
pub const WORDMARK_VIEWBOX: (f32, f32) = (217.35, 30.0);
pub const WORDMARK_BASELINE: f32 = 24.95;
pub const WORDMARK_FONT_SIZE_PX: f32 = 28.35;
pub const WORDMARK_FONT_FAMILY: &str =
    "ToppanBunkyuMidashiMinchoStdN-ExtraBold-83pv-RKSJ-H, 'Toppan Bunkyu Midashi Mincho'";
