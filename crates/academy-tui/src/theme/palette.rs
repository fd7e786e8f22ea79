//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Tones used by difficulty badges and category chips ---
pub const TONE_GREEN: Color = Color::Green;
pub const TONE_BLUE: Color = Color::Blue;
pub const TONE_PURPLE: Color = Color::Magenta;
pub const TONE_ORANGE: Color = Color::Rgb(249, 115, 22);
pub const TONE_YELLOW: Color = Color::Yellow;
pub const TONE_PINK: Color = Color::LightMagenta;
pub const TONE_INDIGO: Color = Color::Rgb(129, 140, 248);
pub const TONE_TEAL: Color = Color::Rgb(20, 184, 166);
pub const TONE_RED: Color = Color::Red;
pub const TONE_CYAN: Color = Color::Cyan;
pub const TONE_NEUTRAL: Color = Color::Gray;

// --- Tints: dark washes behind category chips ---
pub const TINT_GREEN: Color = Color::Rgb(20, 53, 34);
pub const TINT_BLUE: Color = Color::Rgb(23, 37, 84);
pub const TINT_PURPLE: Color = Color::Rgb(59, 7, 100);
pub const TINT_ORANGE: Color = Color::Rgb(67, 20, 7);
pub const TINT_YELLOW: Color = Color::Rgb(66, 32, 6);
pub const TINT_PINK: Color = Color::Rgb(80, 7, 36);
pub const TINT_INDIGO: Color = Color::Rgb(30, 27, 75);
pub const TINT_TEAL: Color = Color::Rgb(4, 47, 46);
pub const TINT_RED: Color = Color::Rgb(69, 10, 10);
pub const TINT_CYAN: Color = Color::Rgb(8, 51, 68);
pub const TINT_NEUTRAL: Color = Color::Rgb(39, 39, 42);

// --- Content blocks ---
pub const CALLOUT: Color = Color::Yellow;
pub const LINK: Color = Color::LightBlue;
pub const CHECK: Color = Color::Green;
