//! Semantic style builders.

use academy_core::{Tint, Tone};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn section_heading() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::TONE_YELLOW)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn callout() -> Style {
    Style::default().fg(palette::CALLOUT)
}

pub fn check() -> Style {
    Style::default()
        .fg(palette::CHECK)
        .add_modifier(Modifier::BOLD)
}

/// Black on cyan, for the highlighted row of a list
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Tones ---

/// Terminal color for a semantic tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => palette::TONE_GREEN,
        Tone::Blue => palette::TONE_BLUE,
        Tone::Purple => palette::TONE_PURPLE,
        Tone::Orange => palette::TONE_ORANGE,
        Tone::Yellow => palette::TONE_YELLOW,
        Tone::Pink => palette::TONE_PINK,
        Tone::Indigo => palette::TONE_INDIGO,
        Tone::Teal => palette::TONE_TEAL,
        Tone::Red => palette::TONE_RED,
        Tone::Cyan => palette::TONE_CYAN,
        Tone::Neutral => palette::TONE_NEUTRAL,
    }
}

/// Background color for a tint
pub fn tint_color(tint: Tint) -> Color {
    match tint.0 {
        Tone::Green => palette::TINT_GREEN,
        Tone::Blue => palette::TINT_BLUE,
        Tone::Purple => palette::TINT_PURPLE,
        Tone::Orange => palette::TINT_ORANGE,
        Tone::Yellow => palette::TINT_YELLOW,
        Tone::Pink => palette::TINT_PINK,
        Tone::Indigo => palette::TINT_INDIGO,
        Tone::Teal => palette::TINT_TEAL,
        Tone::Red => palette::TINT_RED,
        Tone::Cyan => palette::TINT_CYAN,
        Tone::Neutral => palette::TINT_NEUTRAL,
    }
}

/// Filled badge: dark text on the tone color
pub fn tone_badge(tone: Tone) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(tone_color(tone))
        .add_modifier(Modifier::BOLD)
}

/// Category chip: toned text on a tinted background
pub fn tone_chip(text: Tone, background: Tint) -> Style {
    Style::default()
        .fg(tone_color(text))
        .bg(tint_color(background))
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_a_color() {
        let tones = [
            Tone::Green,
            Tone::Blue,
            Tone::Purple,
            Tone::Orange,
            Tone::Yellow,
            Tone::Pink,
            Tone::Indigo,
            Tone::Teal,
            Tone::Red,
            Tone::Cyan,
            Tone::Neutral,
        ];
        for tone in tones {
            assert_ne!(tone_color(tone), Color::Reset, "{tone:?}");
        }
    }

    #[test]
    fn test_difficulty_tones_are_distinct() {
        assert_ne!(tone_color(Tone::Green), tone_color(Tone::Yellow));
        assert_ne!(tone_color(Tone::Yellow), tone_color(Tone::Red));
        assert_ne!(tone_color(Tone::Red), tone_color(Tone::Neutral));
    }

    #[test]
    fn test_badge_uses_tone_as_background() {
        let style = tone_badge(Tone::Green);
        assert_eq!(style.bg, Some(palette::TONE_GREEN));
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_chip_pairs_tone_with_its_tint() {
        let style = tone_chip(Tone::Blue, Tint(Tone::Blue));
        assert_eq!(style.fg, Some(palette::TONE_BLUE));
        assert_eq!(style.bg, Some(palette::TINT_BLUE));
    }

    #[test]
    fn test_tint_differs_from_tone_color() {
        for tone in [Tone::Green, Tone::Blue, Tone::Teal, Tone::Neutral] {
            assert_ne!(tint_color(Tint(tone)), tone_color(tone), "{tone:?}");
        }
    }

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }
}
