//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: single-width characters that work in all terminals
//! - `IconMode::NerdFonts`: Nerd Font glyphs (requires a Nerd Font)

use academy_app::config::IconMode;
use academy_core::CategoryIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a category icon slot
    pub fn category(&self, icon: CategoryIcon) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match icon {
                CategoryIcon::Link => "\u{f0c1}",         // nf-fa-link
                CategoryIcon::Wrench => "\u{f0ad}",       // nf-fa-wrench
                CategoryIcon::Gift => "\u{f06b}",         // nf-fa-gift
                CategoryIcon::Pickaxe => "\u{f08b7}",     // nf-md-pickaxe
                CategoryIcon::Exchange => "\u{f0ec}",     // nf-fa-exchange
                CategoryIcon::Image => "\u{f03e}",        // nf-fa-image
                CategoryIcon::Code => "\u{f121}",         // nf-fa-code
                CategoryIcon::Users => "\u{f0c0}",        // nf-fa-users
                CategoryIcon::Palette => "\u{f1fc}",      // nf-fa-paint_brush
                CategoryIcon::Megaphone => "\u{f0a1}",    // nf-fa-bullhorn
                CategoryIcon::QuestionMark => "\u{f128}", // nf-fa-question
            },
            IconMode::Unicode => match icon {
                CategoryIcon::Link => "\u{221e}",      // ∞
                CategoryIcon::Wrench => "\u{2699}",    // ⚙
                CategoryIcon::Gift => "\u{2727}",      // ✧
                CategoryIcon::Pickaxe => "\u{2692}",   // ⚒
                CategoryIcon::Exchange => "\u{21c4}",  // ⇄
                CategoryIcon::Image => "\u{25a3}",     // ▣
                CategoryIcon::Code => "\u{03bb}",      // λ
                CategoryIcon::Users => "\u{263a}",     // ☺
                CategoryIcon::Palette => "\u{270e}",   // ✎
                CategoryIcon::Megaphone => "\u{2736}", // ✶
                CategoryIcon::QuestionMark => "?",
            },
        }
    }

    // --- Navigation ---

    pub fn previous(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    pub fn next(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f061}", // nf-fa-arrow_right
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn home(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f015}", // nf-fa-home
            IconMode::Unicode => "\u{2302}",   // ⌂
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "/",
        }
    }

    // --- Content ---

    pub fn book(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f02d}", // nf-fa-book
            IconMode::Unicode => "\u{25a4}",   // ▤
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08e}", // nf-fa-external_link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn bullet(&self) -> &'static str {
        "\u{2022}" // •
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORY_ICONS: [CategoryIcon; 11] = [
        CategoryIcon::Link,
        CategoryIcon::Wrench,
        CategoryIcon::Gift,
        CategoryIcon::Pickaxe,
        CategoryIcon::Exchange,
        CategoryIcon::Image,
        CategoryIcon::Code,
        CategoryIcon::Users,
        CategoryIcon::Palette,
        CategoryIcon::Megaphone,
        CategoryIcon::QuestionMark,
    ];

    #[test]
    fn test_category_icons_are_non_empty() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            for icon in ALL_CATEGORY_ICONS {
                assert!(!icons.category(icon).is_empty(), "{mode} {icon:?}");
            }
        }
    }

    #[test]
    fn test_category_icons_are_distinct() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            let mut glyphs: Vec<&str> = ALL_CATEGORY_ICONS
                .iter()
                .map(|icon| icons.category(*icon))
                .collect();
            glyphs.sort_unstable();
            glyphs.dedup();
            assert_eq!(glyphs.len(), ALL_CATEGORY_ICONS.len(), "{mode}");
        }
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.previous(), nerd.previous());
        assert_ne!(unicode.home(), nerd.home());
        assert_ne!(unicode.check(), nerd.check());
    }

    #[test]
    fn test_navigation_arrows() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.previous(), "←");
        assert_eq!(icons.next(), "→");
    }

    #[test]
    fn test_icon_set_is_copy() {
        let icons = IconSet::new(IconMode::Unicode);
        let copy = icons;
        assert_eq!(icons.book(), copy.book());
    }
}
