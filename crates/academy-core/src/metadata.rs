//! Display metadata derived from a module's difficulty and category.
//!
//! Both derivers are total: every input string produces a value, and
//! unrecognized inputs map to an explicit neutral fallback.

use serde::Serialize;

use crate::types::{Category, Difficulty, Tint, Tone};

/// Badge and explanation for a difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyInfo {
    pub difficulty: Difficulty,
    /// Short badge text
    pub label: &'static str,
    pub tone: Tone,
    /// One-sentence explanation shown next to the badge
    pub description: &'static str,
}

/// Derive the difficulty badge for a raw dataset value
pub fn difficulty_info(raw: &str) -> DifficultyInfo {
    let difficulty = Difficulty::parse(raw);
    let (label, tone, description) = match difficulty {
        Difficulty::Beginner => (
            "初级",
            Tone::Green,
            "适合零基础的新手，无需任何前置知识即可开始学习。",
        ),
        Difficulty::Intermediate => (
            "中级",
            Tone::Yellow,
            "需要一定的基础知识，建议先完成入门模块再学习。",
        ),
        Difficulty::Advanced => (
            "高级",
            Tone::Red,
            "面向有经验的用户，涉及较深的技术细节与实践操作。",
        ),
        Difficulty::Unknown => ("未知", Tone::Neutral, "难度未指定"),
    };

    DifficultyInfo {
        difficulty,
        label,
        tone,
        description,
    }
}

/// Icon slot for a category. The renderer resolves slots to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Link,
    Wrench,
    Gift,
    Pickaxe,
    Exchange,
    Image,
    Code,
    Users,
    Palette,
    Megaphone,
    QuestionMark,
}

/// Icon, label and colors for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub icon: CategoryIcon,
    pub text_tone: Tone,
    pub background_tone: Tint,
}

/// Derive the category icon and colors for a raw dataset value
pub fn category_info(raw: &str) -> CategoryInfo {
    let category = Category::parse(raw);
    let (label, icon, tone) = match category {
        Category::Blockchain => ("区块链", CategoryIcon::Link, Tone::Blue),
        Category::Tools => ("工具", CategoryIcon::Wrench, Tone::Teal),
        Category::Airdrops => ("空投", CategoryIcon::Gift, Tone::Pink),
        Category::Mining => ("挖矿", CategoryIcon::Pickaxe, Tone::Orange),
        Category::Exchange => ("交易所", CategoryIcon::Exchange, Tone::Green),
        Category::Nft => ("NFT", CategoryIcon::Image, Tone::Purple),
        Category::Development => ("开发", CategoryIcon::Code, Tone::Indigo),
        Category::Community => ("社区", CategoryIcon::Users, Tone::Yellow),
        Category::Design => ("设计", CategoryIcon::Palette, Tone::Red),
        Category::Marketing => ("营销", CategoryIcon::Megaphone, Tone::Cyan),
        Category::Unknown => ("其他", CategoryIcon::QuestionMark, Tone::Neutral),
    };

    CategoryInfo {
        category,
        label,
        icon,
        text_tone: tone,
        background_tone: Tint(tone),
    }
}
