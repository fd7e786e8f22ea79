//! Core domain type definitions

use serde::{Deserialize, Serialize};

/// A single lesson record in the learning catalog.
///
/// Records are owned by the catalog and consumed read-only. `category` and
/// `difficulty` stay raw strings because the dataset may carry values this
/// crate does not recognize; use [`Difficulty::parse`] and [`Category::parse`]
/// (or the derivers in [`crate::metadata`]) to classify them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique key, e.g. `module-1`
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    /// Short summary shown under the title
    #[serde(default)]
    pub learning_content: String,
    /// Tags rendered under the summary, in dataset order
    #[serde(default)]
    pub search_keywords: Vec<String>,
    /// Position used for previous/next navigation
    pub module_number: u32,
    #[serde(default)]
    pub recommended_websites: Vec<RecommendedWebsite>,
}

impl Module {
    /// Case-insensitive match against id, title and search keywords
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.id.to_lowercase().contains(&query)
            || self.title.to_lowercase().contains(&query)
            || self
                .search_keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&query))
    }
}

/// External resource recommended by a module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecommendedWebsite {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl RecommendedWebsite {
    /// Host part of the URL for compact display (`None` if the URL is invalid)
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
    }
}

/// Module difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Missing or unrecognized value in the dataset
    Unknown,
}

impl Difficulty {
    /// Classify a raw dataset value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Unknown,
        }
    }
}

/// Module category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blockchain,
    Tools,
    Airdrops,
    Mining,
    Exchange,
    Nft,
    Development,
    Community,
    Design,
    Marketing,
    /// Missing or unrecognized value in the dataset
    Unknown,
}

impl Category {
    /// All recognized categories, in display order
    pub const KNOWN: [Category; 10] = [
        Category::Blockchain,
        Category::Tools,
        Category::Airdrops,
        Category::Mining,
        Category::Exchange,
        Category::Nft,
        Category::Development,
        Category::Community,
        Category::Design,
        Category::Marketing,
    ];

    /// Classify a raw dataset value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "blockchain" => Category::Blockchain,
            "tools" => Category::Tools,
            "airdrops" => Category::Airdrops,
            "mining" => Category::Mining,
            "exchange" => Category::Exchange,
            "nft" => Category::Nft,
            "development" => Category::Development,
            "community" => Category::Community,
            "design" => Category::Design,
            "marketing" => Category::Marketing,
            _ => Category::Unknown,
        }
    }
}

/// UI-agnostic color class.
///
/// The renderer decides what each tone looks like; the core only says which
/// tone a badge or icon should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Purple,
    Orange,
    Yellow,
    Pink,
    Indigo,
    Teal,
    Red,
    Cyan,
    Neutral,
}

/// A pale wash of a tone, drawn behind text in that tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tint(pub Tone);
