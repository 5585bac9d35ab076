use super::{blank_fields, compact_rows, Draft};
use chrono::{DateTime, Utc};
use scraper::Html;
use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A blog post. `content` is HTML and rendered as-is on the detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub seo: Seo,
    #[serde(default)]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Text content of the HTML body with whitespace collapsed
    pub fn plain_text(&self) -> String {
        let fragment = Html::parse_fragment(&self.content);
        fragment
            .root_element()
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Estimated reading time, never less than one minute
    pub fn reading_time_minutes(&self) -> usize {
        let words = self.plain_text().split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// The stored excerpt, or the first `max_chars` characters of the body
    pub fn derived_excerpt(&self, max_chars: usize) -> String {
        if !self.excerpt.trim().is_empty() {
            return self.excerpt.trim().to_string();
        }

        let text = self.plain_text();
        if text.chars().count() <= max_chars {
            return text;
        }
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }

    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }

    /// Copy with blank tags and keywords removed
    pub fn compacted(&self) -> Self {
        let mut post = self.clone();
        post.tags = compact_rows(&self.tags);
        post.seo.keywords = compact_rows(&self.seo.keywords);
        post
    }
}

impl Draft for BlogPost {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("title", self.title.as_str()),
            ("content", self.content.as_str()),
            ("category", self.category.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFilters {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
