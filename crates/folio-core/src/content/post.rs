//! Post records

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FolioError, FolioResult};

/// Characters of body text used for an excerpt built from front matter
const FRONT_MATTER_EXCERPT: usize = 200;

/// One blog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    /// ISO-8601 date, e.g. `2025-01-15`
    pub date: String,
    #[serde(default)]
    pub excerpt: String,
    /// Accepts either a JSON array or a comma-joined string
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Markdown-like full text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Shape of the posts endpoint body
#[derive(Debug, Deserialize)]
pub struct PostsDocument {
    pub posts: Vec<PostRecord>,
}

impl PostRecord {
    /// Date in long en-US form (`January 15, 2025`).
    ///
    /// Anything after the calendar date (time, zone) is ignored; dates that
    /// do not parse are returned as given.
    pub fn formatted_date(&self) -> String {
        self.date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    /// Source for the detail view: the full content, or the excerpt when
    /// the record has none
    pub fn detail_source(&self) -> &str {
        self.content.as_deref().unwrap_or(&self.excerpt)
    }

    /// Build a record from a markdown file with a `---` front-matter block.
    ///
    /// ```text
    /// ---
    /// title: "Hello"
    /// date: 2025-08-31
    /// tags: research, notes
    /// ---
    /// Body text...
    /// ```
    pub fn from_front_matter(source: &str) -> FolioResult<Self> {
        let mut parts = source.splitn(3, "---");
        let preamble = parts.next().unwrap_or_default();
        let (Some(front), Some(body)) = (parts.next(), parts.next()) else {
            return Err(FolioError::FrontMatter("missing `---` delimiters".to_string()));
        };
        if !preamble.trim().is_empty() {
            return Err(FolioError::FrontMatter("text before front matter".to_string()));
        }

        let mut title = None;
        let mut date = None;
        let mut tags = Vec::new();
        for line in front.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim().replace('"', "");
            match key.trim() {
                "title" => title = Some(value),
                "date" => date = Some(value),
                "tags" => tags = split_tags(value.trim_start_matches('[').trim_end_matches(']')),
                _ => {}
            }
        }

        let title = title.ok_or_else(|| FolioError::FrontMatter("no title".to_string()))?;
        let date = date.ok_or_else(|| FolioError::FrontMatter("no date".to_string()))?;
        let body = body.trim().to_string();
        let excerpt = format!(
            "{}...",
            body.chars().take(FRONT_MATTER_EXCERPT).collect::<String>()
        );

        Ok(Self {
            title,
            date,
            excerpt,
            tags,
            content: Some(body),
        })
    }
}

/// Split a comma-joined tag string, dropping blanks
pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(list)) => list
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Tags::Joined(joined)) => split_tags(&joined),
        None => Vec::new(),
    })
}
