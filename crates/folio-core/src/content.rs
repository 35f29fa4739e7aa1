//! Localized portfolio content: home sections, research papers, blog posts
//! and the UI labels around them.
//!
//! The tables ship inside the binary (`data/content.json`) and can be
//! replaced with a file of the same shape.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::locale::{Locale, Localized};
use crate::navigation::Section;

const EMBEDDED: &str = include_str!("../data/content.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContent {
    pub id: Section,
    pub title: Localized<String>,
    /// May contain `**bold**` runs and an `{age}` slot.
    pub lines: Localized<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub id: String,
    pub title: Localized<String>,
    #[serde(rename = "abstract")]
    pub summary: Localized<String>,
    pub introduction: Localized<String>,
    pub methodology: Localized<String>,
    pub findings: Localized<String>,
    pub conclusion: Localized<String>,
    pub references: Localized<Vec<String>>,
    pub keywords: Localized<Vec<String>>,
    pub date: NaiveDate,
    pub author: Localized<String>,
    pub category: Localized<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: Localized<String>,
    pub date: NaiveDate,
    pub body: Localized<String>,
}

/// Headings of the research paper viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperLabels {
    #[serde(rename = "abstract")]
    pub summary: Localized<String>,
    pub introduction: Localized<String>,
    pub methodology: Localized<String>,
    pub findings: Localized<String>,
    pub conclusion: Localized<String>,
    pub references: Localized<String>,
    pub keywords: Localized<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiLabels {
    /// Navigation bar labels keyed by item id.
    pub nav: BTreeMap<String, Localized<String>>,
    pub research_title: Localized<String>,
    pub blog_title: Localized<String>,
    pub blog_empty: Localized<String>,
    pub back_home: Localized<String>,
    pub chat_title: Localized<String>,
    pub chat_placeholder: Localized<String>,
    pub chat_thinking: Localized<String>,
    pub paper: PaperLabels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub labels: UiLabels,
    pub sections: Vec<SectionContent>,
    #[serde(default)]
    pub research: Vec<ResearchPaper>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
}

impl PortfolioContent {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let content: PortfolioContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading content tables");

        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Content from `path` when given, the embedded tables otherwise.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path).await,
            None => Self::embedded(),
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    /// Lines of a section with the age slot filled in.
    pub fn section_lines(&self, section: &SectionContent, locale: Locale, age: u32) -> Vec<String> {
        let age = locale.localize_digits(&age.to_string());
        section
            .lines
            .get(locale)
            .iter()
            .map(|line| line.replace("{age}", &age))
            .collect()
    }

    /// Falls back to the id itself for items without a label.
    pub fn nav_label<'a>(&'a self, id: &'a str, locale: Locale) -> &'a str {
        self.labels
            .nav
            .get(id)
            .map(|label| label.get(locale).as_str())
            .unwrap_or(id)
    }

    fn validate(&self) -> Result<()> {
        for section in Section::all() {
            if self.section(section.as_str()).is_none() {
                return Err(anyhow!("content has no '{}' section", section.as_str()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_content_covers_every_section() {
        let content = PortfolioContent::embedded().unwrap();
        for section in Section::all() {
            assert!(content.section(section.as_str()).is_some(), "{:?}", section);
        }
        assert_eq!(content.research.len(), 1);
        assert!(content.blog.is_empty());
    }

    #[test]
    fn test_every_nav_item_has_a_label() {
        let content = PortfolioContent::embedded().unwrap();
        for item in crate::navigation::NAV_ITEMS {
            assert!(content.labels.nav.contains_key(item.id), "{}", item.id);
        }
        assert_eq!(content.nav_label("research", Locale::Bn), "গবেষণা");
        assert_eq!(content.nav_label("nowhere", Locale::En), "nowhere");
    }

    #[test]
    fn test_family_lines_show_localized_age() {
        let content = PortfolioContent::embedded().unwrap();
        let family = content.section("family").unwrap();

        let en = content.section_lines(family, Locale::En, 17);
        let bn = content.section_lines(family, Locale::Bn, 17);

        assert!(en[0].contains("17 years"));
        assert!(bn[0].contains("১৭ বছর"));
        assert!(en.iter().all(|line| !line.contains("{age}")));
    }

    #[test]
    fn test_research_paper_fields() {
        let content = PortfolioContent::embedded().unwrap();
        let paper = &content.research[0];

        assert_eq!(paper.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(paper.doi.as_deref(), Some("10.1000/nature2024.origins"));
        assert_eq!(paper.keywords.en.len(), paper.keywords.bn.len());
        assert!(paper.findings.en.contains("**"));
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        value["sections"].as_array_mut().unwrap().pop();

        let err = PortfolioContent::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("footer"));
    }

    #[tokio::test]
    async fn test_load_from_path_replaces_embedded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");

        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        value["research"] = serde_json::json!([]);
        tokio::fs::write(&path, value.to_string()).await.unwrap();

        let content = PortfolioContent::load(Some(&path)).await.unwrap();
        assert!(content.research.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = PortfolioContent::load(Some(&dir.path().join("absent.json"))).await;
        assert!(result.is_err());
    }
}
