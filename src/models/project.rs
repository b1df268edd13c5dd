use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    /// CSS modifier and wire token.
    pub fn token(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

impl Project {
    /// Lowercased haystack used by free-text search:
    /// title, description, tags and category, space-joined in that order.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.tags.join(" "),
            self.category
        )
        .to_lowercase()
    }

    /// True when the already-normalised query is a substring of `search_text`.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().contains(needle)
    }

    /// Year only counts when set to something non-zero.
    pub fn display_year(&self) -> Option<i32> {
        self.year.filter(|y| *y != 0)
    }

    pub fn github_url(&self) -> Option<&str> {
        self.github.as_deref().filter(|s| !s.is_empty())
    }

    pub fn demo_url(&self) -> Option<&str> {
        self.demo.as_deref().filter(|s| !s.is_empty())
    }
}
