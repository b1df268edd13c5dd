use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    /// ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    pub image: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Certificate {
    pub fn display_date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}
