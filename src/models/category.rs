use serde::{Deserialize, Serialize};

/// Token of the catch-all filter control.
pub const ALL: &str = "all";

/// A project category as offered by the filter controls.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub token: String,
    pub label: String,
}

impl Category {
    pub fn all() -> Self {
        Category {
            token: ALL.to_string(),
            label: "All".to_string(),
        }
    }

    /// Tokens end up in class names and data attributes unescaped,
    /// so they must already be slugs.
    pub fn validate(&self) -> Result<(), String> {
        if self.token.is_empty() {
            return Err(format!("category '{}' has an empty token", self.label));
        }
        if self.token == ALL {
            return Err("category token 'all' is reserved".to_string());
        }
        if slug::slugify(&self.token) != self.token {
            return Err(format!(
                "category token '{}' is not a slug (expected '{}')",
                self.token,
                slug::slugify(&self.token)
            ));
        }
        Ok(())
    }
}
