use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    pub fn token(&self) -> &'static str {
        match self {
            SkillLevel::Expert => "expert",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Intermediate => "intermediate",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
}

impl Skill {
    /// Grouping key; skills without one land in "other".
    pub fn group(&self) -> &str {
        if self.category.trim().is_empty() {
            "other"
        } else {
            &self.category
        }
    }
}
