use crate::models::category::Category;
use crate::models::certificate::Certificate;
use crate::models::project::Project;
use crate::models::skill::Skill;

pub mod memory;

pub use memory::MemoryStore;

/// Read-only access to the portfolio records.
/// Records are loaded once at startup and never mutated; every query
/// preserves the original insertion order and an empty input yields an
/// empty result, never an error.
pub trait Store: Send + Sync {
    // ── Records ─────────────────────────────────────────────────────
    fn projects(&self) -> &[Project];
    fn skills(&self) -> &[Skill];
    fn certificates(&self) -> &[Certificate];
    fn categories(&self) -> &[Category];

    // ── Projects ────────────────────────────────────────────────────
    fn projects_by_category(&self, category: &str) -> Vec<&Project> {
        self.projects()
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    fn featured_projects(&self) -> Vec<&Project> {
        self.projects().iter().filter(|p| p.featured).collect()
    }

    fn project(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.id == id)
    }

    // ── Skills ──────────────────────────────────────────────────────
    fn skills_by_category(&self, category: &str) -> Vec<&Skill> {
        self.skills()
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    // ── Certificates ────────────────────────────────────────────────
    fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.certificates().iter().find(|c| c.id == id)
    }

    // ── Categories ──────────────────────────────────────────────────
    fn has_category(&self, token: &str) -> bool {
        self.categories().iter().any(|c| c.token == token)
    }
}
