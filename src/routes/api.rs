use rocket::serde::json::Json;
use rocket::State;

use crate::filter::FilterState;
use crate::models::certificate::Certificate;
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::store::{MemoryStore, Store};

// ── Projects ───────────────────────────────────────────

/// Same selection rule as the page: query narrows within the category.
#[get("/projects?<category>&<q>")]
pub fn projects(
    store: &State<MemoryStore>,
    category: Option<&str>,
    q: Option<&str>,
) -> Json<Vec<Project>> {
    let state = FilterState::new(category.unwrap_or(""), q.unwrap_or(""));
    let store: &MemoryStore = store.inner();
    Json(state.select(store).into_iter().cloned().collect())
}

#[get("/projects/featured")]
pub fn featured_projects(store: &State<MemoryStore>) -> Json<Vec<Project>> {
    Json(store.featured_projects().into_iter().cloned().collect())
}

// ── Skills ─────────────────────────────────────────────

#[get("/skills?<category>")]
pub fn skills(store: &State<MemoryStore>, category: Option<&str>) -> Json<Vec<Skill>> {
    match category {
        Some(c) if !c.is_empty() => Json(store.skills_by_category(c).into_iter().cloned().collect()),
        _ => Json(store.skills().to_vec()),
    }
}

// ── Certificates ───────────────────────────────────────

#[get("/certificates")]
pub fn certificates(store: &State<MemoryStore>) -> Json<Vec<Certificate>> {
    Json(store.certificates().to_vec())
}

pub fn routes() -> Vec<rocket::Route> {
    routes![projects, featured_projects, skills, certificates]
}
