use log::{debug, warn};

use crate::dom::{self, Container, Document, Fragment};
use crate::events;
use crate::models::certificate::Certificate;
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::render;

/// Replace the contents of `selector` with `fragments`, then re-attach
/// handlers to the fresh contents. A missing container is logged and skipped.
fn paint(
    doc: &mut Document,
    selector: &str,
    fragments: Vec<Fragment>,
    rebind: fn(&mut dyn Container),
) -> bool {
    let Some(container) = doc.container_mut(selector) else {
        warn!("Container {} not found", selector);
        return false;
    };
    debug!(
        "Painting {} fragment(s) into {}",
        fragments.len(),
        container.selector()
    );
    container.replace(fragments);
    rebind(container);
    true
}

fn no_handlers(_: &mut dyn Container) {}

pub fn render_projects(doc: &mut Document, projects: &[&Project]) -> bool {
    let fragments = projects
        .iter()
        .map(|p| Fragment {
            key: p.id.clone(),
            html: render::project_card(p),
        })
        .collect();
    paint(doc, dom::PROJECTS, fragments, events::bind_project_cards)
}

/// Skills paint one fragment per category group.
pub fn render_skills(doc: &mut Document, skills: &[&Skill]) -> bool {
    let fragments = render::group_skills(skills)
        .into_iter()
        .map(|(category, list)| Fragment {
            html: render::skill_group(&category, &list),
            key: category,
        })
        .collect();
    paint(doc, dom::SKILLS, fragments, no_handlers)
}

pub fn render_certificates(doc: &mut Document, certificates: &[&Certificate]) -> bool {
    let fragments = certificates
        .iter()
        .map(|c| Fragment {
            key: c.id.clone(),
            html: render::certificate_card(c),
        })
        .collect();
    paint(doc, dom::CERTIFICATES, fragments, events::bind_certificate_cards)
}
