use chrono::Datelike;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use crate::app::PortfolioApp;
use crate::config::SiteConfig;
use crate::contact::{self, ContactForm};
use crate::dom::{self, Document};
use crate::events::{self, Event};
use crate::render;
use crate::store::{MemoryStore, Store};

fn container_html(doc: &Document, selector: &str) -> String {
    doc.container(selector)
        .map(|c| c.inner_html())
        .unwrap_or_default()
}

// ── Homepage ───────────────────────────────────────────

/// Full page. Query parameters are replayed as the clicks and keystrokes
/// the page's script would deliver, so filtering works without JavaScript.
#[get("/?<category>&<q>&<certificate>")]
pub fn index(
    store: &State<MemoryStore>,
    config: &State<SiteConfig>,
    category: Option<&str>,
    q: Option<&str>,
    certificate: Option<&str>,
) -> Template {
    let store: &MemoryStore = store.inner();
    let mut app = PortfolioApp::new(store, Document::portfolio_page(store.categories()));
    app.init();
    if let Some(category) = category {
        // No control carries an unknown token, so apply it directly.
        if !app.dispatch(&events::filter_target(category), Event::Click) {
            app.set_category(category);
        }
    }
    if let Some(q) = q {
        app.dispatch(events::SEARCH_INPUT, Event::Input(q.to_string()));
    }
    if let Some(id) = certificate {
        app.dispatch(&events::certificate_target(id), Event::Click);
    }

    let doc = app.document();
    let projects_html = container_html(doc, dom::PROJECTS);
    let lightbox_html = doc.lightbox().map(render::lightbox).unwrap_or_default();

    let context = json!({
        "site": config.inner(),
        "controls": doc.controls(),
        "query": doc.search_value().unwrap_or(""),
        "category": app.filter().category(),
        "scroll_target": doc.scroll_target().unwrap_or(""),
        "projects_html": if projects_html.is_empty() {
            render::empty_projects().to_string()
        } else {
            projects_html
        },
        "project_count": app.visible_projects().len(),
        "skills_html": container_html(doc, dom::SKILLS),
        "certificates_html": container_html(doc, dom::CERTIFICATES),
        "lightbox_html": lightbox_html,
        "year": chrono::Local::now().year(),
    });

    Template::render("index", &context)
}

// ── Project fragments ──────────────────────────────────

/// Project grid contents for the live filter; the script swaps this into
/// the grid on every filter click or search keystroke.
#[get("/projects?<category>&<q>")]
pub fn projects_fragment(
    store: &State<MemoryStore>,
    category: Option<&str>,
    q: Option<&str>,
) -> RawHtml<String> {
    let store: &MemoryStore = store.inner();
    let doc = Document::new()
        .with_container(dom::PROJECTS)
        .with_filter_controls(store.categories())
        .with_search_input();
    let mut app = PortfolioApp::new(store, doc);
    app.set_category(category.unwrap_or(""));
    app.set_query(q.unwrap_or(""));

    let html = container_html(app.document(), dom::PROJECTS);
    if html.is_empty() {
        RawHtml(render::empty_projects().to_string())
    } else {
        RawHtml(html)
    }
}

#[get("/projects/<id>")]
pub fn project_detail(store: &State<MemoryStore>, id: &str) -> Option<RawHtml<String>> {
    let project = store.project(id)?;
    Some(RawHtml(render::project_detail(project)))
}

// ── Contact ────────────────────────────────────────────

/// Hands the message to the visitor's mail client.
#[post("/contact", data = "<form>")]
pub fn contact_submit(config: &State<SiteConfig>, form: Form<ContactForm>) -> Redirect {
    if !form.is_complete() || config.contact_email.is_empty() {
        return Redirect::to("/#contact");
    }
    Redirect::to(contact::mailto_link(&config.contact_email, &form))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, projects_fragment, project_detail, contact_submit]
}
