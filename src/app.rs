use log::{debug, info};

use crate::dom::{self, Document};
use crate::events::{self, Action, Event};
use crate::filter::FilterState;
use crate::listing;
use crate::models::category::ALL;
use crate::models::project::Project;
use crate::store::Store;

/// Top-level controller. Owns the page document and the filter state;
/// every interaction goes through here and finishes its repaint (including
/// re-binding handlers) before returning.
pub struct PortfolioApp<'s> {
    store: &'s dyn Store,
    doc: Document,
    filter: FilterState,
}

impl<'s> PortfolioApp<'s> {
    pub fn new(store: &'s dyn Store, doc: Document) -> Self {
        PortfolioApp {
            store,
            doc,
            filter: FilterState::default(),
        }
    }

    /// Initial paint of all three lists, then the page-level bindings.
    pub fn init(&mut self) {
        let projects: Vec<&Project> = self.store.projects().iter().collect();
        let skills: Vec<_> = self.store.skills().iter().collect();
        let certificates: Vec<_> = self.store.certificates().iter().collect();

        listing::render_projects(&mut self.doc, &projects);
        listing::render_skills(&mut self.doc, &skills);
        listing::render_certificates(&mut self.doc, &certificates);
        events::bind_page(&mut self.doc);
        debug!("{} page listener(s) bound", self.doc.listeners().len());

        info!(
            "Portfolio initialised: {} projects, {} skills, {} certificates",
            projects.len(),
            skills.len(),
            certificates.len()
        );
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_projects(&self) -> Vec<&'s Project> {
        self.filter.select(self.store)
    }

    fn repaint_projects(&mut self) {
        let projects = self.filter.select(self.store);
        listing::render_projects(&mut self.doc, &projects);
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter.set_category(category);
        let token = self.filter.category();
        if token != ALL && !self.store.has_category(token) {
            debug!("Unknown category '{}', nothing will match", token);
        }
        self.repaint_projects();
        if !self.doc.mark_active(self.filter.category()) {
            debug!(
                "No filter control for category '{}', keeping '{}' marked",
                self.filter.category(),
                self.doc.active_control().unwrap_or("")
            );
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.doc.set_search_value(query);
        self.repaint_projects();
    }

    /// Scroll to the card if it is currently rendered.
    pub fn show_project(&mut self, id: &str) {
        let rendered = self
            .doc
            .container(dom::PROJECTS)
            .map(|c| c.contains_key(id))
            .unwrap_or(false);
        if rendered {
            self.doc.scroll_into_view(&events::card_selector(id));
        } else {
            debug!("Project {} is not rendered, nothing to show", id);
        }
    }

    pub fn open_certificate(&mut self, id: &str) -> bool {
        let Some(cert) = self.store.certificate(id) else {
            debug!("Unknown certificate {}", id);
            return false;
        };
        match self.doc.lightbox_mut() {
            Some(lightbox) => {
                lightbox.open(&cert.image, &cert.title, &cert.title);
                true
            }
            None => false,
        }
    }

    pub fn close_lightbox(&mut self) {
        if let Some(lightbox) = self.doc.lightbox_mut() {
            lightbox.close();
        }
    }

    fn lightbox_open(&self) -> bool {
        self.doc.lightbox().map(|l| l.is_open()).unwrap_or(false)
    }

    /// Deliver `event` to whatever handler is bound on `target`.
    /// Returns false when nothing is listening there.
    pub fn dispatch(&mut self, target: &str, event: Event) -> bool {
        let action = match self.doc.find_handler(target, event.kind()) {
            Some(handler) => handler.action.clone(),
            None => return false,
        };

        match (action, event) {
            (Action::SetCategory(token), _) => {
                self.set_category(&token);
                self.doc.scroll_into_view(dom::PROJECTS_SECTION);
            }
            (Action::Search, Event::Input(value)) => self.set_query(&value),
            (Action::Search, _) => {}
            (Action::ShowProject(id), _) => self.show_project(&id),
            (Action::OpenCertificate(id), _) => {
                self.open_certificate(&id);
            }
            (Action::CloseLightbox, Event::KeyDown(key)) => {
                if key == "Escape" && self.lightbox_open() {
                    self.close_lightbox();
                }
            }
            (Action::CloseLightbox, _) => self.close_lightbox(),
        }
        true
    }
}
