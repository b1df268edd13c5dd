//! In-process page model.
//!
//! The controller never looks anything up ambiently: it is handed a
//! `Document` holding the containers, filter controls, search input and
//! lightbox it is allowed to touch. The server renders the document into
//! the page shell; tests inspect it directly.

use serde::Serialize;

use crate::events::{EventKind, Handler};
use crate::models::category::Category;

pub const PROJECTS: &str = ".bento-grid";
pub const SKILLS: &str = ".skills-grid";
pub const CERTIFICATES: &str = ".certificates-grid";
pub const PROJECTS_SECTION: &str = "#projects";

/// Markup for one record plus the key later queries find it by.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub key: String,
    pub html: String,
}

/// A location in the page whose contents are replaced wholesale.
pub trait Container {
    fn selector(&self) -> &str;

    /// Replace every fragment. Handlers bound to the old contents go with them.
    fn replace(&mut self, fragments: Vec<Fragment>);

    /// Attach a handler. Binding the same target/event twice is a no-op.
    fn bind(&mut self, handler: Handler);

    fn handlers(&self) -> &[Handler];
    fn fragments(&self) -> &[Fragment];

    fn keys(&self) -> Vec<&str> {
        self.fragments().iter().map(|f| f.key.as_str()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.fragments().iter().any(|f| f.key == key)
    }

    fn inner_html(&self) -> String {
        self.fragments()
            .iter()
            .map(|f| f.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    selector: String,
    fragments: Vec<Fragment>,
    handlers: Vec<Handler>,
}

impl Element {
    pub fn new(selector: &str) -> Self {
        Element {
            selector: selector.to_string(),
            fragments: Vec::new(),
            handlers: Vec::new(),
        }
    }
}

impl Container for Element {
    fn selector(&self) -> &str {
        &self.selector
    }

    fn replace(&mut self, fragments: Vec<Fragment>) {
        self.handlers.clear();
        self.fragments = fragments;
    }

    fn bind(&mut self, handler: Handler) {
        if !self.handlers.iter().any(|h| h.same_slot(&handler)) {
            self.handlers.push(handler);
        }
    }

    fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterControl {
    pub token: String,
    pub label: String,
    pub active: bool,
}

/// Certificate viewer. Open/closed plus the two slots it displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    open: bool,
    image: String,
    alt: String,
    title: String,
}

impl Lightbox {
    pub fn open(&mut self, image: &str, alt: &str, title: &str) {
        self.image = image.to_string();
        self.alt = alt.to_string();
        self.title = title.to_string();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    containers: Vec<Element>,
    controls: Vec<FilterControl>,
    search: Option<String>,
    lightbox: Option<Lightbox>,
    listeners: Vec<Handler>,
    scroll_target: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard page: three grids, one control per category plus "all",
    /// the project search box and the certificate lightbox.
    pub fn portfolio_page(categories: &[Category]) -> Self {
        Document::new()
            .with_container(PROJECTS)
            .with_container(SKILLS)
            .with_container(CERTIFICATES)
            .with_filter_controls(categories)
            .with_search_input()
            .with_lightbox()
    }

    pub fn with_container(mut self, selector: &str) -> Self {
        if !self.containers.iter().any(|c| c.selector == selector) {
            self.containers.push(Element::new(selector));
        }
        self
    }

    /// "all" comes first and starts out active.
    pub fn with_filter_controls(mut self, categories: &[Category]) -> Self {
        self.controls = std::iter::once(Category::all())
            .chain(categories.iter().cloned())
            .map(|c| FilterControl {
                active: c.token == crate::models::category::ALL,
                token: c.token,
                label: c.label,
            })
            .collect();
        self
    }

    pub fn with_search_input(mut self) -> Self {
        self.search = Some(String::new());
        self
    }

    pub fn with_lightbox(mut self) -> Self {
        self.lightbox = Some(Lightbox::default());
        self
    }

    // ── Containers ──────────────────────────────────────────

    pub fn container(&self, selector: &str) -> Option<&dyn Container> {
        self.containers
            .iter()
            .find(|c| c.selector == selector)
            .map(|c| c as &dyn Container)
    }

    pub fn container_mut(&mut self, selector: &str) -> Option<&mut dyn Container> {
        self.containers
            .iter_mut()
            .find(|c| c.selector == selector)
            .map(|c| c as &mut dyn Container)
    }

    // ── Filter controls ─────────────────────────────────────

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    /// Mark the control carrying `token` as the only active one.
    /// Returns false, leaving the current marks alone, when no control carries it.
    pub fn mark_active(&mut self, token: &str) -> bool {
        if !self.controls.iter().any(|c| c.token == token) {
            return false;
        }
        for control in &mut self.controls {
            control.active = control.token == token;
        }
        true
    }

    pub fn active_control(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.active)
            .map(|c| c.token.as_str())
    }

    // ── Search input ────────────────────────────────────────

    pub fn search_value(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn set_search_value(&mut self, value: &str) {
        if let Some(search) = self.search.as_mut() {
            *search = value.to_string();
        }
    }

    // ── Lightbox ────────────────────────────────────────────

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        self.lightbox.as_mut()
    }

    // ── Page-level listeners ────────────────────────────────

    pub fn listen(&mut self, handler: Handler) {
        if !self.listeners.iter().any(|h| h.same_slot(&handler)) {
            self.listeners.push(handler);
        }
    }

    pub fn listeners(&self) -> &[Handler] {
        &self.listeners
    }

    /// First live handler for `event` on `target`: page-level listeners,
    /// then whatever the containers currently hold.
    pub fn find_handler(&self, target: &str, event: EventKind) -> Option<&Handler> {
        self.listeners
            .iter()
            .chain(self.containers.iter().flat_map(|c| c.handlers.iter()))
            .find(|h| h.target == target && h.event == event)
    }

    // ── Viewport ────────────────────────────────────────────

    pub fn scroll_into_view(&mut self, selector: &str) {
        self.scroll_target = Some(selector.to_string());
    }

    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }
}
