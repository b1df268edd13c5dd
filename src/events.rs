//! Event binding. Static controls are bound once per page; card handlers are
//! bound by the list renderer after every repaint, since a repaint drops them.

use crate::dom::{Container, Document};

pub const SEARCH_INPUT: &str = "#project-search";
pub const LIGHTBOX_CLOSE: &str = ".cert-modal__close";
pub const LIGHTBOX_BACKDROP: &str = "#cert-modal";
pub const DOCUMENT: &str = "document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    KeyDown,
}

/// A user interaction as delivered to `PortfolioApp::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Click,
    Input(String),
    KeyDown(String),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click => EventKind::Click,
            Event::Input(_) => EventKind::Input,
            Event::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCategory(String),
    /// Takes its query from the `Input` event that fired it.
    Search,
    ShowProject(String),
    OpenCertificate(String),
    CloseLightbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Handler {
    pub target: String,
    pub event: EventKind,
    pub action: Action,
}

impl Handler {
    pub fn new(target: impl Into<String>, event: EventKind, action: Action) -> Self {
        Handler {
            target: target.into(),
            event,
            action,
        }
    }

    /// Two handlers on the same target for the same event would both fire.
    pub fn same_slot(&self, other: &Handler) -> bool {
        self.target == other.target && self.event == other.event
    }
}

pub fn filter_target(token: &str) -> String {
    format!(".filter-btn[data-category=\"{}\"]", token)
}

pub fn details_target(project_id: &str) -> String {
    format!(".project-details-btn[data-project-id=\"{}\"]", project_id)
}

pub fn card_selector(project_id: &str) -> String {
    format!("[data-project-id=\"{}\"]", project_id)
}

pub fn certificate_target(cert_id: &str) -> String {
    format!(".cert-card[data-cert-id=\"{}\"]", cert_id)
}

/// Filter buttons, search box and lightbox close actions.
pub fn bind_page(doc: &mut Document) {
    let tokens: Vec<String> = doc.controls().iter().map(|c| c.token.clone()).collect();
    for token in tokens {
        doc.listen(Handler::new(
            filter_target(&token),
            EventKind::Click,
            Action::SetCategory(token),
        ));
    }

    if doc.search_value().is_some() {
        doc.listen(Handler::new(SEARCH_INPUT, EventKind::Input, Action::Search));
    }

    if doc.lightbox().is_some() {
        doc.listen(Handler::new(
            LIGHTBOX_CLOSE,
            EventKind::Click,
            Action::CloseLightbox,
        ));
        doc.listen(Handler::new(
            LIGHTBOX_BACKDROP,
            EventKind::Click,
            Action::CloseLightbox,
        ));
        doc.listen(Handler::new(
            DOCUMENT,
            EventKind::KeyDown,
            Action::CloseLightbox,
        ));
    }
}

/// One details handler per rendered project card.
pub fn bind_project_cards(container: &mut dyn Container) {
    let ids: Vec<String> = container.keys().into_iter().map(String::from).collect();
    for id in ids {
        container.bind(Handler::new(
            details_target(&id),
            EventKind::Click,
            Action::ShowProject(id),
        ));
    }
}

/// One lightbox handler per rendered certificate card.
pub fn bind_certificate_cards(container: &mut dyn Container) {
    let ids: Vec<String> = container.keys().into_iter().map(String::from).collect();
    for id in ids {
        container.bind(Handler::new(
            certificate_target(&id),
            EventKind::Click,
            Action::OpenCertificate(id),
        ));
    }
}
