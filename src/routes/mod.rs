pub mod api;
pub mod public;
