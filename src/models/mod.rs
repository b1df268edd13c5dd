pub mod category;
pub mod certificate;
pub mod project;
pub mod skill;
