//! Domain services module

pub mod catalog;
pub mod content;
pub mod progress;

pub use catalog::{OpportunityBlueprint, OpportunityCatalog};
pub use content::ContentTemplateService;
pub use progress::ProgressService;
