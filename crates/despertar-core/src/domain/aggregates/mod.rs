//! Aggregates module

pub mod automation;
pub mod offer;
pub mod opportunity;
pub mod profile;

pub use automation::{Automation, AutomationError, AutomationKind};
pub use offer::{Offer, ServiceCategory};
pub use opportunity::{Difficulty, Opportunity};
pub use profile::Profile;
