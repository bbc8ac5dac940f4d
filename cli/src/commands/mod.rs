//! CLI Commands

pub mod automations;
pub mod config;
pub mod dashboard;
pub mod opportunities;
pub mod profile;
pub mod services;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use despertar_core::application::{
    AutomationService, OfferService, OpportunityService, ProfileService,
};
use despertar_core::infrastructure::persistence::{
    automation_store, offer_store, opportunity_store, profile_store, TracingEventPublisher,
};
use despertar_core::ports::outbound::EventPublisher;

fn publisher() -> Arc<dyn EventPublisher> {
    Arc::new(TracingEventPublisher)
}

pub fn automation_service(data_dir: &Path) -> Result<AutomationService, String> {
    let store = automation_store(data_dir).map_err(|e| e.to_string())?;
    AutomationService::new(Arc::new(store), publisher()).map_err(|e| e.to_string())
}

pub fn opportunity_service(data_dir: &Path) -> Result<OpportunityService, String> {
    let store = opportunity_store(data_dir).map_err(|e| e.to_string())?;
    OpportunityService::new(Arc::new(store), publisher()).map_err(|e| e.to_string())
}

pub fn offer_service(data_dir: &Path) -> Result<OfferService, String> {
    let store = offer_store(data_dir).map_err(|e| e.to_string())?;
    OfferService::new(Arc::new(store), publisher()).map_err(|e| e.to_string())
}

pub fn profile_service(data_dir: &Path) -> Result<ProfileService, String> {
    let store = profile_store(data_dir).map_err(|e| e.to_string())?;
    ProfileService::new(Arc::new(store), publisher()).map_err(|e| e.to_string())
}

/// Print the interim message and wait, mirroring the assistant's fake AI pause
pub fn simulate_ai(message: &str) {
    println!("{}", message.cyan());
    std::thread::sleep(Duration::from_millis(1500));
}
