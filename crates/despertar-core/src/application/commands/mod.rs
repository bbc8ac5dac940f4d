//! Command handlers
//!
//! Application services that orchestrate use cases. Each service loads its
//! full list once at construction and keeps memory and storage in lockstep:
//! every mutation persists the complete new list before the in-memory copy
//! is replaced, so a failed write leaves both sides as they were.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::application::dto::*;
use crate::domain::aggregates::{
    Automation, AutomationKind, Difficulty, Offer, Opportunity, Profile, ServiceCategory,
};
use crate::domain::services::progress::XP_PER_LEVEL;
use crate::domain::services::{ContentTemplateService, OpportunityCatalog, ProgressService};
use crate::domain::value_objects::{Channel, Money, RecordId};
use crate::ports::inbound::{
    AutomationUseCases, OfferUseCases, OpportunityUseCases, ProfileUseCases, UseCaseError,
};
use crate::ports::outbound::{
    AutomationStore, EventPublisher, OfferStore, OpportunityStore, ProfileStore,
};

/// Validate a required free-text field, trimming surrounding whitespace
fn required_text(value: &str, field: &str) -> Result<String, UseCaseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UseCaseError::ValidationError(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_channel(value: &str) -> Result<Channel, UseCaseError> {
    Channel::parse(value)
        .ok_or_else(|| UseCaseError::ValidationError(format!("unknown channel '{}'", value)))
}

fn parse_category(value: &str) -> Result<ServiceCategory, UseCaseError> {
    ServiceCategory::parse(value)
        .ok_or_else(|| UseCaseError::ValidationError(format!("unknown service type '{}'", value)))
}

// =============================================================================
// Automations
// =============================================================================

/// Automation application service
pub struct AutomationService {
    store: Arc<dyn AutomationStore>,
    event_publisher: Arc<dyn EventPublisher>,
    automations: Vec<Automation>,
}

impl AutomationService {
    /// Load the stored list; a malformed blob surfaces here
    pub fn new(
        store: Arc<dyn AutomationStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, UseCaseError> {
        let automations = store.load()?;
        debug!(count = automations.len(), "automations loaded");

        Ok(Self {
            store,
            event_publisher,
            automations,
        })
    }

    fn position(&self, id: &RecordId) -> Result<usize, UseCaseError> {
        self.automations
            .iter()
            .position(|automation| automation.id() == id)
            .ok_or_else(|| UseCaseError::NotFound(format!("automation '{}' not found", id)))
    }
}

impl AutomationUseCases for AutomationService {
    fn create_automation(
        &mut self,
        command: CreateAutomationCommand,
    ) -> Result<Automation, UseCaseError> {
        // Validate inputs
        let name = required_text(&command.name, "name")?;
        let kind = AutomationKind::parse(&command.kind).ok_or_else(|| {
            UseCaseError::ValidationError(format!("unknown automation type '{}'", command.kind))
        })?;
        let channel = parse_channel(&command.channel)?;
        let message = match command.message {
            Some(message) => required_text(&message, "message")?,
            None => ContentTemplateService::default_message(kind).to_string(),
        };

        let mut automation =
            Automation::create(name, kind, channel, message, command.delay_minutes);
        let events = automation.take_events();

        // Persist the prepended list, then commit it
        let mut next = Vec::with_capacity(self.automations.len() + 1);
        next.push(automation.clone());
        next.extend(self.automations.iter().cloned());
        self.store.save(&next)?;
        self.automations = next;

        self.event_publisher.publish(events)?;
        info!(id = %automation.id(), kind = kind.as_str(), "automation created");

        Ok(automation)
    }

    fn toggle_automation(&mut self, id: &RecordId) -> Result<Automation, UseCaseError> {
        let index = self.position(id)?;

        let mut next = self.automations.clone();
        next[index].toggle_active();
        let events = next[index].take_events();
        let automation = next[index].clone();

        self.store.save(&next)?;
        self.automations = next;

        self.event_publisher.publish(events)?;
        info!(id = %automation.id(), active = automation.is_active(), "automation status changed");

        Ok(automation)
    }

    fn trigger_automation(&mut self, id: &RecordId) -> Result<Automation, UseCaseError> {
        let index = self.position(id)?;

        let mut next = self.automations.clone();
        next[index]
            .record_trigger()
            .map_err(|e| UseCaseError::DomainError(e.to_string()))?;
        let events = next[index].take_events();
        let automation = next[index].clone();

        self.store.save(&next)?;
        self.automations = next;

        self.event_publisher.publish(events)?;
        info!(id = %automation.id(), count = automation.trigger_count(), "automation triggered");

        Ok(automation)
    }

    fn remove_automation(&mut self, id: &RecordId) -> Result<(), UseCaseError> {
        let index = self.position(id)?;

        let mut next = self.automations.clone();
        next.remove(index);

        self.store.save(&next)?;
        self.automations = next;

        info!(id = %id, "automation removed");
        Ok(())
    }

    fn list_automations(&self) -> &[Automation] {
        &self.automations
    }
}

// =============================================================================
// Opportunities
// =============================================================================

/// Opportunity application service
pub struct OpportunityService {
    store: Arc<dyn OpportunityStore>,
    event_publisher: Arc<dyn EventPublisher>,
    opportunities: Vec<Opportunity>,
}

impl OpportunityService {
    /// Load the stored list; a malformed blob surfaces here
    pub fn new(
        store: Arc<dyn OpportunityStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, UseCaseError> {
        let opportunities = store.load()?;
        debug!(count = opportunities.len(), "opportunities loaded");

        Ok(Self {
            store,
            event_publisher,
            opportunities,
        })
    }

    fn position(&self, id: &RecordId) -> Result<usize, UseCaseError> {
        self.opportunities
            .iter()
            .position(|opportunity| opportunity.id() == id)
            .ok_or_else(|| UseCaseError::NotFound(format!("opportunity '{}' not found", id)))
    }

    fn persist_new(&mut self, mut opportunity: Opportunity) -> Result<Opportunity, UseCaseError> {
        let events = opportunity.take_events();

        let mut next = Vec::with_capacity(self.opportunities.len() + 1);
        next.push(opportunity.clone());
        next.extend(self.opportunities.iter().cloned());
        self.store.save(&next)?;
        self.opportunities = next;

        self.event_publisher.publish(events)?;
        Ok(opportunity)
    }
}

impl OpportunityUseCases for OpportunityService {
    fn discover_opportunity(&mut self) -> Result<Opportunity, UseCaseError> {
        let blueprint = OpportunityCatalog::draw(&mut rand::thread_rng());

        let opportunity = Opportunity::create(
            blueprint.title,
            blueprint.channel,
            blueprint.niche,
            blueprint.difficulty,
            Money::brl(Decimal::from(blueprint.estimated_revenue)),
            blueprint.description,
            blueprint.tips.iter().map(|tip| tip.to_string()).collect(),
        );

        info!(title = blueprint.title, "opportunity discovered");
        self.persist_new(opportunity)
    }

    fn create_opportunity(
        &mut self,
        command: CreateOpportunityCommand,
    ) -> Result<Opportunity, UseCaseError> {
        let title = required_text(&command.title, "title")?;
        let channel = parse_channel(&command.channel)?;
        let niche = required_text(&command.niche, "niche")?;
        let difficulty = Difficulty::parse(&command.difficulty).ok_or_else(|| {
            UseCaseError::ValidationError(format!("unknown difficulty '{}'", command.difficulty))
        })?;
        let description = required_text(&command.description, "description")?;

        let revenue = Money::brl(Decimal::from(command.estimated_revenue));
        if !revenue.is_positive() {
            return Err(UseCaseError::ValidationError(
                "estimated revenue must be positive".into(),
            ));
        }

        let opportunity = Opportunity::create(
            title,
            channel,
            niche,
            difficulty,
            revenue,
            description,
            command.tips,
        );

        info!(id = %opportunity.id(), "opportunity created");
        self.persist_new(opportunity)
    }

    fn remove_opportunity(&mut self, id: &RecordId) -> Result<(), UseCaseError> {
        let index = self.position(id)?;

        let mut next = self.opportunities.clone();
        next.remove(index);

        self.store.save(&next)?;
        self.opportunities = next;

        info!(id = %id, "opportunity removed");
        Ok(())
    }

    fn list_opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }
}

// =============================================================================
// Offers
// =============================================================================

/// Offer application service
pub struct OfferService {
    store: Arc<dyn OfferStore>,
    event_publisher: Arc<dyn EventPublisher>,
    offers: Vec<Offer>,
}

impl OfferService {
    /// Load the stored list; a malformed blob surfaces here
    pub fn new(
        store: Arc<dyn OfferStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, UseCaseError> {
        let offers = store.load()?;
        debug!(count = offers.len(), "offers loaded");

        Ok(Self {
            store,
            event_publisher,
            offers,
        })
    }

    fn position(&self, id: &RecordId) -> Result<usize, UseCaseError> {
        self.offers
            .iter()
            .position(|offer| offer.id() == id)
            .ok_or_else(|| UseCaseError::NotFound(format!("service '{}' not found", id)))
    }
}

impl OfferUseCases for OfferService {
    fn generate_content(&self, category: &str, niche: &str) -> Result<String, UseCaseError> {
        let category = parse_category(category)?;
        let niche = required_text(niche, "niche")?;

        Ok(ContentTemplateService::render(category, &niche))
    }

    fn create_offer(&mut self, command: GenerateOfferCommand) -> Result<Offer, UseCaseError> {
        let category = parse_category(&command.category)?;
        let niche = required_text(&command.niche, "niche")?;
        let content = match command.content {
            Some(content) => required_text(&content, "content")?,
            None => ContentTemplateService::render(category, &niche),
        };

        let mut offer = Offer::create(category, niche, content);
        let events = offer.take_events();

        let mut next = Vec::with_capacity(self.offers.len() + 1);
        next.push(offer.clone());
        next.extend(self.offers.iter().cloned());
        self.store.save(&next)?;
        self.offers = next;

        self.event_publisher.publish(events)?;
        info!(id = %offer.id(), category = category.as_str(), "offer created");

        Ok(offer)
    }

    fn remove_offer(&mut self, id: &RecordId) -> Result<(), UseCaseError> {
        let index = self.position(id)?;

        let mut next = self.offers.clone();
        next.remove(index);

        self.store.save(&next)?;
        self.offers = next;

        info!(id = %id, "offer removed");
        Ok(())
    }

    fn list_offers(&self) -> &[Offer] {
        &self.offers
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Profile application service
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
    event_publisher: Arc<dyn EventPublisher>,
    profile: Option<Profile>,
}

impl ProfileService {
    /// Load the stored profile; a malformed blob surfaces here
    pub fn new(
        store: Arc<dyn ProfileStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, UseCaseError> {
        let profile = store.load()?;

        Ok(Self {
            store,
            event_publisher,
            profile,
        })
    }
}

impl ProfileUseCases for ProfileService {
    fn create_profile(&mut self, name: &str) -> Result<Profile, UseCaseError> {
        let name = required_text(name, "name")?;

        let mut profile = Profile::create(name);
        let events = profile.take_events();

        self.store.save(&profile)?;
        self.profile = Some(profile.clone());

        self.event_publisher.publish(events)?;
        info!(name = profile.name(), "profile created");

        Ok(profile)
    }

    fn get_profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Dashboard read-model assembly
pub struct DashboardService;

impl DashboardService {
    /// Compute the overview from the current record lists
    pub fn overview(
        profile: Option<&Profile>,
        automations: &[Automation],
        opportunities: &[Opportunity],
        offers: &[Offer],
    ) -> DashboardView {
        let experience =
            ProgressService::experience(offers.len(), opportunities.len(), automations.len());

        DashboardView {
            user_name: profile.map(|p| p.name().to_string()),
            level: ProgressService::level(experience),
            experience_into_level: ProgressService::experience_into_level(experience),
            experience_to_next_level: XP_PER_LEVEL,
            total_offers: offers.len(),
            total_opportunities: opportunities.len(),
            total_automations: automations.len(),
            active_automations: automations.iter().filter(|a| a.is_active()).count(),
            total_triggers: automations.iter().map(|a| a.trigger_count()).sum(),
            estimated_earnings: ProgressService::estimated_earnings(offers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::{
        InMemoryProfileStore, InMemoryStore, NoOpEventPublisher,
    };

    fn automation_service(
        store: Arc<InMemoryStore<Automation>>,
    ) -> AutomationService {
        AutomationService::new(store, Arc::new(NoOpEventPublisher)).unwrap()
    }

    fn opportunity_service(
        store: Arc<InMemoryStore<Opportunity>>,
    ) -> OpportunityService {
        OpportunityService::new(store, Arc::new(NoOpEventPublisher)).unwrap()
    }

    fn offer_service(store: Arc<InMemoryStore<Offer>>) -> OfferService {
        OfferService::new(store, Arc::new(NoOpEventPublisher)).unwrap()
    }

    fn create_command(name: &str) -> CreateAutomationCommand {
        CreateAutomationCommand {
            name: name.to_string(),
            kind: "welcome".to_string(),
            channel: "whatsapp".to_string(),
            message: Some("Olá!".to_string()),
            delay_minutes: 0,
        }
    }

    #[test]
    fn test_create_automation_prepends_and_persists() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = automation_service(store.clone());

        service.create_automation(create_command("Primeira")).unwrap();
        service.create_automation(create_command("Segunda")).unwrap();

        assert_eq!(service.list_automations().len(), 2);
        assert_eq!(service.list_automations()[0].name(), "Segunda");

        let reloaded = automation_service(store);
        assert_eq!(reloaded.list_automations(), service.list_automations());
    }

    #[test]
    fn test_create_automation_rejects_bad_input() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = automation_service(store.clone());

        let mut blank = create_command("   ");
        blank.name = "   ".to_string();
        assert!(matches!(
            service.create_automation(blank),
            Err(UseCaseError::ValidationError(_))
        ));

        let mut unknown = create_command("Nome");
        unknown.kind = "newsletter".to_string();
        assert!(matches!(
            service.create_automation(unknown),
            Err(UseCaseError::ValidationError(_))
        ));

        assert!(service.list_automations().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_create_automation_prefills_default_message() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = automation_service(store);

        let mut command = create_command("Entrega do curso");
        command.kind = "delivery".to_string();
        command.message = None;

        let automation = service.create_automation(command).unwrap();
        assert_eq!(
            automation.message(),
            ContentTemplateService::default_message(AutomationKind::Delivery)
        );
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = automation_service(store.clone());

        let automation = service.create_automation(create_command("Boas-vindas")).unwrap();
        let id = automation.id().clone();

        let toggled = service.toggle_automation(&id).unwrap();
        assert!(!toggled.is_active());

        let reloaded = automation_service(store);
        assert!(!reloaded.list_automations()[0].is_active());
    }

    #[test]
    fn test_trigger_counts_and_gating() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = automation_service(store.clone());

        let automation = service.create_automation(create_command("Lembrete")).unwrap();
        let id = automation.id().clone();

        for _ in 0..3 {
            service.trigger_automation(&id).unwrap();
        }
        assert_eq!(service.list_automations()[0].trigger_count(), 3);

        service.toggle_automation(&id).unwrap();
        assert!(matches!(
            service.trigger_automation(&id),
            Err(UseCaseError::DomainError(_))
        ));

        let reloaded = automation_service(store);
        assert_eq!(reloaded.list_automations()[0].trigger_count(), 3);
    }

    #[test]
    fn test_remove_automation() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = automation_service(store.clone());

        let automation = service.create_automation(create_command("Para apagar")).unwrap();
        let id = automation.id().clone();

        let before = service.list_automations().to_vec();
        assert!(matches!(
            service.remove_automation(&RecordId::from_string("999")),
            Err(UseCaseError::NotFound(_))
        ));
        assert_eq!(service.list_automations(), &before[..]);

        service.remove_automation(&id).unwrap();
        assert!(service.list_automations().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_discover_opportunity_from_catalog() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = opportunity_service(store.clone());

        let opportunity = service.discover_opportunity().unwrap();

        assert!(OpportunityCatalog::entries()
            .iter()
            .any(|entry| entry.title == opportunity.title()));
        assert_eq!(service.list_opportunities().len(), 1);

        let reloaded = opportunity_service(store);
        assert_eq!(reloaded.list_opportunities(), service.list_opportunities());
    }

    #[test]
    fn test_create_opportunity_validates_revenue() {
        let mut service = opportunity_service(Arc::new(InMemoryStore::new()));

        let command = CreateOpportunityCommand {
            title: "Consultoria de perfil".to_string(),
            channel: "instagram".to_string(),
            niche: "Personal Branding".to_string(),
            difficulty: "easy".to_string(),
            estimated_revenue: 0,
            description: "Revisão completa de perfil.".to_string(),
            tips: vec![],
        };

        assert!(matches!(
            service.create_opportunity(command),
            Err(UseCaseError::ValidationError(_))
        ));
        assert!(service.list_opportunities().is_empty());
    }

    #[test]
    fn test_generate_content_touches_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let service = offer_service(store.clone());

        let content = service.generate_content("bio", "Fitness e Saúde").unwrap();

        assert!(content.contains("Fitness e Saúde"));
        assert!(service.list_offers().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_create_offer_renders_template_by_default() {
        let mut service = offer_service(Arc::new(InMemoryStore::new()));

        let offer = service
            .create_offer(GenerateOfferCommand {
                category: "bio".to_string(),
                niche: "Fitness e Saúde".to_string(),
                content: None,
            })
            .unwrap();

        assert_eq!(
            offer.content(),
            ContentTemplateService::render(ServiceCategory::Bio, "Fitness e Saúde")
        );
        assert_eq!(offer.title(), "Bio de Instagram - Fitness e Saúde");
        assert_eq!(offer.estimated_value().amount(), Decimal::from(30));
    }

    #[test]
    fn test_create_offer_keeps_edited_content() {
        let mut service = offer_service(Arc::new(InMemoryStore::new()));

        let offer = service
            .create_offer(GenerateOfferCommand {
                category: "story".to_string(),
                niche: "Moda e Estilo".to_string(),
                content: Some("Texto revisado à mão".to_string()),
            })
            .unwrap();

        assert_eq!(offer.content(), "Texto revisado à mão");
    }

    #[test]
    fn test_create_offer_rejects_unknown_category() {
        let mut service = offer_service(Arc::new(InMemoryStore::new()));

        assert!(matches!(
            service.create_offer(GenerateOfferCommand {
                category: "banner".to_string(),
                niche: "Tecnologia".to_string(),
                content: None,
            }),
            Err(UseCaseError::ValidationError(_))
        ));
    }

    #[test]
    fn test_profile_create_and_replace() {
        let store = Arc::new(InMemoryProfileStore::new());
        let mut service =
            ProfileService::new(store.clone(), Arc::new(NoOpEventPublisher)).unwrap();

        assert!(service.get_profile().is_none());
        assert!(matches!(
            service.create_profile("   "),
            Err(UseCaseError::ValidationError(_))
        ));

        service.create_profile("Maria").unwrap();
        service.create_profile("João").unwrap();

        let reloaded = ProfileService::new(store, Arc::new(NoOpEventPublisher)).unwrap();
        assert_eq!(reloaded.get_profile().unwrap().name(), "João");
        assert_eq!(reloaded.get_profile().unwrap().level(), 1);
    }

    #[test]
    fn test_dashboard_overview() {
        let store = Arc::new(InMemoryStore::new());
        let mut automations = automation_service(store);
        let automation = automations.create_automation(create_command("Ativa")).unwrap();
        automations.trigger_automation(automation.id()).unwrap();
        automations.trigger_automation(automation.id()).unwrap();
        let paused = automations.create_automation(create_command("Pausada")).unwrap();
        automations.toggle_automation(paused.id()).unwrap();

        let offers = vec![
            Offer::create(ServiceCategory::Bio, "Fitness e Saúde", "bio"),
            Offer::create(ServiceCategory::SalesPage, "E-commerce", "página"),
        ];
        let opportunities = vec![Opportunity::create(
            "Scripts de Atendimento ao Cliente",
            Channel::Whatsapp,
            "Atendimento",
            Difficulty::Easy,
            Money::brl(Decimal::from(80)),
            "Scripts profissionais.",
            vec![],
        )];

        let view = DashboardService::overview(
            None,
            automations.list_automations(),
            &opportunities,
            &offers,
        );

        // 2 offers + 1 opportunity + 2 automations = 20 + 5 + 30 points
        assert_eq!(view.level, 2);
        assert_eq!(view.experience_into_level, 5);
        assert_eq!(view.experience_to_next_level, 50);
        assert_eq!(view.active_automations, 1);
        assert_eq!(view.total_triggers, 2);
        assert_eq!(view.estimated_earnings.amount(), Decimal::from(230));
        assert!(view.user_name.is_none());
    }
}
