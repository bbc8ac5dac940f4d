//! Dashboard command

use std::path::Path;

use colored::Colorize;
use despertar_core::application::{DashboardService, DashboardView};
use despertar_core::ports::inbound::{
    AutomationUseCases, OfferUseCases, OpportunityUseCases, ProfileUseCases,
};

use crate::output::OutputFormat;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<(), String> {
    let profiles = super::profile_service(data_dir)?;
    let automations = super::automation_service(data_dir)?;
    let opportunities = super::opportunity_service(data_dir)?;
    let offers = super::offer_service(data_dir)?;

    let view = DashboardService::overview(
        profiles.get_profile(),
        automations.list_automations(),
        opportunities.list_opportunities(),
        offers.list_offers(),
    );

    if !matches!(format, OutputFormat::Table) {
        format.print(&view);
        return Ok(());
    }

    render(&view);
    Ok(())
}

fn render(view: &DashboardView) {
    match &view.user_name {
        Some(name) => println!("{}", format!("Bem-vindo de volta, {}!", name).bold()),
        None => println!("{}", "Bem-vindo ao Despertar Digital!".bold()),
    }
    println!("Aqui está um resumo da sua jornada no Despertar");
    println!();
    println!(
        "{}  {}/{} XP",
        format!("Nível {}", view.level).purple().bold(),
        view.experience_into_level,
        view.experience_to_next_level
    );
    println!();
    println!("Serviços Criados: {}", view.total_offers);
    println!("Oportunidades: {}", view.total_opportunities);
    println!(
        "Automações Ativas: {} de {}",
        view.active_automations, view.total_automations
    );
    println!("Disparos registrados: {}", view.total_triggers);
    println!(
        "Potencial de Renda: {}",
        format!("R$ {:.0}", view.estimated_earnings.amount())
            .green()
            .bold()
    );
    println!();
    println!("{}", "Próximos Passos".bold());
    println!("Continue sua jornada com estas ações recomendadas");
    println!();

    if view.total_opportunities == 0 {
        step(
            "Identifique sua primeira oportunidade",
            "Use `despertar opportunities discover` para descobrir nichos lucrativos no Instagram e WhatsApp",
        );
    }
    if view.total_offers == 0 {
        step(
            "Crie seu primeiro serviço digital",
            "Use `despertar services generate` para criar textos de anúncio e páginas de venda com IA",
        );
    }
    if view.total_automations == 0 && view.total_offers > 0 {
        step(
            "Configure sua primeira automação",
            "Use `despertar automations create` para automatizar mensagens e entregas e escalar seu negócio",
        );
    }
    if view.total_offers > 0 && view.total_automations > 0 {
        step(
            "Parabéns! Você está no caminho certo",
            "Continue criando serviços e otimizando suas automações para aumentar sua renda",
        );
    }
}

fn step(title: &str, description: &str) {
    println!("  {}", title.bold());
    println!("  {}", description);
    println!();
}
