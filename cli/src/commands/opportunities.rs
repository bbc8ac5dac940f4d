//! Opportunities commands

use std::path::Path;

use colored::Colorize;
use despertar_core::domain::aggregates::Opportunity;
use despertar_core::domain::value_objects::RecordId;
use despertar_core::ports::inbound::OpportunityUseCases;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;
use crate::OpportunityCommands;

#[derive(Serialize, Tabled)]
struct OpportunityRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Título")]
    title: String,
    #[tabled(rename = "Canal")]
    channel: String,
    #[tabled(rename = "Nicho")]
    niche: String,
    #[tabled(rename = "Dificuldade")]
    difficulty: String,
    #[tabled(rename = "Receita")]
    revenue: String,
    #[tabled(rename = "Criada em")]
    created_at: String,
}

impl OpportunityRow {
    fn from(opportunity: &Opportunity) -> Self {
        Self {
            id: opportunity.id().to_string(),
            title: opportunity.title().to_string(),
            channel: opportunity.channel().label().to_string(),
            niche: opportunity.niche().to_string(),
            difficulty: opportunity.difficulty().label().to_string(),
            revenue: format!("R$ {}", opportunity.estimated_revenue().amount()),
            created_at: opportunity.created_at().format("%d/%m/%Y").to_string(),
        }
    }
}

pub fn handle(
    action: OpportunityCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), String> {
    let mut service = super::opportunity_service(data_dir)?;

    match action {
        OpportunityCommands::List => {
            let opportunities = service.list_opportunities();
            if opportunities.is_empty() {
                println!("Nenhuma oportunidade identificada ainda");
                return Ok(());
            }
            let rows: Vec<OpportunityRow> =
                opportunities.iter().map(OpportunityRow::from).collect();
            format.print_records(&opportunities, &rows);
        }
        OpportunityCommands::Discover => {
            super::simulate_ai("Analisando...");
            let opportunity = service.discover_opportunity().map_err(|e| e.to_string())?;

            println!("{}", "Nova oportunidade identificada!".green().bold());
            println!();
            println!("{}", opportunity.title().bold());
            println!(
                "{} · {} · {}",
                opportunity.channel().label(),
                opportunity.niche(),
                opportunity.difficulty().label()
            );
            println!(
                "Receita estimada: R$ {}",
                opportunity.estimated_revenue().amount()
            );
            println!();
            println!("{}", opportunity.description());
            if !opportunity.tips().is_empty() {
                println!();
                println!("{}", "Dicas para Implementar:".bold());
                for tip in opportunity.tips() {
                    println!("  • {}", tip);
                }
            }
        }
        OpportunityCommands::Delete { id } => {
            service
                .remove_opportunity(&RecordId::from_string(id))
                .map_err(|e| e.to_string())?;
            println!("{}", "Oportunidade removida".green());
        }
    }
    Ok(())
}
