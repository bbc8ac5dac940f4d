//! Services commands

use std::path::Path;

use colored::Colorize;
use despertar_core::application::GenerateOfferCommand;
use despertar_core::domain::aggregates::{Offer, ServiceCategory};
use despertar_core::domain::services::ContentTemplateService;
use despertar_core::domain::value_objects::RecordId;
use despertar_core::ports::inbound::OfferUseCases;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;
use crate::ServiceCommands;

#[derive(Serialize, Tabled)]
struct ServiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Título")]
    title: String,
    #[tabled(rename = "Tipo")]
    category: String,
    #[tabled(rename = "Nicho")]
    niche: String,
    #[tabled(rename = "Valor")]
    value: String,
    #[tabled(rename = "Criado em")]
    created_at: String,
}

impl ServiceRow {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.id().to_string(),
            title: offer.title().to_string(),
            category: offer.category().label().to_string(),
            niche: offer.niche().to_string(),
            value: format!("R$ {}", offer.estimated_value().amount()),
            created_at: offer.created_at().format("%d/%m/%Y").to_string(),
        }
    }
}

#[derive(Serialize, Tabled)]
struct CategoryRow {
    #[tabled(rename = "Tipo")]
    value: String,
    #[tabled(rename = "Nome")]
    label: String,
    #[tabled(rename = "Valor estimado")]
    estimated_value: String,
}

#[derive(Serialize, Tabled)]
struct NicheRow {
    #[tabled(rename = "Nicho")]
    name: String,
}

pub fn handle(
    action: ServiceCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), String> {
    let mut service = super::offer_service(data_dir)?;

    match action {
        ServiceCommands::List => {
            let offers = service.list_offers();
            if offers.is_empty() {
                println!("Nenhum serviço criado ainda");
                return Ok(());
            }
            let rows: Vec<ServiceRow> = offers.iter().map(ServiceRow::from).collect();
            format.print_records(&offers, &rows);
        }
        ServiceCommands::Types => {
            let rows: Vec<CategoryRow> = ServiceCategory::all()
                .into_iter()
                .map(|category| CategoryRow {
                    value: category.as_str().to_string(),
                    label: category.label().to_string(),
                    estimated_value: format!("R$ {}", category.estimated_value().amount()),
                })
                .collect();
            format.print_records(&rows, &rows);
        }
        ServiceCommands::Niches => {
            let niches = ContentTemplateService::niches();
            let rows: Vec<NicheRow> = niches
                .iter()
                .map(|niche| NicheRow {
                    name: (*niche).to_string(),
                })
                .collect();
            format.print_records(&niches, &rows);
        }
        ServiceCommands::Preview { category, niche } => {
            super::simulate_ai("Gerando com IA...");
            let content = service
                .generate_content(&category, &niche)
                .map_err(|e| e.to_string())?;
            println!("{}", content);
        }
        ServiceCommands::Generate {
            category,
            niche,
            content,
        } => {
            let edited = content.is_some();
            if !edited {
                super::simulate_ai("Gerando com IA...");
            }
            let offer = service
                .create_offer(GenerateOfferCommand {
                    category,
                    niche,
                    content,
                })
                .map_err(|e| e.to_string())?;

            if edited {
                println!("{}", "Serviço salvo com sucesso!".green().bold());
            } else {
                println!("{}", "Serviço gerado com sucesso!".green().bold());
            }
            println!(
                "{} (R$ {})",
                offer.title(),
                offer.estimated_value().amount()
            );
            println!();
            println!("{}", offer.content());
        }
        ServiceCommands::Delete { id } => {
            service
                .remove_offer(&RecordId::from_string(id))
                .map_err(|e| e.to_string())?;
            println!("{}", "Serviço removido".green());
        }
    }
    Ok(())
}
