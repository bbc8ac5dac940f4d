//! Automations commands

use std::path::Path;

use colored::Colorize;
use despertar_core::application::CreateAutomationCommand;
use despertar_core::domain::aggregates::Automation;
use despertar_core::domain::value_objects::RecordId;
use despertar_core::ports::inbound::AutomationUseCases;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;
use crate::AutomationCommands;

#[derive(Serialize, Tabled)]
struct AutomationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Canal")]
    channel: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Disparos")]
    triggers: u64,
    #[tabled(rename = "Envio")]
    delay: String,
    #[tabled(rename = "Criada em")]
    created_at: String,
}

impl AutomationRow {
    fn from(automation: &Automation) -> Self {
        Self {
            id: automation.id().to_string(),
            name: automation.name().to_string(),
            kind: automation.kind().label().to_string(),
            channel: automation.channel().label().to_string(),
            status: if automation.is_active() {
                "Ativa".to_string()
            } else {
                "Pausada".to_string()
            },
            triggers: automation.trigger_count(),
            delay: if automation.delay_minutes() == 0 {
                "Imediato".to_string()
            } else {
                format!("Atraso: {} min", automation.delay_minutes())
            },
            created_at: automation.created_at().format("%d/%m/%Y").to_string(),
        }
    }
}

pub fn handle(
    action: AutomationCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), String> {
    let mut service = super::automation_service(data_dir)?;

    match action {
        AutomationCommands::List => {
            let automations = service.list_automations();
            if automations.is_empty() {
                println!("Nenhuma automação configurada");
                return Ok(());
            }
            let rows: Vec<AutomationRow> = automations.iter().map(AutomationRow::from).collect();
            format.print_records(&automations, &rows);
        }
        AutomationCommands::Create {
            name,
            kind,
            channel,
            message,
            delay,
        } => {
            let automation = service
                .create_automation(CreateAutomationCommand {
                    name,
                    kind,
                    channel,
                    message,
                    delay_minutes: delay,
                })
                .map_err(|e| e.to_string())?;
            println!("{}", "Automação criada com sucesso!".green().bold());
            println!(
                "{} ({}, {})",
                automation.name(),
                automation.kind().label(),
                automation.channel().label()
            );
        }
        AutomationCommands::Toggle { id } => {
            let automation = service
                .toggle_automation(&RecordId::from_string(id))
                .map_err(|e| e.to_string())?;
            let status = if automation.is_active() {
                "Ativa".green()
            } else {
                "Pausada".yellow()
            };
            println!("{}", "Status da automação atualizado".green());
            println!("{}: {}", automation.name(), status);
        }
        AutomationCommands::Trigger { id } => {
            let automation = service
                .trigger_automation(&RecordId::from_string(id))
                .map_err(|e| e.to_string())?;
            println!("{}", "Automação disparada! (simulação)".green());
            println!("Total de disparos: {}", automation.trigger_count());
        }
        AutomationCommands::Delete { id } => {
            service
                .remove_automation(&RecordId::from_string(id))
                .map_err(|e| e.to_string())?;
            println!("{}", "Automação removida".green());
        }
    }
    Ok(())
}
