//! Profile commands

use std::path::Path;

use colored::Colorize;
use despertar_core::domain::aggregates::Profile;
use despertar_core::ports::inbound::ProfileUseCases;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;
use crate::ProfileCommands;

#[derive(Serialize, Tabled)]
struct ProfileRow {
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Nível")]
    level: u32,
    #[tabled(rename = "Ganhos")]
    earnings: String,
    #[tabled(rename = "Desde")]
    created_at: String,
}

impl ProfileRow {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name().to_string(),
            level: profile.level(),
            earnings: format!("R$ {}", profile.earnings().amount()),
            created_at: profile.created_at().format("%d/%m/%Y").to_string(),
        }
    }
}

pub fn handle(
    action: ProfileCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), String> {
    let mut service = super::profile_service(data_dir)?;

    match action {
        ProfileCommands::Init { name } => {
            let profile = service.create_profile(&name).map_err(|e| e.to_string())?;
            println!("{}", "Perfil criado com sucesso!".green().bold());
            println!(
                "Bem-vindo(a) ao Despertar Digital, {}! Use `despertar dashboard` para acompanhar sua jornada.",
                profile.name()
            );
        }
        ProfileCommands::Show => match service.get_profile() {
            Some(profile) => {
                let row = ProfileRow::from(profile);
                format.print_records(&profile, &[row]);
            }
            None => {
                println!(
                    "Nenhum perfil configurado ainda. Use `despertar profile init --name <nome>`."
                );
            }
        },
    }
    Ok(())
}
