//! Despertar CLI
//!
//! Command-line interface for the Despertar Digital assistant.
//!
//! # Usage
//!
//! ```bash
//! despertar profile init --name "Maria"
//! despertar opportunities discover
//! despertar services generate --type bio --niche "Fitness e Saúde"
//! despertar automations create --name "Boas-vindas" --type welcome
//! despertar dashboard
//! despertar automations list --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "despertar")]
#[command(author = "Despertar Digital")]
#[command(version = "0.1.0")]
#[command(about = "Assistente de renda digital para empreendedores", long_about = None)]
struct Cli {
    /// Diretório de dados (padrão: ~/.despertar/data)
    #[arg(long, env = "DESPERTAR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Formato de saída
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Nome do perfil de configuração
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gerencia o perfil do empreendedor
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Mostra o resumo da jornada
    Dashboard,
    /// Gerencia oportunidades de renda
    Opportunities {
        #[command(subcommand)]
        action: OpportunityCommands,
    },
    /// Gerencia serviços digitais
    Services {
        #[command(subcommand)]
        action: ServiceCommands,
    },
    /// Gerencia automações de mensagens
    Automations {
        #[command(subcommand)]
        action: AutomationCommands,
    },
    /// Configura a CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Cria ou substitui o perfil
    Init {
        #[arg(long)]
        name: String,
    },
    /// Mostra o perfil atual
    Show,
}

#[derive(Subcommand)]
enum OpportunityCommands {
    /// Lista as oportunidades identificadas
    List,
    /// Identifica uma nova oportunidade
    Discover,
    /// Remove uma oportunidade
    Delete { id: String },
}

#[derive(Subcommand)]
enum ServiceCommands {
    /// Lista os serviços criados
    List,
    /// Mostra os tipos de serviço disponíveis
    Types,
    /// Mostra os nichos sugeridos
    Niches,
    /// Gera o conteúdo sem salvar
    Preview {
        /// Tipo do serviço (ad, sales-page, bio, story, message)
        #[arg(long = "type")]
        category: String,
        /// Nicho de atuação
        #[arg(long)]
        niche: String,
    },
    /// Gera e salva um novo serviço
    Generate {
        /// Tipo do serviço (ad, sales-page, bio, story, message)
        #[arg(long = "type")]
        category: String,
        /// Nicho de atuação
        #[arg(long)]
        niche: String,
        /// Conteúdo revisado manualmente (substitui o texto gerado)
        #[arg(long)]
        content: Option<String>,
    },
    /// Remove um serviço
    Delete { id: String },
}

#[derive(Subcommand)]
enum AutomationCommands {
    /// Lista as automações
    List,
    /// Cria uma nova automação
    Create {
        #[arg(long)]
        name: String,
        /// Tipo (welcome, follow-up, delivery, reminder)
        #[arg(long = "type")]
        kind: String,
        /// Canal de envio (whatsapp, instagram)
        #[arg(long, default_value = "whatsapp")]
        channel: String,
        /// Mensagem personalizada (usa o modelo do tipo quando omitida)
        #[arg(long)]
        message: Option<String>,
        /// Atraso do envio em minutos
        #[arg(long, default_value_t = 0)]
        delay: u32,
    },
    /// Ativa ou pausa uma automação
    Toggle { id: String },
    /// Registra um disparo (simulação)
    Trigger { id: String },
    /// Remove uma automação
    Delete { id: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Define um valor de configuração
    Set { key: String, value: String },
    /// Mostra um valor de configuração
    Get { key: String },
    /// Lista toda a configuração
    List,
    /// Inicializa o arquivo de configuração
    Init,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "despertar_core=warn,despertar_cli=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();
    let format = cli
        .format
        .or_else(|| config.output_format())
        .unwrap_or(output::OutputFormat::Table);

    let result = resolve_data_dir(cli.data_dir, &config).and_then(|data_dir| {
        tracing::debug!(path = %data_dir.display(), "data directory resolved");
        match cli.command {
            Commands::Profile { action } => commands::profile::handle(action, &data_dir, format),
            Commands::Dashboard => commands::dashboard::handle(&data_dir, format),
            Commands::Opportunities { action } => {
                commands::opportunities::handle(action, &data_dir, format)
            }
            Commands::Services { action } => commands::services::handle(action, &data_dir, format),
            Commands::Automations { action } => {
                commands::automations::handle(action, &data_dir, format)
            }
            Commands::Config { action } => commands::config::handle(action),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "Erro:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Flag (or env) first, then the config file, then `~/.despertar/data`
fn resolve_data_dir(flag: Option<PathBuf>, config: &config::Config) -> Result<PathBuf, String> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = &config.data_dir {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or("não foi possível localizar o diretório home")?;
    Ok(home.join(".despertar").join("data"))
}
