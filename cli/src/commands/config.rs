//! Config commands

use crate::config::Config;
use crate::output::OutputFormat;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands) -> Result<(), String> {
    match action {
        ConfigCommands::Init => {
            let config = Config::default();
            config.save()?;
            println!("Configuração criada em ~/.despertar/config.toml");
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(None).unwrap_or_default();
            match key.as_str() {
                "data_dir" => config.data_dir = Some(value),
                "default_format" => {
                    if OutputFormat::from_config(&value).is_none() {
                        return Err(format!(
                            "formato inválido: {} (use table, json ou yaml)",
                            value
                        ));
                    }
                    config.default_format = Some(value);
                }
                _ => return Err(format!("chave de configuração desconhecida: {}", key)),
            }
            config.save()?;
            println!("{} atualizado", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(None).unwrap_or_default();
            let value = match key.as_str() {
                "data_dir" => config.data_dir,
                "default_format" => config.default_format,
                _ => return Err(format!("chave de configuração desconhecida: {}", key)),
            };
            println!(
                "{}: {}",
                key,
                value.unwrap_or_else(|| "(não definido)".into())
            );
        }
        ConfigCommands::List => {
            let config = Config::load(None).unwrap_or_default();
            println!(
                "data_dir: {}",
                config.data_dir.unwrap_or_else(|| "(não definido)".into())
            );
            println!(
                "default_format: {}",
                config.default_format.unwrap_or_else(|| "(não definido)".into())
            );
        }
    }
    Ok(())
}
