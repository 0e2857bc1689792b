use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// View or check the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
    } = cmd
    else {
        return Ok(());
    };

    if *print_config {
        let path = Config::config_file();
        if path.exists() {
            println!("{}", fs::read_to_string(&path)?);
        } else {
            warning(format!("no config file at {:?}; using defaults", path));
        }
        return Ok(());
    }

    if *check {
        // Re-serializing the loaded config fills in defaulted fields.
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;
        println!("{yaml}");
        success("configuration is valid");
        return Ok(());
    }

    info(format!("config file: {:?}", Config::config_file()));
    info(format!("database:    {}", cfg.database));

    Ok(())
}
