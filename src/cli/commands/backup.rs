use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Create a backup copy of the database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = expand_tilde(file).to_string_lossy().to_string();
        BackupLogic::backup(cfg, &dest, *compress, *force)?;
        success(format!("Backup created: {dest}"));
    }

    Ok(())
}
