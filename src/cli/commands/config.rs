use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            messages::info("Nothing to do. Use --print to show the effective configuration.");
            return Ok(());
        }

        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}
