use crate::api;
use crate::cli::parser::Commands;
use crate::cli::resolve_now;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, Read};

/// Handle the `request` subcommand: JSON payload in, JSON body out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Request { file, at } = cmd {
        let body = match file {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let now = resolve_now(at.as_ref(), cfg)?;
        let response = api::handle(&body, now, cfg);

        println!("{}", serde_json::to_string_pretty(&response.body)?);

        if !response.is_success() {
            return Err(AppError::Rejected {
                status: response.status,
                message: response.error_message().unwrap_or_default().to_string(),
            });
        }
    }

    Ok(())
}
