use crate::cli::parser::Commands;
use crate::cli::resolve_now;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::request::CalculationRequest;
use crate::models::result::CalculationResult;
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{bold, pad_right, progress_bar};
use std::thread;
use std::time::Duration;

const LABEL_WIDTH: usize = 12;

/// Calculate end time and status for a start time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        start,
        break_hours,
        break_minutes,
        at,
        json,
        watch,
    } = cmd
    {
        //
        // 1. Build request (any break flag switches to a custom break)
        //
        let req = if break_hours.is_some() || break_minutes.is_some() {
            CalculationRequest::with_break(
                start,
                break_hours.unwrap_or(0),
                break_minutes.unwrap_or(0),
            )
        } else {
            CalculationRequest::standard(start)
        };

        //
        // 2. One shot or watch loop; `now` is sampled once per round
        //
        loop {
            let now = resolve_now(at.as_ref(), cfg)?;
            let result = Core::calculate(&req, now, cfg)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&req, &result);
            }

            match watch {
                Some(secs) => {
                    thread::sleep(Duration::from_secs((*secs).max(1)));
                    println!();
                }
                None => break,
            }
        }
    }

    Ok(())
}

fn print_result(req: &CalculationRequest, r: &CalculationResult) {
    messages::header(format!("Working day started at {}", req.start_time.trim()));

    print_row("Day type", &r.day_type);
    print_row("End time", &format!("{} ({})", bold(&r.end_time), r.timezone));
    print_row("Worked", &r.worked);
    print_row("Break", &format!("{} min", r.break_seconds / 60));

    let color = color_for_status(r.is_overtime());
    print_row("Status", &format!("{color}{}{RESET}", r.status));

    let percent = r.progress_percent();
    print_row("Progress", &format!("{} {percent}%", progress_bar(percent, 20)));
}

fn print_row(label: &str, value: &str) {
    println!("{} {}", pad_right(&format!("{label}:"), LABEL_WIDTH), value);
}
