//! worktime main entrypoint.

use env_logger::Env;
use worktime::run;
use worktime::ui::messages;

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
