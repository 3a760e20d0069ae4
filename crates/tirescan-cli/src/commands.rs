use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use std::path::Path;
use tirescan_runtime::ApiKey;
use tirescan_runtime::config::{API_KEY_ENV, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&config_path);
        return Ok(());
    };

    match command {
        Commands::Analyze { tire, car, output } => {
            let ctx = HandlerContext::new(cli.format, output);
            handlers::analyze::handle(&ctx, &config_path, tire, car)
        }

        Commands::Inspect { response, output } => {
            let ctx = HandlerContext::new(cli.format, output);
            handlers::inspect::handle(&ctx, &config_path, &response)
        }

        Commands::Config { command } => {
            let ctx = HandlerContext::new(cli.format, None);

            match command {
                ConfigCommand::Show => handlers::config::show(&ctx, &config_path),
                ConfigCommand::Init { force } => handlers::config::init(&ctx, &config_path, force),
            }
        }
    }
}

fn show_guidance(config_path: &Path) {
    println!("tirescan - Find your tire size from two photos\n");

    if ApiKey::from_env().is_err() {
        println!("Get started:");
        println!("  export {}=<your key>\n", API_KEY_ENV);
    }

    println!("Quick commands:");
    println!("  tirescan analyze --tire tire.jpg --car car.jpg   # Identify size and build a shop link");
    println!("  tirescan inspect reply.json                      # Re-render a saved API reply");
    println!("  tirescan config show                             # Check settings");
    println!("  tirescan config init                             # Write {}\n", config_path.display());

    println!("For more commands:");
    println!("  tirescan --help");
}
