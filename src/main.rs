//! Network Diagnostics Toolkit - CLI entry point

use clap::Parser;
use netdiag::{
    cli::Cli,
    config::load_config,
    error::{AppError, Result},
    formatter_for, DiagnosticOrchestrator,
};
use std::io::{self, BufRead, Write};
use std::process;

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Load .env before parsing so the NETDIAG_* env attributes see it.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run_application(cli).await {
        eprintln!("{}", e.format_for_console(std::env::var_os("NO_COLOR").is_none()));
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    cli.validate().map_err(AppError::usage)?;

    let target = resolve_target(&cli)?;
    let config = load_config(&cli)?;

    if config.verbose {
        println!("{} v{}", netdiag::PKG_NAME, netdiag::VERSION);
        println!("Target: {}", target);
        println!("Ping count: {}", config.ping_count);
        println!(
            "Ports: {}",
            config
                .ports
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Command timeout: {}s", config.command_timeout_seconds);
        println!("Connect timeout: {}ms", config.connect_timeout_millis);
        println!();
    }

    let orchestrator = DiagnosticOrchestrator::new();
    let report = orchestrator.diagnose(&target, &config).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let formatter = formatter_for(config.enable_color);
        print!("{}", formatter.format_report(&report)?);
    }

    // Probe-level failures are reported in-band; only usage and
    // configuration errors change the exit status.
    Ok(())
}

/// Determine the target from the positional argument or by prompting.
///
/// An empty target (after trimming) is a fatal usage error; no probes run.
fn resolve_target(cli: &Cli) -> Result<String> {
    let target = match &cli.target {
        Some(target) => target.trim().to_string(),
        None => prompt_for_target()?,
    };

    if target.is_empty() {
        return Err(AppError::usage("No target provided. Exiting."));
    }
    Ok(target)
}

fn prompt_for_target() -> Result<String> {
    print!("Enter hostname or IP to diagnose: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
