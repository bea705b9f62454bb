// UI layer: a simple interactive menu using `dialoguer`. Each entry maps to
// one client call; errors are printed and the loop carries on.

use crate::api::BetaClient;
use crate::models::{BetaStats, BetaUserCreate, HealthStatus};
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const MENU_ITEMS: [&str; 4] = ["Join the beta", "View beta stats", "Check service health", "Exit"];

/// Main interactive menu. Runs until the user chooses "Exit".
pub fn main_menu(api: &BetaClient) -> Result<()> {
    loop {
        let selection = Select::new()
            .with_prompt("LawVriksh Beta")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        match selection {
            0 => handle_register(api)?,
            1 => handle_stats(api),
            2 => handle_health(api),
            _ => break,
        }
    }
    Ok(())
}

/// Collect name and email, validate locally, then register.
fn handle_register(api: &BetaClient) -> Result<()> {
    let name: String = Input::new().with_prompt("Full name").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let user = BetaUserCreate::new(name.trim(), email.trim());

    let report = api.validate_beta_user_input(&user);
    if !report.is_valid {
        for err in &report.errors {
            println!("{}", format!("✗ {err}").red());
        }
        return Ok(());
    }

    let spinner = spinner("Registering...");
    let result = api.register_beta_user(&user);
    spinner.finish_and_clear();

    match result {
        Ok(resp) => {
            println!(
                "{}",
                format!("Welcome, {}!", api.format_user_name(&resp.name)).green()
            );
            println!("{}", resp.message);
            let share = Confirm::new()
                .with_prompt("Show a message to share with your network?")
                .default(true)
                .interact()?;
            if share {
                println!("\n{}\n", api.generate_beta_share_message(&resp.name));
            }
        }
        Err(e) => println!("{}", format!("Registration failed: {e}").red()),
    }
    Ok(())
}

fn handle_stats(api: &BetaClient) {
    let spinner = spinner("Fetching stats...");
    let result = api.get_beta_stats();
    spinner.finish_and_clear();

    match result {
        Ok(stats) => print_stats(&stats),
        Err(e) => println!("{}", format!("Could not load stats: {e}").red()),
    }
}

fn handle_health(api: &BetaClient) {
    let spinner = spinner("Checking health...");
    let result = api.check_beta_health();
    spinner.finish_and_clear();

    match result {
        Ok(health) => print_health(&health),
        Err(e) => println!("{}", format!("Health check failed: {e}").red()),
    }
}

fn print_stats(stats: &BetaStats) {
    println!("Beta programme ({})", stats.status);
    println!("  Total members:   {}", stats.total_beta_users);
    println!("  Last 24 hours:   {}", stats.users_last_24h);
    println!("  Last 7 days:     {}", stats.users_last_week);
}

fn print_health(health: &HealthStatus) {
    let status = if health.is_healthy() {
        health.status.as_str().green()
    } else {
        health.status.as_str().yellow()
    };
    println!("{}: {} at {}", health.service, status, health.timestamp);
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
