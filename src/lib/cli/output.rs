//! What the command line front end prints for the user: the progress spinner, the
//! status line and the listings

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::Language;
use crate::scaffold::{profile_for, ProjectPlan};

/// The progress indicator shown while a project is being created
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    println!("{} {}", style("✓").green(), message);
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn hint(label: &str, value: &str) {
    println!("  {} {}", style(label).dim(), style(value).bold());
}

pub fn print_plan(plan: &ProjectPlan, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        println!("{plan}");
    }
    Ok(())
}

/// One block per language: its name on the command line, the toolchain probes and the
/// command used to run a new project
pub fn print_languages() {
    for language in Language::ALL {
        let profile = profile_for(language);
        let cli_name = clap::ValueEnum::to_possible_value(&language)
            .map(|value| value.get_name().to_string())
            .unwrap_or_else(|| language.as_ref().to_string());

        println!("{} ({})", style(language.display_name()).bold(), cli_name);
        let probes: Vec<String> = profile
            .toolchain
            .iter()
            .map(|probe| probe.invocation().to_string())
            .collect();
        hint("requires:", &probes.join(", "));
        hint("run with:", profile.run_command);
    }
}
