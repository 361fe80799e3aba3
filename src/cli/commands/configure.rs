//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, SunbirdConfig, validate_endpoint,
};
use crate::translation::{LANGUAGES, SelectionError};
use crate::ui::{Style, handle_prompt_cancellation};

const ASK_EACH_TIME: &str = "(ask each time)";

/// Runs the configure command.
///
/// With `show`, prints the current configuration. Otherwise lets the user
/// pick default languages and the endpoint interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_optional()?;
        print_config(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))?;
    Ok(())
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_optional()?;
    print_config(manager, &config);

    let from = select_language("Default source language:", config.sunbird.from.as_deref())?;
    let to = select_language("Default target language:", config.sunbird.to.as_deref())?;

    if from.is_some() && from == to {
        return Err(SelectionError::SameLanguage.into());
    }

    let endpoint = Text::new("Endpoint:")
        .with_default(config.sunbird.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
        .prompt()?;

    config.sunbird = apply_defaults(config.sunbird, from, to, &endpoint)?;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

/// Merges the chosen defaults into `sunbird`, rejecting values that would
/// make later translate runs fail.
fn apply_defaults(
    sunbird: SunbirdConfig,
    from: Option<String>,
    to: Option<String>,
    endpoint: &str,
) -> Result<SunbirdConfig> {
    if from.is_some() && from == to {
        return Err(SelectionError::SameLanguage.into());
    }

    let endpoint = endpoint.trim();
    validate_endpoint(endpoint)?;

    Ok(SunbirdConfig {
        from,
        to,
        endpoint: (endpoint != DEFAULT_ENDPOINT).then(|| endpoint.to_string()),
        ..sunbird
    })
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let sunbird = &config.sunbird;
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::value(sunbird.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        sunbird
            .timeout_secs
            .map_or_else(not_set, |secs| Style::value(format!("{secs}s")))
    );
    println!(
        "  {}      {}",
        Style::label("from"),
        sunbird.from.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        sunbird.to.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {} {}",
        Style::label("token"),
        Style::code(sunbird.token_env()),
        if sunbird.get_auth_token().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
    println!();
}

fn select_language(message: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut options = vec![ASK_EACH_TIME.to_string()];
    options.extend(
        LANGUAGES
            .iter()
            .map(|lang| format!("{} - {}", lang.name, lang.code)),
    );

    // +1 for the "(ask each time)" entry
    let default_index = default
        .and_then(|d| LANGUAGES.iter().position(|lang| lang.name == d))
        .map_or(0, |idx| idx + 1);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(parse_language_selection(&selection))
}

fn parse_language_selection(selection: &str) -> Option<String> {
    if selection == ASK_EACH_TIME {
        return None;
    }
    let name = selection.split(" - ").next().unwrap_or(selection);
    Some(name.to_string())
}
