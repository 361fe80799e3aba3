use anyhow::Result;
use inquire::Text;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::input::InputReader;
use crate::translation::{
    LanguagePair, TranslationClient, TranslationRequest, choices_hint, validate_pair,
};
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// How a translate run ended when no error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateOutcome {
    /// The translation was printed.
    Translated,
    /// The service call failed; the failure line was printed.
    Failed,
    /// The user cancelled a prompt.
    Cancelled,
}

/// The user's input was unusable before anything was sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Text to translate cannot be empty.")]
    EmptyText,
    #[error(
        "Input ended before the {0} was given.\n\n\
         Pipe one answer per line, or pass it with --from/--to."
    )]
    MissingAnswer(&'static str),
}

/// Raw answers gathered from flags, config and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UserInput {
    source: String,
    target: String,
    text: String,
}

pub async fn run_translate(options: TranslateOptions) -> Result<TranslateOutcome> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_optional()?;

    let resolved = resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint.clone(),
            timeout_secs: options.timeout_secs,
            from: options.from.clone(),
            to: options.to.clone(),
        },
        &config_file,
    )?;

    let Some(input) = handle_prompt_cancellation(|| collect_input(&options, &resolved))? else {
        return Ok(TranslateOutcome::Cancelled);
    };

    // All three answers are collected before any of them is checked.
    let pair = validate_pair(&input.source, &input.target)?;
    if input.text.trim().is_empty() {
        return Err(InputError::EmptyText.into());
    }

    let client = TranslationClient::new(resolved.endpoint, resolved.token, resolved.timeout)?;
    translate_and_print(&client, pair, input.text).await
}

async fn translate_and_print(
    client: &TranslationClient,
    pair: LanguagePair,
    text: String,
) -> Result<TranslateOutcome> {
    let request = TranslationRequest {
        source_language: pair.source.code.to_string(),
        target_language: pair.target.code.to_string(),
        text,
    };

    let spinner = Spinner::new(format!(
        "Translating {} → {}...",
        pair.source.name, pair.target.name
    ));
    let result = client.translate(&request).await;
    spinner.stop();

    match result {
        Ok(translated) => {
            info!(
                source = pair.source.code,
                target = pair.target.code,
                "translation succeeded"
            );
            println!("Translation: {translated}");
            Ok(TranslateOutcome::Translated)
        }
        Err(e) => {
            if e.is_response_error() {
                error!(endpoint = client.endpoint(), "Error parsing translation response: {e}");
            } else {
                error!(endpoint = client.endpoint(), "Error calling translation API: {e}");
            }
            println!("Translation: Translation failed.");
            Ok(TranslateOutcome::Failed)
        }
    }
}

fn collect_input(options: &TranslateOptions, resolved: &ResolvedConfig) -> Result<UserInput> {
    if io::stdin().is_terminal() {
        collect_prompted(options, resolved)
    } else {
        collect_piped(options, resolved, io::stdin().lock())
    }
}

fn collect_prompted(options: &TranslateOptions, resolved: &ResolvedConfig) -> Result<UserInput> {
    let hint = choices_hint();

    let source = match &resolved.from {
        Some(source) => source.clone(),
        None => prompt_line(&format!("Please choose the source language: ({hint})"))?,
    };

    let target = match &resolved.to {
        Some(target) => target.clone(),
        None => prompt_line(&format!("Please choose the target language: ({hint})"))?,
    };

    let text = match explicit_text(options)? {
        Some(text) => text,
        None => prompt_line("Enter the text to translate:")?,
    };

    Ok(UserInput {
        source,
        target,
        text,
    })
}

/// Reads the answers missing from flags and config off a non-interactive
/// stdin, one per line, in prompt order.
///
/// When both languages are already known, the rest of the input is the text.
fn collect_piped<R: BufRead>(
    options: &TranslateOptions,
    resolved: &ResolvedConfig,
    mut reader: R,
) -> Result<UserInput> {
    let languages_known = resolved.from.is_some() && resolved.to.is_some();

    let source = match &resolved.from {
        Some(source) => source.clone(),
        None => read_answer(&mut reader, "source language")?,
    };

    let target = match &resolved.to {
        Some(target) => target.clone(),
        None => read_answer(&mut reader, "target language")?,
    };

    let text = match explicit_text(options)? {
        Some(text) => text,
        None if languages_known => InputReader::from_reader(reader)?,
        None => read_answer(&mut reader, "text to translate")?,
    };

    Ok(UserInput {
        source,
        target,
        text,
    })
}

fn explicit_text(options: &TranslateOptions) -> Result<Option<String>> {
    if let Some(text) = &options.text {
        return Ok(Some(text.clone()));
    }
    options
        .file
        .as_deref()
        .map(InputReader::from_file)
        .transpose()
}

fn read_answer<R: BufRead>(reader: &mut R, what: &'static str) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::MissingAnswer(what).into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_line(question: &str) -> Result<String> {
    println!("{}", Style::header(question));
    Ok(Text::new("Your Input:").prompt()?)
}
