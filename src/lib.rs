//! # sunbird-translate
//!
//! A small command-line client for the Sunbird AI translation service.
//! It asks for a source language, a target language and some text, sends
//! one request to the NLLB translation endpoint and prints the result.
//!
//! ## Supported languages
//!
//! English, Luganda, Runyankole, Ateso, Lugbara and Acholi. Run
//! `sunbird-translate languages` to see the codes sent to the API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Put the token in .env (or export it)
//! echo 'AUTH_TOKEN=...' > .env
//!
//! # Interactive
//! sunbird-translate
//!
//! # Non-interactive
//! sunbird-translate --from English --to Luganda "Good morning"
//! ```
//!
//! ## Configuration
//!
//! Optional defaults live in `~/.config/sunbird/config.toml`:
//!
//! ```toml
//! [sunbird]
//! from = "English"
//! to = "Luganda"
//! timeout_secs = 30
//! auth_token_env = "AUTH_TOKEN"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and access token lookup.
pub mod config;

/// File system utilities.
pub mod fs;

/// Reading text from files and stdin.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client and the supported language table.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt helpers).
pub mod ui;
