use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sunbird-translate")]
#[command(about = "Translate text between English and Ugandan languages with Sunbird AI")]
#[command(version)]
pub struct Args {
    /// Text to translate (prompted for if not provided)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Source language name (e.g., English, Luganda)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language name (e.g., Acholi, Ateso)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Read the text to translate from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Translation API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure default languages and endpoint
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported languages and their codes
    Languages,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_interactive_translation() {
        let args = Args::try_parse_from([
            "sunbird-translate",
            "--from",
            "English",
            "--to",
            "Luganda",
            "Good morning",
        ])
        .unwrap();

        assert_eq!(args.from.as_deref(), Some("English"));
        assert_eq!(args.to.as_deref(), Some("Luganda"));
        assert_eq!(args.text.as_deref(), Some("Good morning"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = Args::try_parse_from(["sunbird-translate", "--file", "in.txt", "hello"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_configure_show() {
        let args = Args::try_parse_from(["sunbird-translate", "configure", "--show"]).unwrap();
        assert!(matches!(args.command, Some(Command::Configure { show: true })));
    }
}
