//! Mapping of failures to process exit codes.

use exitcode::ExitCode;

use super::commands::translate::{InputError, TranslateOutcome};
use crate::config::MissingTokenError;
use crate::translation::SelectionError;

/// Exit code for a translate run that finished without an error.
pub const fn outcome_code(outcome: TranslateOutcome) -> ExitCode {
    match outcome {
        TranslateOutcome::Translated | TranslateOutcome::Cancelled => exitcode::OK,
        TranslateOutcome::Failed => exitcode::UNAVAILABLE,
    }
}

/// Exit code for an error that aborted the program.
pub fn error_code(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<MissingTokenError>().is_some() {
        exitcode::CONFIG
    } else if err.downcast_ref::<SelectionError>().is_some()
        || err.downcast_ref::<InputError>().is_some()
    {
        exitcode::USAGE
    } else {
        exitcode::SOFTWARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_code() {
        assert_eq!(outcome_code(TranslateOutcome::Translated), exitcode::OK);
        assert_eq!(outcome_code(TranslateOutcome::Cancelled), exitcode::OK);
        assert_eq!(outcome_code(TranslateOutcome::Failed), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_error_code_missing_token() {
        let err = anyhow::Error::new(MissingTokenError {
            env_var: "AUTH_TOKEN".to_string(),
        });
        assert_eq!(error_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_error_code_bad_selection() {
        assert_eq!(
            error_code(&SelectionError::Invalid.into()),
            exitcode::USAGE
        );
        assert_eq!(
            error_code(&SelectionError::SameLanguage.into()),
            exitcode::USAGE
        );
        assert_eq!(error_code(&InputError::EmptyText.into()), exitcode::USAGE);
    }

    #[test]
    fn test_error_code_with_context_still_classified() {
        let err = anyhow::Error::new(SelectionError::Invalid).context("while translating");
        assert_eq!(error_code(&err), exitcode::USAGE);
    }

    #[test]
    fn test_error_code_other() {
        assert_eq!(
            error_code(&anyhow::anyhow!("disk on fire")),
            exitcode::SOFTWARE
        );
    }
}
