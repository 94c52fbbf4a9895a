//! `uigen` CLI library.
//!
//! Command implementations and output formatters, exposed as a library so
//! they can be tested without spawning the binary.

use uigen_core::cli::ExitCode;

pub mod commands;
pub mod formatters;

/// Maps a command failure to the process exit code.
///
/// The first [`uigen_core::Error`] in the error chain decides the code;
/// failures that do not come from the generator libraries exit with
/// [`ExitCode::ERROR`].
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use uigen_cli::exit_code_for;
/// use uigen_core::Error;
/// use uigen_core::cli::ExitCode;
///
/// let err = Err::<(), _>(Error::TemplateNotFound { name: "index.html".into() })
///     .context("generation failed")
///     .unwrap_err();
/// assert_eq!(exit_code_for(&err), ExitCode::TEMPLATE_MISSING);
/// assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<uigen_core::Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
