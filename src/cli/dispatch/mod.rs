use crate::cli::actions::Action;
use clap::{ArgMatches, error::ErrorKind};

/// Convert `ArgMatches` into typed Action enum
#[must_use]
pub fn dispatch(matches: &ArgMatches) -> Action {
    let json = matches.get_flag("json");
    let strict = matches.get_flag("strict");

    Action::Probe { json, strict }
}

/// Like [`dispatch`], but bad arguments or env values fall back to the
/// defaults so the probe still runs
///
/// # Errors
///
/// Returns the clap error only for `--help` and `--version`, which the caller
/// is expected to print and exit on
pub fn dispatch_or_default(
    parsed: Result<ArgMatches, clap::Error>,
) -> Result<Action, clap::Error> {
    match parsed {
        Ok(matches) => Ok(dispatch(&matches)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Err(e),
        Err(e) => {
            eprintln!("ignoring arguments ({}), running with defaults", e.kind());
            Ok(Action::default())
        }
    }
}
