// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, paths, Flags};

const HELP: &str = "\
iced_carousel - responsive slide carousel

USAGE:
  iced_carousel [OPTIONS] [SOURCE]

ARGS:
  SOURCE                 A .toml slide deck or a directory of images.
                         Without it the built-in demo slides are shown.

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --autoplay-ms <MS>     Delay between automatic advances
  --no-autoplay          Never advance automatically
  --no-controls          Hide the previous/next buttons
  -h, --help             Print this help
";

/// Command line rejected before the application starts.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] pico_args::Error),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Parses the command line. `Ok(None)` means help was requested.
///
/// Options are taken first, then at most one free SOURCE argument. Anything
/// left over, or a SOURCE that looks like an option, is rejected.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, CliError> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let autoplay_ms = args.opt_value_from_str("--autoplay-ms")?;
    let no_autoplay = args.contains("--no-autoplay");
    let no_controls = args.contains("--no-controls");

    let source: Option<String> = args.opt_free_from_str()?;
    if let Some(option) = source.as_deref().filter(|arg| arg.starts_with('-')) {
        return Err(CliError::UnknownOption(option.to_string()));
    }

    if let Some(extra) = args.finish().into_iter().next() {
        let extra = extra.to_string_lossy().into_owned();
        return Err(if extra.starts_with('-') {
            CliError::UnknownOption(extra)
        } else {
            CliError::UnexpectedArgument(extra)
        });
    }

    Ok(Some(Flags {
        lang,
        source,
        config_dir,
        autoplay_ms,
        no_autoplay,
        no_controls,
    }))
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("info,wgpu_core=warn,wgpu_hal=warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Flags>, CliError> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn parses_options_and_source() {
        let flags = parse(&[
            "--lang",
            "fr",
            "--autoplay-ms",
            "2500",
            "--no-controls",
            "deck.toml",
        ])
        .expect("valid command line")
        .expect("not a help request");

        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.autoplay_ms, Some(2500));
        assert!(flags.no_controls);
        assert!(!flags.no_autoplay);
        assert_eq!(flags.source.as_deref(), Some("deck.toml"));
    }

    #[test]
    fn no_arguments_shows_demo() {
        let flags = parse(&[]).expect("valid command line").expect("flags");
        assert_eq!(flags.source, None);
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["deck.toml", "-h"]), Ok(None)));
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(matches!(
            parse(&["--bogus"]),
            Err(CliError::UnknownOption(option)) if option == "--bogus"
        ));
    }

    #[test]
    fn misspelled_option_after_source_is_rejected() {
        assert!(matches!(
            parse(&["deck.toml", "--no-autoplya"]),
            Err(CliError::UnknownOption(option)) if option == "--no-autoplya"
        ));
    }

    #[test]
    fn extra_source_is_rejected() {
        assert!(matches!(
            parse(&["one.toml", "two.toml"]),
            Err(CliError::UnexpectedArgument(arg)) if arg == "two.toml"
        ));
    }

    #[test]
    fn invalid_option_value_is_rejected() {
        assert!(matches!(
            parse(&["--autoplay-ms", "soon"]),
            Err(CliError::Parse(_))
        ));
    }
}
