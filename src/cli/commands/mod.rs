use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::{
        BoolishValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .after_help(
            "The database is read from DB_HOST, DB_NAME, DB_USER and DB_PASSWORD; \
             if any of them is unset the connection is skipped.",
        )
        .arg(
            Arg::new("json")
                .env("DBPROBE_JSON")
                .help("print a JSON summary line after the probe")
                .long("json")
                .short('j')
                .action(ArgAction::SetTrue)
                .value_parser(BoolishValueParser::new()),
        )
        .arg(
            Arg::new("strict")
                .env("DBPROBE_STRICT")
                .help("exit with status 1 when the connection fails")
                .long("strict")
                .short('s')
                .action(ArgAction::SetTrue)
                .value_parser(BoolishValueParser::new()),
        )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::new;

    #[test]
    fn test_new() {
        let cmd = new();
        assert_eq!(cmd.get_name(), "dbprobe");
        assert_eq!(
            cmd.get_about().unwrap().to_string(),
            env!("CARGO_PKG_DESCRIPTION")
        );
        assert_eq!(
            cmd.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_new_no_args() {
        let m = new().try_get_matches_from(["dbprobe"]).unwrap();
        assert!(!m.get_flag("json"));
        assert!(!m.get_flag("strict"));
    }

    #[test]
    fn test_new_flags() {
        let m = new()
            .try_get_matches_from(["dbprobe", "--json", "--strict"])
            .unwrap();
        assert!(m.get_flag("json"));
        assert!(m.get_flag("strict"));

        let m = new().try_get_matches_from(["dbprobe", "-j"]).unwrap();
        assert!(m.get_flag("json"));
        assert!(!m.get_flag("strict"));
    }

    #[test]
    fn test_new_rejects_positional() {
        let matches = new().try_get_matches_from(["dbprobe", "postgres://localhost/db"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_new_debug_assert() {
        new().debug_assert();
    }
}
