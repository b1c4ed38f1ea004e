use clap::Parser;

/// Console assistant for contacts and notes.
///
/// Starts an interactive session. Type `help` at the prompt to list commands.
/// Data lives in `$OSTAP_HOME`, or the platform data directory when unset.
#[derive(Parser, Debug)]
#[command(name = "ostap", version)]
#[command(about = "Console assistant for contacts and notes", long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["ostap"]).is_ok());
        assert!(Cli::try_parse_from(["ostap", "--global"]).is_err());
    }
}
