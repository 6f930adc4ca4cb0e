use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Secret Santa - get your holiday alias and spin the wheel of fortune
#[derive(Parser, Debug)]
#[command(name = "secret-santa")]
#[command(about = "A festive terminal app for Secret Santa aliases and name spinning")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Alias endpoint URL (overrides the configuration file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Write logs to this file. RUST_LOG controls the level.
    ///
    /// Without a log file the interactive UI stays silent unless RUST_LOG
    /// is set, so log lines don't scribble over the screen.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Wheel settling delay in milliseconds (overrides the configuration file)
    #[arg(long, global = true)]
    pub settle_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal UI (default)
    Run,
    /// Request an alias once and print it
    Submit {
        /// Email address to register
        #[arg(short, long)]
        email: String,
        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Spin the wheel once and print the result
    Spin {
        /// Comma-separated names (defaults to the configured list)
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,
        /// Seed for a reproducible spin
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["secret-santa"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_submit_args() {
        let cli = Cli::try_parse_from([
            "secret-santa",
            "submit",
            "--email",
            "santa@northpole.com",
            "--name",
            "Kris Kringle",
            "--endpoint",
            "http://localhost:8080/api/users",
        ])
        .unwrap();
        assert!(!cli.is_interactive());
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:8080/api/users")
        );
        match cli.command {
            Some(Commands::Submit { email, name }) => {
                assert_eq!(email, "santa@northpole.com");
                assert_eq!(name, "Kris Kringle");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_spin_names_are_comma_separated() {
        let cli =
            Cli::try_parse_from(["secret-santa", "spin", "--names", "A,B,C", "--seed", "4"])
                .unwrap();
        match cli.command {
            Some(Commands::Spin { names, seed, .. }) => {
                assert_eq!(names, vec!["A", "B", "C"]);
                assert_eq!(seed, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_settle_ms_is_global() {
        let cli = Cli::try_parse_from(["secret-santa", "spin", "--settle-ms", "250"]).unwrap();
        assert_eq!(cli.settle_ms, Some(250));

        let cli = Cli::try_parse_from(["secret-santa", "--settle-ms", "1000", "run"]).unwrap();
        assert_eq!(cli.settle_ms, Some(1000));
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_submit_requires_fields() {
        assert!(Cli::try_parse_from(["secret-santa", "submit", "--email", "a@b.c"]).is_err());
    }
}
