use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "fantasy-cricket scoring backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Load players.json and match.json before serving
        #[arg(long)]
        seed: bool,
    },
    /// Load players.json and match.json from DATA_DIR into the database
    Seed,
    /// Score every stored team against the match log
    Process,
    /// Show the current winning teams
    Results,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["fantasy-cricket", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000, seed: false });
    }

    #[test]
    fn test_serve_with_seed() {
        let cli = Cli::try_parse_from(["fantasy-cricket", "serve", "-p", "8080", "--seed"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 8080, seed: true });
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["fantasy-cricket", "completions", "bash"]).unwrap();
        assert_eq!(cli.command, Command::Completions { shell: Shell::Bash });
    }
}
