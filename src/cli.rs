use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a session-local user directory from the terminal", version)]
#[command(after_help = "EXAMPLES:
    roster                        Open the interactive screen
    roster list                   Print the first page of the directory
    roster list --page 2          Print the second page
    roster list --all --json      Dump every record as JSON
    roster init                   Write the config file interactively")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for non-interactive commands (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress status messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive directory screen (the default)
    #[command(
        alias = "b",
        after_help = "EXAMPLES:
    roster browse
    roster                        Same thing; browse is the default"
    )]
    Browse,
    /// Fetch the directory once and print a page of it
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    roster list
    roster list --page 2
    roster list --all --format compact"
    )]
    List(ListArgs),
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    roster init")]
    Init,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    roster completions bash > ~/.bash_completion.d/roster
    roster completions zsh > ~/.zfunc/_roster
    roster completions fish > ~/.config/fish/completions/roster.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Page to print (1-based)
    #[arg(long, short, default_value = "1")]
    pub page: usize,

    /// Print every record instead of one page
    #[arg(long)]
    pub all: bool,
}
