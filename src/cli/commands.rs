//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goodthings")]
#[command(about = "One good thing a day: a tiny terminal journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Entry format (stamped, plain)
        #[arg(short, long, default_value = "stamped")]
        format: String,
    },

    /// Save a new entry, or update the one being edited
    Save {
        /// Entry text; multiple words are joined with spaces
        #[arg(value_name = "TEXT", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Start editing an entry; the next save updates it
    Edit {
        /// Index shown by `list`
        index: usize,
    },

    /// Delete an entry
    Delete {
        /// Index shown by `list`
        index: usize,
    },

    /// List entries, newest first
    List,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_joins_words() {
        let cli = Cli::parse_from(["goodthings", "save", "Had", "great", "coffee"]);
        match cli.command {
            Some(Commands::Save { text }) => assert_eq!(text.join(" "), "Had great coffee"),
            other => panic!("Expected Save, got {:?}", other),
        }
    }

    #[test]
    fn test_save_without_text() {
        let cli = Cli::parse_from(["goodthings", "save"]);
        assert!(matches!(cli.command, Some(Commands::Save { text }) if text.is_empty()));
    }

    #[test]
    fn test_edit_requires_numeric_index() {
        assert!(Cli::try_parse_from(["goodthings", "edit", "first"]).is_err());
        assert!(Cli::try_parse_from(["goodthings", "delete", "-1"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["goodthings", "list", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["goodthings"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
