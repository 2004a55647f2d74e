use clap::Parser;
use goodthings::application::{init::init, ConfigService, JournalService};
use goodthings::cli::{format_entry_list, format_save_outcome, Cli, Commands};
use goodthings::domain::{EntryFormat, SystemClock};
use goodthings::error::GoodThingsError;
use goodthings::infrastructure::FileSystemRepository;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; `GOODTHINGS_LOG` overrides the level picked by `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GOODTHINGS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

fn open_journal() -> Result<JournalService<FileSystemRepository, SystemClock>, GoodThingsError> {
    JournalService::open(FileSystemRepository::discover()?)
}

fn run(cli: Cli) -> Result<(), GoodThingsError> {
    match cli.command {
        Some(Commands::Init { path, format }) => {
            let format = EntryFormat::from_str(&format).map_err(GoodThingsError::Config)?;
            init(&path, format)
        }
        Some(Commands::Save { text }) => {
            let mut journal = open_journal()?;
            let outcome = journal.save(&text.join(" "))?;
            println!("{}", format_save_outcome(outcome));
            Ok(())
        }
        Some(Commands::Edit { index }) => {
            let mut journal = open_journal()?;
            let text = journal.begin_edit(index)?;
            println!("{}", text);
            eprintln!(
                "Editing entry {}. Run 'goodthings save <text>' to update it.",
                index
            );
            Ok(())
        }
        Some(Commands::Delete { index }) => {
            let mut journal = open_journal()?;
            let removed = journal.delete(index)?;
            println!("Deleted entry {}: {}", index, removed.text);
            Ok(())
        }
        Some(Commands::List) | None => {
            let journal = open_journal()?;
            let store = journal.store();
            print!("{}", format_entry_list(store.entries(), store.edit_cursor()));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("format = {}", config.format);
                println!("storage_key = {}", config.storage_key);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: goodthings config [--list | <key> [<value>]]");
                println!("Valid keys: format, storage_key");
                Ok(())
            }
        }
    }
}
