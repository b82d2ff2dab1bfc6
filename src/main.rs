use clap::Parser;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use storystacks::application::{
    init, AddEntryService, ConfigService, DeleteEntryService, PinEntryService, ViewLogService,
};
use storystacks::cli::{
    format_entry_list, format_stats, format_year_options, format_years, Cli, Commands,
};
use storystacks::domain::{Category, CategoryFilter, EntryDraft, ViewFilters, YearFilter};
use storystacks::error::StacksError;
use storystacks::infrastructure::{FileSystemRepository, LogRepository};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("STORYSTACKS_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), StacksError> {
    match cli.command {
        Commands::Init { path } => {
            init::init(&path)?;
            println!("Initialized storystacks log at {}", path.display());
            Ok(())
        }
        Commands::Add {
            title,
            category,
            creator,
            date,
            rating,
            format,
            thoughts,
            highlights,
        } => {
            let repo = FileSystemRepository::discover()?;
            let category = match category {
                Some(value) => Category::from_str(&value).map_err(StacksError::InvalidCategory)?,
                None => repo.load_config()?.default_category,
            };

            let draft = EntryDraft {
                category,
                title,
                creator,
                date_finished: date,
                rating,
                format,
                thoughts,
                highlights,
            };

            let mut service = AddEntryService::new(repo.entry_store()?);
            let entry = service.execute(draft)?;
            println!("Added \"{}\" ({})", entry.title, entry.id);
            Ok(())
        }
        Commands::List {
            category,
            year,
            search,
        } => {
            let repo = FileSystemRepository::discover()?;
            let category =
                CategoryFilter::from_str(&category).map_err(StacksError::InvalidCategory)?;
            let year = YearFilter::from_str(&year).unwrap_or_default();
            let filters = ViewFilters {
                category,
                year: year.clone(),
                search,
            };

            let service = ViewLogService::new(repo.entry_store()?);
            let view = service.execute(&filters)?;

            println!("{}", format_stats(&view.stats));
            println!("{}", format_year_options(&view.years, &view.selected_year));
            if view.year_was_reset(&year) {
                println!("Year {} is not in the log; selector reset to all", year);
            }
            println!();
            println!("{}", format_entry_list(&view.entries).trim_end());
            Ok(())
        }
        Commands::Pin { id } => {
            let repo = FileSystemRepository::discover()?;
            let mut service = PinEntryService::new(repo.entry_store()?);

            match service.execute(&id)? {
                Some(entry) if entry.pinned => println!("Pinned \"{}\"", entry.title),
                Some(entry) => println!("Unpinned \"{}\"", entry.title),
                None => println!("No entry with id {}; nothing changed", id),
            }
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let repo = FileSystemRepository::discover()?;
            let mut service = DeleteEntryService::new(repo.entry_store()?);

            let Some(entry) = service.find(&id)? else {
                println!("No entry with id {}; nothing changed", id);
                return Ok(());
            };

            if !yes && !confirm(&format!("Delete \"{}\"? [y/N] ", entry.title))? {
                println!("Cancelled");
                return Ok(());
            }

            if let Some(removed) = service.execute(&id)? {
                println!("Deleted \"{}\"", removed.title);
            }
            Ok(())
        }
        Commands::Years => {
            let repo = FileSystemRepository::discover()?;
            let service = ViewLogService::new(repo.entry_store()?);
            print!("{}", format_years(&service.years()?));
            Ok(())
        }
        Commands::Stats => {
            let repo = FileSystemRepository::discover()?;
            let service = ViewLogService::new(repo.entry_store()?);
            println!("{}", format_stats(&service.stats()?));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("default_category = {}", config.default_category);
                println!("created = {}", config.created.to_rfc3339());
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
                println!("Usage: storystacks config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, default_category, created");
                Ok(())
            }
        }
    }
}

/// Ask a yes/no question on stdin; anything but y/yes (or EOF) is a no.
fn confirm(prompt: &str) -> Result<bool, StacksError> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
