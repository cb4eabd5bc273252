//! fmxml CLI
//!
//! Runs one command against the server configured by the `FM_*`
//! environment variables and prints the matching records as JSON.

use clap::{Parser, Subcommand};
use fmxml_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fmxml")]
#[command(about = "fmxml - FileMaker XML web publishing client", long_about = None)]
struct Cli {
    /// Emit JSON logs on stderr instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find every record on the layout
    FindAll(commands::find::FindAllArgs),
    /// Find records matching field values
    Find(commands::find::FindArgs),
    /// Find one record by its record id
    FindId(commands::find::FindIdArgs),
    /// Create a record
    Create(commands::record::CreateArgs),
    /// Update fields of an existing record
    Update(commands::record::UpdateArgs),
    /// Delete a record
    Delete(commands::record::DeleteArgs),
    /// Run a script
    Script(commands::script::ScriptArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::FindAll(args) => commands::find::execute_find_all(args),
        Commands::Find(args) => commands::find::execute_find(args),
        Commands::FindId(args) => commands::find::execute_find_id(args),
        Commands::Create(args) => commands::record::execute_create(args),
        Commands::Update(args) => commands::record::execute_update(args),
        Commands::Delete(args) => commands::record::execute_delete(args),
        Commands::Script(args) => commands::script::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find_with_modifiers() {
        let cli = Cli::try_parse_from([
            "fmxml",
            "find",
            "--layout",
            "people",
            "--field",
            "LastName=Smith",
            "--sort",
            "FirstName:1:ascend",
            "--max",
            "5",
            "--json-logs",
        ])
        .unwrap();

        assert!(cli.json_logs);
        match cli.command {
            Commands::Find(args) => {
                assert_eq!(args.fields, vec![("LastName".to_string(), "Smith".to_string())]);
                assert_eq!(args.query.layout, "people");
                assert_eq!(args.query.max, Some(5));
                assert_eq!(args.query.sort.len(), 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_layout_is_required() {
        assert!(Cli::try_parse_from(["fmxml", "find-all"]).is_err());
    }
}
