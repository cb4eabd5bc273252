//! Subcommand implementations and the arguments they share

pub mod find;
pub mod record;
pub mod script;

use std::io::Write;

use anyhow::Context;
use clap::Args;
use fmxml_core::{FileMaker, FileMakerInterface, SortSpec, Transport};
use fmxml_http::{HostConnection, HttpTransport};

/// Arguments every subcommand accepts
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Layout to run the command on
    #[arg(long)]
    pub layout: String,

    /// Maximum number of records to return
    #[arg(long)]
    pub max: Option<u32>,

    /// Number of records to skip
    #[arg(long)]
    pub skip: Option<u32>,

    /// Sort entry FIELD:RANK[:ascend|descend], repeatable
    #[arg(long = "sort", value_name = "FIELD:RANK[:DIRECTION]", value_parser = parse_sort)]
    pub sort: Vec<SortSpec>,
}

/// Parse `NAME=VALUE`; the value may be empty
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

/// Parse `FIELD:RANK[:DIRECTION]`
///
/// Split from the right so related field names like `Notes::Body` survive.
/// Rank bounds and direction spelling are left to `CommandBuilder::sort`.
pub fn parse_sort(raw: &str) -> Result<SortSpec, String> {
    let invalid = || format!("expected FIELD:RANK[:DIRECTION], got '{}'", raw);

    let (head, last) = raw.rsplit_once(':').ok_or_else(invalid)?;
    if let Ok(rank) = last.parse::<i64>() {
        return Ok(SortSpec::new(head, rank));
    }
    let (field, rank) = head.rsplit_once(':').ok_or_else(invalid)?;
    let rank = rank.parse::<i64>().map_err(|_| invalid())?;
    Ok(SortSpec::new(field, rank).with_direction(last))
}

/// Connect with the environment configuration
pub fn connect() -> anyhow::Result<FileMaker<HttpTransport>> {
    let connection = HostConnection::from_env().context("invalid connection configuration")?;
    let transport = HttpTransport::new(&connection)?;
    Ok(FileMaker::new(transport, connection.database))
}

/// Build one command, execute it and print the records
///
/// `RecordsNotFound` prints an empty list; every other failure is returned.
pub fn run_query<T, F, W>(
    fm: &mut FileMaker<T>,
    query: &QueryArgs,
    build: F,
    out: &mut W,
) -> anyhow::Result<()>
where
    T: Transport,
    F: FnOnce(&mut FileMaker<T>) -> fmxml_core::Result<()>,
    W: Write,
{
    fm.set_layout(&query.layout)?;
    build(fm)?;
    if let Some(max) = query.max {
        fm.max(max);
    }
    if let Some(skip) = query.skip {
        fm.skip(skip);
    }
    if !query.sort.is_empty() {
        fm.sort(&query.sort)?;
    }

    let records = match fm.execute_command() {
        Ok(result) => result.records,
        Err(err) if err.is_records_not_found() => Vec::new(),
        Err(err) => return Err(err.into()),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

/// `run_query` against the environment configuration, printing to stdout
pub fn run<F>(query: &QueryArgs, build: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut FileMaker<HttpTransport>) -> fmxml_core::Result<()>,
{
    let mut fm = connect()?;
    run_query(&mut fm, query, build, &mut std::io::stdout().lock())
}
