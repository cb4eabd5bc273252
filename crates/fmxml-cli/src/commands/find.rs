//! Find commands
//!
//! Usage:
//!   fmxml find-all --layout <LAYOUT>
//!   fmxml find --layout <LAYOUT> --field NAME=VALUE [--field ...]
//!   fmxml find-id --layout <LAYOUT> --id <RECORD_ID>

use clap::Args;
use fmxml_core::FileMakerInterface;

use super::{parse_field, run, QueryArgs};

#[derive(Debug, Args)]
pub struct FindAllArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Field criterion NAME=VALUE, repeatable
    #[arg(long = "field", value_name = "NAME=VALUE", required = true, value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct FindIdArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Internal record id
    #[arg(long)]
    pub id: String,
}

pub fn execute_find_all(args: FindAllArgs) -> anyhow::Result<()> {
    run(&args.query, |fm| fm.find_all().map(drop))
}

pub fn execute_find(args: FindArgs) -> anyhow::Result<()> {
    let fields = args.fields;
    run(&args.query, move |fm| fm.find_by_fields(fields).map(drop))
}

pub fn execute_find_id(args: FindIdArgs) -> anyhow::Result<()> {
    let id = args.id;
    run(&args.query, move |fm| fm.find_by_record_id(id).map(drop))
}
