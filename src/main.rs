use clap::Parser;
use std::process;

use taskdeck::cli;
use taskdeck::cli::commands::{Cli, Commands};
use taskdeck::models::Status;
use taskdeck::store::persist;

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let store_path = cli_args
        .store
        .clone()
        .unwrap_or_else(persist::default_store_path);

    let exit_code = match cli_args.command {
        Commands::Add {
            title,
            description,
            due,
            priority,
        } => cli::task::run_add(
            &store_path,
            &title,
            description.as_deref(),
            due,
            priority,
            json_output,
        ),
        Commands::List {
            status,
            priority,
            sort,
        } => cli::list::run(&store_path, status, priority, sort, json_output),
        Commands::Show { id } => cli::task::run_show(&store_path, &id, json_output),
        Commands::Edit {
            id,
            title,
            description,
            due,
            priority,
        } => cli::task::run_edit(
            &store_path,
            &id,
            title,
            description,
            due,
            priority,
            json_output,
        ),
        Commands::Status { id, status } => {
            cli::task::run_set_status(&store_path, &id, status, json_output)
        }
        Commands::Done { id } => {
            cli::task::run_set_status(&store_path, &id, Status::Done, json_output)
        }
        Commands::Reopen { id } => {
            cli::task::run_set_status(&store_path, &id, Status::Todo, json_output)
        }
        Commands::Delete { id } => cli::task::run_delete(&store_path, &id, json_output),
        Commands::Stats => cli::stats::run(&store_path, json_output),
    };

    process::exit(exit_code);
}
