use anyhow::Result;
use clap::Parser;

use roster::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_seed,
    handle_serve,
};
use roster::cli::{Cli, Commands};
use roster::logging;

fn main() -> Result<()> {
    let Cli {
        command,
        database,
        verbose,
        log_file,
    } = Cli::parse();

    logging::init(verbose, log_file);

    match command {
        Commands::Init => handle_init(database),
        Commands::Schema => handle_schema(),
        Commands::Serve { host, port } => {
            handle_serve(CommandContext::load(database)?, host, port)
        }
        Commands::Query { query, variables } => {
            handle_query(CommandContext::load(database)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(CommandContext::load(database)?, mutation, variables),
        Commands::Seed => handle_seed(CommandContext::load(database)?),
    }
}
