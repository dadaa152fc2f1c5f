mod init;
mod mutate;
mod query;
mod schema;
mod seed;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::handle_serve;

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::graphql::RosterSchema;
use crate::storage::Database;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
    pub db: Database,
}

impl CommandContext {
    /// Load `.roster.yml` from the current directory upwards and open the database.
    ///
    /// An explicit `database` path wins over the config and also works in a
    /// directory that was never initialized.
    pub fn load(database: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, root) = match RosterConfig::load(&cwd) {
            Ok(loaded) => loaded,
            Err(RosterError::NotInitialized) if database.is_some() => {
                (RosterConfig::default(), cwd)
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context("Failed to load roster configuration"));
            }
        };

        let db_path = database.unwrap_or_else(|| config.database_path(&root));
        let db = Database::open_at(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
        Ok(Self { config, db })
    }
}

/// Run one GraphQL request against the context's database and print the response as JSON.
fn execute_and_print(
    schema: RosterSchema,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Invalid --variables JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
