use crate::graphql::build_schema;
use crate::storage::Database;
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    // The SDL does not depend on stored data.
    let schema = build_schema(Database::open_in_memory()?);
    print!("{}", schema.sdl());
    Ok(())
}
