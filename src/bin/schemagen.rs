//! Resource Schema Generator
//!
//! This binary prints the declared attribute schema of the resources
//! managed by the datastore-file-operator as JSON, for consumption by the
//! host engine's configuration tooling.
//!
//! Usage: cargo run --bin schemagen

use datastore_file_operator::schema::file_schema;

fn main() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&file_schema())?);
    Ok(())
}
