use std::sync::Arc;

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase};

use crate::database::Database;

const SCHEMA: &str = include_str!("../schema.sql");

/// `schema.sql` split into executable statements, `--` lines dropped.
fn schema_statements() -> impl Iterator<Item = String> {
    SCHEMA
        .split(';')
        .map(|stmt| {
            stmt.lines()
                .filter(|line| !line.trim_start().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|stmt| !stmt.is_empty())
}

/// Fresh in-memory SQLite database with the catalog tables created.
pub async fn test_db() -> Arc<Database> {
    // Each connection to `sqlite::memory:` is its own database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = SeaDatabase::connect(options)
        .await
        .expect("in-memory SQLite should open");

    for stmt in schema_statements() {
        if let Err(err) = conn.execute_unprepared(&stmt).await {
            panic!("schema.sql statement failed: {err}\n{stmt}");
        }
    }

    Arc::new(Database::from_connection(conn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_creates_every_catalog_table() {
        let statements: Vec<String> = schema_statements().collect();
        assert_eq!(statements.len(), 4);

        for table in [
            "album_table",
            "singers_table",
            "song_category_table",
            "songs_table",
        ] {
            assert!(
                statements
                    .iter()
                    .any(|stmt| stmt.starts_with(&format!("CREATE TABLE IF NOT EXISTS {table} "))),
                "{table}"
            );
        }
    }
}
