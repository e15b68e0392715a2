use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;

/// Open a connection pool and bring the schema up to date.
///
/// In-memory `SQLite` databases live only as long as their connection, so the
/// pool is pinned to a single connection for them.
///
/// # Errors
/// Returns an error if the database cannot be reached or a migration fails.
pub async fn connect(dsn: &str, max_conns: u32) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(dsn.to_owned());
    if is_in_memory(dsn) {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(max_conns);
    }
    opts.sqlx_logging(false);

    let db = Database::connect(opts).await?;
    tracing::info!(dsn = %redact_dsn(dsn), "database connected");

    Migrator::up(&db, None).await?;
    tracing::info!("issue-tracker migrations applied");

    Ok(db)
}

fn is_in_memory(dsn: &str) -> bool {
    dsn.starts_with("sqlite:") && dsn.contains(":memory:")
}

/// Strip the password from a DSN before it is logged.
#[must_use]
pub fn redact_dsn(dsn: &str) -> String {
    let Some((scheme, rest)) = dsn.split_once("://") else {
        return dsn.to_owned();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return dsn.to_owned();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => dsn.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_dsn_hides_password() {
        assert_eq!(
            redact_dsn("postgres://issues:secret@db:5432/issues"),
            "postgres://issues:***@db:5432/issues"
        );
    }

    #[test]
    fn test_redact_dsn_leaves_sqlite_untouched() {
        assert_eq!(redact_dsn("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            redact_dsn("sqlite://issues.db?mode=rwc"),
            "sqlite://issues.db?mode=rwc"
        );
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(!is_in_memory("sqlite://issues.db"));
    }
}
