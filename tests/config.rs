use anyhow::Result;
use column_transformers::config::{self, DatabaseConfig, DatabaseType, DB_TYPE_ENV};
use column_transformers::TransformError;

#[test]
fn parses_database_types() -> Result<()> {
    assert_eq!("sqlite".parse::<DatabaseType>()?, DatabaseType::Sqlite);
    assert_eq!("Postgres".parse::<DatabaseType>()?, DatabaseType::Postgresdb);
    assert_eq!("postgresdb".parse::<DatabaseType>()?, DatabaseType::Postgresdb);
    assert_eq!(" mysql ".parse::<DatabaseType>()?, DatabaseType::Mysqldb);
    assert_eq!("MARIADB".parse::<DatabaseType>()?, DatabaseType::Mariadb);
    assert!(matches!(
        "oracle".parse::<DatabaseType>(),
        Err(TransformError::Config { .. })
    ));
    Ok(())
}

#[test]
fn only_sqlite_lacks_native_json() {
    assert!(!DatabaseType::Sqlite.has_native_json());
    assert!(DatabaseType::Postgresdb.has_native_json());
    assert!(DatabaseType::Mysqldb.has_native_json());
    assert!(DatabaseType::Mariadb.has_native_json());
    assert_eq!(DatabaseType::default(), DatabaseType::Sqlite);
}

#[test]
fn deserializes_config() -> Result<()> {
    let config: DatabaseConfig = serde_json::from_str(r#"{"type": "postgres"}"#)?;
    assert_eq!(config.db_type, DatabaseType::Postgresdb);

    let config: DatabaseConfig = serde_json::from_str("{}")?;
    assert_eq!(config.db_type, DatabaseType::Sqlite);
    Ok(())
}

#[test]
fn reads_engine_from_environment() -> Result<()> {
    std::env::set_var(DB_TYPE_ENV, "mariadb");
    let config = DatabaseConfig::from_env();
    std::env::set_var(DB_TYPE_ENV, "nope");
    let invalid = DatabaseConfig::from_env();
    std::env::remove_var(DB_TYPE_ENV);

    assert_eq!(config?.db_type, DatabaseType::Mariadb);
    assert!(invalid.is_err());
    assert_eq!(DatabaseConfig::from_env()?.db_type, DatabaseType::Sqlite);
    Ok(())
}

#[test]
fn process_configuration_is_installed_once() -> Result<()> {
    config::init(DatabaseConfig::new(DatabaseType::Postgresdb))?;
    assert_eq!(config::database_type(), DatabaseType::Postgresdb);

    let err = config::init(DatabaseConfig::new(DatabaseType::Sqlite)).unwrap_err();
    assert!(matches!(err, TransformError::Config { .. }));
    assert_eq!(config::database_type(), DatabaseType::Postgresdb);
    Ok(())
}
