use column_transformers::config::{self, DatabaseType, DB_TYPE_ENV};

// Runs in its own binary so the process-wide configuration starts empty.
#[test]
fn invalid_environment_falls_back_to_sqlite() {
    std::env::set_var(DB_TYPE_ENV, "nope");
    let db_type = config::database_type();
    std::env::remove_var(DB_TYPE_ENV);

    assert_eq!(db_type, DatabaseType::Sqlite);
    assert_eq!(config::get().db_type, DatabaseType::Sqlite);
}
