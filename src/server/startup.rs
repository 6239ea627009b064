use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{session_store, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParam,
    service::user::UserService,
};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is current before
/// any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite pool.
///
/// Sessions expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SessionStoreErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());

    store
        .migrate()
        .await
        .map_err(|e| session_store::Error::Backend(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the configured administrator when no admin account exists yet.
///
/// Without `ADMIN_EMAIL` and `ADMIN_PASSWORD` a warning is logged instead, since
/// nobody will be able to reach the moderation pages.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No administrator account exists, set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
        );
        return Ok(());
    };

    let admin = UserService::new(db)
        .register(CreateUserParam {
            name: Some("Administrator".to_string()),
            email: email.clone(),
            password: password.clone(),
            role: entity::user::Role::Admin,
        })
        .await?;

    tracing::info!("Created administrator account {}", admin.email);

    Ok(())
}
