use color_eyre::eyre::Result;
use tether_adapters::{
    config::AuthServiceSetting,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};
use tether_auth_service::{AuthService, helpers::configure_postgresql, tracing::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AuthServiceSetting::load()?;
    let allowed_origins = settings.allowed_origins();

    let auth_service = match &settings.postgres {
        Some(postgres) => {
            let pg_pool = configure_postgresql(&postgres.url).await?;
            tracing::info!("Using PostgreSQL account store");
            AuthService::from_settings(PostgresAccountStore::new(pg_pool), &settings.auth)?
        }
        None => {
            tracing::warn!("No PostgreSQL configured, accounts are kept in memory");
            AuthService::from_settings(HashMapAccountStore::new(), &settings.auth)?
        }
    };

    let listener = TcpListener::bind(settings.application.address()).await?;
    auth_service
        .run_standalone(listener, Some(allowed_origins))
        .await?;

    Ok(())
}
