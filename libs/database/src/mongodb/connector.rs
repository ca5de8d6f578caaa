use mongodb::{
    Client,
    bson::doc,
    options::{ClientOptions, Credential},
};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Build driver options from a [`MongoConfig`]
///
/// Credentials are attached only when a username or password is configured;
/// they authenticate against `auth_db`, or the target database when unset.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(config.url()).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout());
    options.server_selection_timeout = Some(config.server_selection_timeout());

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    if let Some((username, password)) = config.credentials() {
        options.credential = Some(
            Credential::builder()
                .username(username.to_string())
                .password(password.to_string())
                .source(config.auth_source().to_string())
                .build(),
        );
    }

    Ok(options)
}

/// Connect to MongoDB and verify liveness with a `ping` round trip
///
/// No retry is attempted: a failed handshake or ping is returned to the
/// caller, which treats it as fatal at startup.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect};
///
/// let config = MongoConfig::with_database("localhost", 27017, "mydb");
/// let client = connect(&config).await?;
/// let db = client.database(config.database());
/// ```
#[instrument(skip(config), fields(url = %config.url(), database = %config.database()))]
pub async fn connect(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB");

    let options = client_options(config).await?;
    let client = Client::with_options(options)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    ping(&client, config.database(), config.connect_timeout()).await?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Run `{ ping: 1 }` against `database`, bounded by `timeout`
pub async fn ping(client: &Client, database: &str, timeout: Duration) -> DatabaseResult<()> {
    let db = client.database(database);
    let probe = async move { db.run_command(doc! { "ping": 1 }).await };

    match tokio::time::timeout(timeout, probe).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(DatabaseError::ConnectionFailed(e.to_string())),
        Err(_) => Err(DatabaseError::Timeout(timeout)),
    }
}
