use tracing::info;
use tracing_subscriber::EnvFilter;

use peerstate::config::Config;
use peerstate::data::Session;
use peerstate::runtime;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("peerstate=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting peerstate replay...");

    let config = Config::from_env()?;
    info!("Configuration loaded for user {}", config.self_user_id);

    let mut session = Session::from_config(&config);
    let stats = runtime::run(&config, &mut session).await?;

    let bots = session.users().filter(|user| user.is_bot()).count();
    let contacts = session.users().filter(|user| user.is_contact()).count();
    let now = chrono::Utc::now().timestamp();
    let online = session
        .users()
        .filter(|user| user.lastseen().is_online(now))
        .count();
    info!(
        "Known users: {} ({} bots, {} contacts, {} online), {} updates applied",
        session.len(),
        bots,
        contacts,
        online,
        stats.updates
    );

    Ok(())
}
