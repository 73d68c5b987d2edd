use std::sync::Arc;

use leviot::config::Config;
use leviot::device::LocalDevice;
use leviot::http::connection::ServerContext;
use leviot::logger::Logger;
use leviot::server;

// Single-threaded cooperative scheduling: one task per connection, shared
// with the device's primary control loop.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let log = Logger::new("http_server", cfg.syslog_addr.as_deref(), None);
    let device = Arc::new(LocalDevice::default());
    let ctx = Arc::new(ServerContext::from_config(&cfg, device, log));

    tokio::select! {
        res = server::listener::run(&cfg.listen_addr, ctx) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
