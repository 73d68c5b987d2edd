use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::{Connection, ServerContext};

pub async fn run(listen_addr: &str, ctx: Arc<ServerContext>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("HTTP server up at {}", listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;

        let ctx = ctx.clone();
        tokio::spawn(async move {
            // Connection::run contains its own fault handling; nothing a
            // single connection does may take down the accept loop.
            Connection::new(socket, peer, ctx).run().await;
        });
    }
}
