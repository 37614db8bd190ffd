use std::fmt::Display;

use axum::Router;
use derive_builder::Builder;
use tokio::net::{TcpListener, ToSocketAddrs};

/// Minimal axum server: bind, log the address once, serve until the process
/// is terminated. A bind failure propagates out of `serve` and is fatal.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct HttpServer<Address> {
    pub router: Router,

    #[builder(setter(name = "bind"))]
    pub listen_addr: Address,
}

impl<Address: ToSocketAddrs + Display> HttpServer<Address> {
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;

        log::info!("Server listening on {}", self.listen_addr);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
