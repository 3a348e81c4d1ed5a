use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use accessos_api::models::Site;
use tokio::net::TcpListener;

use crate::controller::ControllerState;
use crate::routes::router;
use crate::settings::{Credentials, Settings};

pub mod controller;
pub mod routes;
pub mod settings;

pub async fn run(settings: &Arc<Settings>) -> io::Result<()> {
    let ip_addr = settings
        .controller
        .host
        .parse::<IpAddr>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let address = SocketAddr::from((ip_addr, settings.controller.port));

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("controller simulator listening on {:?}", address);

    let state = ControllerState::new(settings.controller.credentials.clone(), Site::sample());

    axum::serve(listener, router(state)).await
}

/// Serves a simulator on an ephemeral loopback port in the background.
///
/// Returns the bound address together with the state, so callers can inspect
/// or tamper with the site and the session table while it runs.
pub async fn spawn(credentials: Credentials, site: Site) -> io::Result<(SocketAddr, ControllerState)> {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
    let address = listener.local_addr()?;

    let state = ControllerState::new(credentials, site);
    let app = router(state.clone());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("controller simulator stopped: {e}");
        }
    });

    Ok((address, state))
}
