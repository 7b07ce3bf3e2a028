//! Run the dashboard HTTP server.

use std::net::SocketAddr;

use crate::error::{Error, Result};
use crate::server;
use crate::workspace::Workspace;

/// Execute the serve command.
///
/// Blocks until the server is shut down.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the runtime
/// cannot start, or the workspace cannot be bootstrapped.
pub fn execute(ws: Workspace, bind: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .map_err(|e| Error::InvalidArgument(format!("invalid bind address: {e}")))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create async runtime: {e}")))?;
    rt.block_on(server::serve(ws, addr))
}
