use std::io;

use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

/// Failures that stop the server from starting or keep it from serving.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(#[from] LeptosConfigError),
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),
}
