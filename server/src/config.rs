//! Command-line configuration for the server binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "todo-server", about = "REST API for a single-table todo list")]
pub struct ServerConfig {
    /// Address to accept HTTP connections on.
    #[arg(long, env = "TODO_LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// SQLite database file. Use `:memory:` for a throwaway store.
    #[arg(long, env = "TODO_DATABASE", default_value = "todo.db")]
    pub database: PathBuf,
}
