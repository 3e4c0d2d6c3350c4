//! MCP Context Browser — top-level crate tying the domain, server, and CLI
//! layers together.
//!
//! Re-exports the pieces a library consumer needs to embed the memory
//! engine without going through the `mcb` binary: the MCP server handler
//! from [`mcb_server`] and the domain types from [`mcb_domain`].

pub use mcb_domain as domain;
pub use mcb_server as server;

pub use mcb_server::McbMcpServer;
