//! MCP transport and protocol layer: the `memory_*` tool surface (spec §6)
//! over a self-contained reference implementation of the service/repository
//! ports defined in `mcb-domain`.
//!
//! [`store`] holds in-memory repository adapters, [`engine`] holds the
//! service-port implementations built on top of them, and [`server`] wires
//! both into an `rmcp` [`rmcp::ServerHandler`].

pub mod embedding;
pub mod engine;
pub mod error;
pub mod params;
pub mod server;
pub mod store;

pub use server::McbMcpServer;
