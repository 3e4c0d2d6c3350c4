/// NATS default subject for domain events
pub const NATS_DEFAULT_SUBJECT: &str = "mcb.events";

/// Tokio broadcast event bus default channel capacity
pub const EVENTS_TOKIO_DEFAULT_CAPACITY: usize = 1024;
