//! Reference service engines implementing `mcb-domain`'s service ports
//! (spec §4) over the in-memory [`crate::store`] adapters.

pub mod alias;
pub mod bulk;
pub mod conflict;
pub mod decay;
pub mod ingestion;
pub mod relationship;
pub mod search;
pub mod task;
pub mod threading;

pub use alias::AliasEngine;
pub use bulk::BulkEngine;
pub use conflict::ConflictEngine;
pub use decay::DecayEngine;
pub use ingestion::IngestionEngine;
pub use relationship::RelationshipEngine;
pub use search::{MemorySearchEngine, SearchConfig};
pub use task::TaskEngine;
pub use threading::ThreadingEngine;
