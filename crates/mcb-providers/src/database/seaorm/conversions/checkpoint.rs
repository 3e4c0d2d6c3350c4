//! Checkpoint domain ↔ SeaORM conversions.

use sea_orm::ActiveValue;

use crate::database::seaorm::entities::checkpoint;
use mcb_domain::entities::Checkpoint;
use mcb_domain::entities::agent::CheckpointType;

impl From<checkpoint::Model> for Checkpoint {
    fn from(m: checkpoint::Model) -> Self {
        let snapshot_data: serde_json::Value =
            serde_json::from_str(&m.snapshot_data).unwrap_or(serde_json::Value::Null);

        Self {
            id: m.id,
            session_id: m.session_id,
            checkpoint_type: m
                .checkpoint_type
                .parse::<CheckpointType>()
                .unwrap_or(CheckpointType::File),
            description: m.description,
            snapshot_data,
            created_at: m.created_at,
            restored_at: m.restored_at,
            expired: m.expired.map_or(false, |v| v != 0),
        }
    }
}

impl From<Checkpoint> for checkpoint::ActiveModel {
    fn from(e: Checkpoint) -> Self {
        Self {
            id: ActiveValue::Set(e.id),
            session_id: ActiveValue::Set(e.session_id),
            checkpoint_type: ActiveValue::Set(e.checkpoint_type.to_string()),
            description: ActiveValue::Set(e.description),
            snapshot_data: ActiveValue::Set(
                serde_json::to_string(&e.snapshot_data).unwrap_or_default(),
            ),
            created_at: ActiveValue::Set(e.created_at),
            restored_at: ActiveValue::Set(e.restored_at),
            expired: ActiveValue::Set(Some(i64::from(e.expired))),
        }
    }
}
