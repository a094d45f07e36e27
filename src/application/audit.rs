// src/application/audit.rs
use crate::application::ports::time::Clock;
use crate::domain::audit::{ActivityLogRepository, AuditAction, NewActivityLog};
use crate::domain::user::UserId;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Writes one activity-log row per tracked mutation. Called explicitly at
/// the end of each mutating service method, after the primary write has
/// committed; a failed audit write must never fail the mutation, so every
/// error path here degrades and logs instead of propagating.
pub struct ActivityRecorder {
    repo: Arc<dyn ActivityLogRepository>,
    clock: Arc<dyn Clock>,
}

impl ActivityRecorder {
    pub fn new(repo: Arc<dyn ActivityLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn created<T: Serialize>(
        &self,
        actor: UserId,
        model_type: &str,
        model_id: Uuid,
        row: &T,
    ) {
        self.write(actor, AuditAction::Create, model_type, model_id, serde_json::to_value(row))
            .await;
    }

    pub async fn updated<T: Serialize>(
        &self,
        actor: UserId,
        model_type: &str,
        model_id: Uuid,
        before: &T,
        after: &T,
    ) {
        let changes = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(before), Ok(after)) => Ok(diff_changes(&before, &after)),
            (Err(err), _) | (_, Err(err)) => Err(err),
        };
        self.write(actor, AuditAction::Update, model_type, model_id, changes)
            .await;
    }

    pub async fn deleted<T: Serialize>(
        &self,
        actor: UserId,
        model_type: &str,
        model_id: Uuid,
        row: &T,
    ) {
        self.write(actor, AuditAction::Delete, model_type, model_id, serde_json::to_value(row))
            .await;
    }

    /// Raw variant for callers that already hold a JSON payload, such as
    /// approval resolution applying a stored blob.
    pub async fn recorded(
        &self,
        actor: UserId,
        action: AuditAction,
        model_type: &str,
        model_id: Uuid,
        changes: Value,
    ) {
        self.write(actor, action, model_type, model_id, Ok(changes))
            .await;
    }

    async fn write(
        &self,
        actor: UserId,
        action: AuditAction,
        model_type: &str,
        model_id: Uuid,
        changes: serde_json::Result<Value>,
    ) {
        let changes = match changes {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, model_type, "activity payload failed to serialize");
                json!({ "raw": err.to_string() })
            }
        };

        let log = NewActivityLog {
            user_id: actor,
            action,
            model_type: model_type.to_string(),
            model_id,
            changes,
            created_at: self.clock.now(),
        };

        if let Err(err) = self.repo.insert(log).await {
            warn!(error = %err, model_type, %model_id, "failed to insert activity log");
        }
    }
}

/// Top-level field diff between two JSON objects: every key whose value
/// changed maps to `{"from": .., "to": ..}`. Non-object inputs fall back
/// to a single from/to pair.
pub fn diff_changes(before: &Value, after: &Value) -> Value {
    let (Value::Object(before_map), Value::Object(after_map)) = (before, after) else {
        return json!({ "from": before, "to": after });
    };

    let mut diff = serde_json::Map::new();
    for (key, after_value) in after_map {
        let before_value = before_map.get(key).unwrap_or(&Value::Null);
        if before_value != after_value {
            diff.insert(
                key.clone(),
                json!({ "from": before_value, "to": after_value }),
            );
        }
    }
    for (key, before_value) in before_map {
        if !after_map.contains_key(key) {
            diff.insert(key.clone(), json!({ "from": before_value, "to": Value::Null }));
        }
    }

    Value::Object(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_reports_only_changed_fields() {
        let before = json!({ "lokasi": "Sidoarjo", "luas_tanah": 1200.0, "status": "disetujui" });
        let after = json!({ "lokasi": "Gresik", "luas_tanah": 1200.0, "status": "disetujui" });
        let diff = diff_changes(&before, &after);
        assert_eq!(
            diff,
            json!({ "lokasi": { "from": "Sidoarjo", "to": "Gresik" } })
        );
    }

    #[test]
    fn diff_tracks_added_and_removed_keys() {
        let before = json!({ "a": 1 });
        let after = json!({ "b": 2 });
        let diff = diff_changes(&before, &after);
        assert_eq!(diff["a"], json!({ "from": 1, "to": null }));
        assert_eq!(diff["b"], json!({ "from": null, "to": 2 }));
    }

    #[test]
    fn non_object_inputs_degrade_to_a_single_pair() {
        let diff = diff_changes(&json!(1), &json!(2));
        assert_eq!(diff, json!({ "from": 1, "to": 2 }));
    }
}
