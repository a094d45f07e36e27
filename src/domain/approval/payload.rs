// src/domain/approval/payload.rs
use crate::domain::approval::entity::ApprovalType;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sertifikat::{SertifikatDraft, SertifikatPatch};
use crate::domain::tanah::{TanahDraft, TanahPatch};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Typed view of an Approval's `data` blob, decoded once per resolution.
#[derive(Debug, Clone)]
pub enum ApprovalPayload {
    TanahCreate(TanahDraft),
    TanahUpdate(UpdateEnvelope<TanahPatch>),
    SertifikatCreate(SertifikatDraft),
    SertifikatUpdate(UpdateEnvelope<SertifikatPatch>),
}

/// Wire shape of an `*_update` approval: the snapshot taken at submission
/// and the requested changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEnvelope<T> {
    pub previous_data: T,
    pub updated_data: T,
}

impl ApprovalPayload {
    pub fn parse(kind: ApprovalType, data: &serde_json::Value) -> DomainResult<Self> {
        match kind {
            ApprovalType::Tanah => Ok(Self::TanahCreate(decode(data)?)),
            ApprovalType::Sertifikat => Ok(Self::SertifikatCreate(decode(data)?)),
            ApprovalType::TanahUpdate => {
                ensure_envelope(data)?;
                Ok(Self::TanahUpdate(decode(data)?))
            }
            ApprovalType::SertifikatUpdate => {
                ensure_envelope(data)?;
                Ok(Self::SertifikatUpdate(decode(data)?))
            }
        }
    }
}

fn ensure_envelope(data: &serde_json::Value) -> DomainResult<()> {
    for key in ["previous_data", "updated_data"] {
        if data.get(key).is_none() {
            return Err(DomainError::Validation(format!(
                "approval data missing {key}"
            )));
        }
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(data: &serde_json::Value) -> DomainResult<T> {
    serde_json::from_value(data.clone())
        .map_err(|err| DomainError::Validation(format!("malformed approval data: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sertifikat::SertifikatId;
    use crate::domain::status::RecordStatus;
    use crate::domain::tanah::TanahId;
    use crate::domain::user::UserId;
    use serde_json::json;

    #[test]
    fn tanah_create_payload_decodes() {
        let data = json!({
            "id_tanah": TanahId::generate(),
            "nama_pimpinan_jamaah": "Ahmad",
            "nama_wakif": "H. Salim",
            "lokasi": "Sidoarjo",
            "luas_tanah": 1200.0,
            "user_id": UserId::generate(),
        });
        let payload = ApprovalPayload::parse(ApprovalType::Tanah, &data).unwrap();
        assert!(matches!(payload, ApprovalPayload::TanahCreate(_)));
    }

    #[test]
    fn update_payload_requires_both_envelope_keys() {
        let data = json!({ "updated_data": { "lokasi": "Gresik" } });
        let err = ApprovalPayload::parse(ApprovalType::TanahUpdate, &data).unwrap_err();
        assert!(err.to_string().contains("previous_data"));
    }

    #[test]
    fn update_payload_decodes_partial_patches() {
        let id = SertifikatId::generate();
        let data = json!({
            "previous_data": { "id_sertifikat": id, "status": "disetujui" },
            "updated_data": { "no_dokumen": "W.5/012/2025" },
        });
        let payload = ApprovalPayload::parse(ApprovalType::SertifikatUpdate, &data).unwrap();
        let ApprovalPayload::SertifikatUpdate(envelope) = payload else {
            panic!("expected sertifikat update payload");
        };
        assert_eq!(envelope.previous_data.id_sertifikat, Some(id));
        assert_eq!(envelope.previous_data.status, Some(RecordStatus::Disetujui));
        assert_eq!(envelope.updated_data.no_dokumen.as_deref(), Some("W.5/012/2025"));
    }

    #[test]
    fn malformed_blob_is_a_validation_error() {
        let data = json!({ "nama_wakif": 7 });
        assert!(ApprovalPayload::parse(ApprovalType::Tanah, &data).is_err());
    }
}
