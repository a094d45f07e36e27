// src/domain/approval/entity.rs
use crate::domain::approval::payload::ApprovalPayload;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sertifikat::{NewSertifikat, SertifikatUpdate};
use crate::domain::status::ApprovalStatus;
use crate::domain::tanah::{NewTanah, TanahUpdate};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApprovalId(pub Uuid);

impl ApprovalId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ApprovalId> for Uuid {
    fn from(value: ApprovalId) -> Self {
        value.0
    }
}

impl fmt::Display for ApprovalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalType {
    Tanah,
    TanahUpdate,
    Sertifikat,
    SertifikatUpdate,
}

impl ApprovalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalType::Tanah => "tanah",
            ApprovalType::TanahUpdate => "tanah_update",
            ApprovalType::Sertifikat => "sertifikat",
            ApprovalType::SertifikatUpdate => "sertifikat_update",
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, ApprovalType::TanahUpdate | ApprovalType::SertifikatUpdate)
    }
}

impl fmt::Display for ApprovalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tanah" => Ok(ApprovalType::Tanah),
            "tanah_update" => Ok(ApprovalType::TanahUpdate),
            "sertifikat" => Ok(ApprovalType::Sertifikat),
            "sertifikat_update" => Ok(ApprovalType::SertifikatUpdate),
            other => Err(DomainError::Validation(format!(
                "unsupported approval type '{other}'"
            ))),
        }
    }
}

/// A proposed mutation waiting for Bidgar Wakaf sign-off. Rows are never
/// deleted; resolution flips `status` exactly once.
#[derive(Debug, Clone)]
pub struct Approval {
    pub id: ApprovalId,
    pub user_id: UserId,
    pub approver_id: Option<UserId>,
    pub approval_type: ApprovalType,
    pub data_id: Uuid,
    pub data: serde_json::Value,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Approval {
    /// Decode the raw blob into the typed payload for this approval's type.
    pub fn payload(&self) -> DomainResult<ApprovalPayload> {
        ApprovalPayload::parse(self.approval_type, &self.data)
    }
}

#[derive(Debug, Clone)]
pub struct NewApproval {
    pub user_id: UserId,
    pub approval_type: ApprovalType,
    pub data_id: Uuid,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entity-side write carried out atomically with the approval status flip.
#[derive(Debug, Clone)]
pub enum ResolutionEffect {
    UpsertTanah(NewTanah),
    PatchTanah(TanahUpdate),
    UpsertSertifikat(NewSertifikat),
    PatchSertifikat(SertifikatUpdate),
}

#[derive(Debug, Clone)]
pub struct ApprovalResolution {
    pub approval_id: ApprovalId,
    pub approver_id: UserId,
    pub verdict: ApprovalStatus,
    pub effect: ResolutionEffect,
    pub resolved_at: DateTime<Utc>,
}
