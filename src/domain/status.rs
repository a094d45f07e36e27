// src/domain/status.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle label carried by Tanah and Sertifikat rows. The first three
/// values mirror the approval verdicts; `tidak aktif` marks retired rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[serde(rename = "ditinjau")]
    Ditinjau,
    #[serde(rename = "disetujui")]
    Disetujui,
    #[serde(rename = "ditolak")]
    Ditolak,
    #[serde(rename = "tidak aktif")]
    TidakAktif,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Ditinjau => "ditinjau",
            RecordStatus::Disetujui => "disetujui",
            RecordStatus::Ditolak => "ditolak",
            RecordStatus::TidakAktif => "tidak aktif",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ditinjau" => Ok(RecordStatus::Ditinjau),
            "disetujui" => Ok(RecordStatus::Disetujui),
            "ditolak" => Ok(RecordStatus::Ditolak),
            "tidak aktif" => Ok(RecordStatus::TidakAktif),
            other => Err(DomainError::Validation(format!("unknown status '{other}'"))),
        }
    }
}

/// State of an Approval row. `Ditinjau` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Ditinjau,
    Disetujui,
    Ditolak,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Ditinjau => "ditinjau",
            ApprovalStatus::Disetujui => "disetujui",
            ApprovalStatus::Ditolak => "ditolak",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApprovalStatus::Ditinjau)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ditinjau" => Ok(ApprovalStatus::Ditinjau),
            "disetujui" => Ok(ApprovalStatus::Disetujui),
            "ditolak" => Ok(ApprovalStatus::Ditolak),
            other => Err(DomainError::Validation(format!(
                "unknown approval status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_status_round_trips_including_the_spaced_variant() {
        for status in [
            RecordStatus::Ditinjau,
            RecordStatus::Disetujui,
            RecordStatus::Ditolak,
            RecordStatus::TidakAktif,
        ] {
            assert_eq!(status.as_str().parse::<RecordStatus>().unwrap(), status);
        }
    }

    #[test]
    fn only_ditinjau_is_open() {
        assert!(!ApprovalStatus::Ditinjau.is_terminal());
        assert!(ApprovalStatus::Disetujui.is_terminal());
        assert!(ApprovalStatus::Ditolak.is_terminal());
    }
}
