use crate::domain::errors::DomainError;

const CNT_SERTIFIKAT_TANAH: &str = "sertifikat_id_tanah_fkey";
const CNT_PEMETAAN_TANAH: &str = "pemetaan_tanah_id_tanah_fkey";
const CNT_PEMETAAN_FASILITAS_PARENT: &str = "pemetaan_fasilitas_id_pemetaan_tanah_fkey";
const CNT_FASILITAS_PEMETAAN: &str = "fasilitas_id_pemetaan_fasilitas_fkey";
const CNT_INVENTARIS_FASILITAS: &str = "inventaris_id_fasilitas_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_SERTIFIKAT_TANAH | CNT_PEMETAAN_TANAH => {
                        DomainError::NotFound("tanah not found".into())
                    }
                    CNT_PEMETAAN_FASILITAS_PARENT => {
                        DomainError::NotFound("pemetaan tanah not found".into())
                    }
                    CNT_FASILITAS_PEMETAAN => {
                        DomainError::NotFound("pemetaan fasilitas not found".into())
                    }
                    CNT_INVENTARIS_FASILITAS => {
                        DomainError::NotFound("fasilitas not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
