// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_activity_log;
mod postgres_approval;
mod postgres_fasilitas;
mod postgres_inventaris;
mod postgres_pemetaan;
mod postgres_sertifikat;
mod postgres_tanah;

pub(crate) use error::map_sqlx;
pub use postgres_activity_log::PostgresActivityLogRepository;
pub use postgres_approval::PostgresApprovalRepository;
pub use postgres_fasilitas::PostgresFasilitasRepository;
pub use postgres_inventaris::PostgresInventarisRepository;
pub use postgres_pemetaan::{
    PostgresPemetaanFasilitasRepository, PostgresPemetaanTanahRepository,
};
pub use postgres_sertifikat::PostgresSertifikatRepository;
pub use postgres_tanah::PostgresTanahRepository;
