pub mod approvals;
pub mod audit;
pub mod fasilitas;
pub mod pemetaan;
pub mod sertifikat;
pub mod tanah;
