pub mod approvals;
pub mod fasilitas;
pub mod gate;
pub mod inventaris;
pub mod pemetaan;
pub mod sertifikat;
pub mod tanah;
