pub mod entity;
pub mod repository;

pub use entity::{
    JenisSertifikat, NewSertifikat, Sertifikat, SertifikatDraft, SertifikatId, SertifikatPatch,
    SertifikatUpdate, StatusPengajuan,
};
pub use repository::SertifikatRepository;
