pub mod entity;
pub mod repository;

pub use entity::{
    GeometryWrite, NewPemetaanFasilitas, NewPemetaanTanah, PemetaanFasilitas,
    PemetaanFasilitasId, PemetaanFasilitasUpdate, PemetaanTanah, PemetaanTanahId,
    PemetaanTanahUpdate,
};
pub use repository::{PemetaanFasilitasRepository, PemetaanTanahRepository};
