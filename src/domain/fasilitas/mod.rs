pub mod entity;
pub mod repository;

pub use entity::{Fasilitas, FasilitasId, FasilitasUpdate, NewFasilitas};
pub use repository::FasilitasRepository;
