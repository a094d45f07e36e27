pub mod entity;
pub mod repository;

pub use entity::{Inventaris, InventarisId, InventarisUpdate, NewInventaris};
pub use repository::InventarisRepository;
