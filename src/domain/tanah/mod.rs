pub mod entity;
pub mod repository;

pub use entity::{NewTanah, Tanah, TanahDraft, TanahId, TanahPatch, TanahUpdate};
pub use repository::TanahRepository;
