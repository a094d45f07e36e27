mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateFasilitasMappingCommand, CreateTanahMappingCommand};
pub use service::PemetaanCommandService;
pub use update::{UpdateFasilitasMappingCommand, UpdateTanahMappingCommand};
