mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTanahCommand;
pub use delete::DeleteTanahCommand;
pub use service::TanahCommandService;
pub use update::UpdateTanahCommand;
