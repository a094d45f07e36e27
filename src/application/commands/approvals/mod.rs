mod approve;
mod reject;
mod service;

pub use service::ApprovalCommandService;
