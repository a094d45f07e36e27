pub mod entity;
pub mod payload;
pub mod repository;

pub use entity::{
    Approval, ApprovalId, ApprovalResolution, ApprovalType, NewApproval, ResolutionEffect,
};
pub use payload::{ApprovalPayload, UpdateEnvelope};
pub use repository::ApprovalRepository;
