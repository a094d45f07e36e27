// src/application/commands/gate.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::Role;

pub(crate) fn ensure_bidgar_wakaf(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.role == Role::BidgarWakaf {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "requires the Bidgar Wakaf role",
        ))
    }
}
