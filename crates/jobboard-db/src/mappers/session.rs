//! Session model -> entity mapper

use jobboard_core::entities::Session;
use jobboard_core::error::DomainError;
use jobboard_core::value_objects::UserId;

use super::user::parse_role;
use crate::models::SessionModel;

impl TryFrom<SessionModel> for Session {
    type Error = DomainError;

    fn try_from(model: SessionModel) -> Result<Self, Self::Error> {
        Ok(Session {
            role: parse_role(&model.role)?,
            id: model.id,
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
            expires_at: model.expires_at,
            revoked_at: model.revoked_at,
        })
    }
}
