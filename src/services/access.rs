use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::users::{User, UserRole, UserStatus};
use crate::store::UserStore;

/// Authorizes `user_id` for an action gated on `role` and returns the
/// current record.
///
/// The record is re-read on every call instead of trusting anything beyond
/// the token's subject. Tokens stay valid until expiry, so this re-read is
/// what makes deletion and deactivation bite immediately: a deleted account
/// gets 401, a deactivated or wrong-role account gets 403, all on the next
/// gated request.
pub async fn require_role(store: &dyn UserStore, user_id: Uuid, role: UserRole) -> Result<User> {
    let user = store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| Error::Unauthorized("User not found".to_string()))?;

    if user.status != UserStatus::Active {
        tracing::warn!(
            operation = "require_role",
            user_id = %user_id,
            "Inactive account denied"
        );
        return Err(Error::Forbidden("Account is inactive".to_string()));
    }

    if user.role != role {
        tracing::warn!(
            operation = "require_role",
            user_id = %user_id,
            required = %role,
            actual = %user.role,
            "Role check failed"
        );
        return Err(Error::Forbidden("Not allowed".to_string()));
    }

    Ok(user)
}
