use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::pages::Page;
use crate::models::requests::{ChangePasswordRequest, UpdateProfileRequest};
use crate::models::users::{User, UserStatus};
use crate::services::password;
use crate::store::UserStore;
use crate::validation;

/// Page size used when the client sends none.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Hard ceiling on page size, applied after the floor-to-1 rule. Keeps one
/// request from dragging the whole table through the wire.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Gets a single user by id. The caller decides what "not found" means for
/// its endpoint; here it is always the same 404.
pub async fn get_user(store: &dyn UserStore, id: Uuid) -> Result<User> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))
}

/// Lists users newest-first, one page at a time.
///
/// Out-of-range inputs are normalized instead of rejected: `page` and
/// `limit` below 1 floor to 1, `limit` above [`MAX_PAGE_LIMIT`] clamps down.
/// A page past the end is an empty `items` list, not an error.
pub async fn list_users(store: &dyn UserStore, page: i64, limit: i64) -> Result<Page<User>> {
    let page = page.max(1);
    let limit = limit.clamp(1, MAX_PAGE_LIMIT);
    let offset = (page - 1) * limit;

    let (items, total) = store.list_page(offset, limit).await?;

    Ok(Page::new(items, total, page, limit))
}

/// Activates or deactivates an account. Setting the status it already has is
/// a no-op success.
pub async fn set_status(store: &dyn UserStore, id: Uuid, status: UserStatus) -> Result<User> {
    let user = store
        .set_status(id, status)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(
        operation = "set_status",
        user_id = %user.id,
        status = %user.status,
        "User status updated",
    );

    Ok(user)
}

/// Updates the caller's own name and email.
///
/// The new email goes through the same normalization as signup and may
/// collide with another account, in which case nothing is written.
pub async fn update_profile(
    store: &dyn UserStore,
    id: Uuid,
    request: UpdateProfileRequest,
) -> Result<User> {
    validation::require_fields(&[
        ("fullName", request.full_name.as_deref()),
        ("email", request.email.as_deref()),
    ])?;

    let full_name = validation::sanitize_string(request.full_name.as_deref().unwrap_or_default());
    let email = validation::normalize_email(request.email.as_deref().unwrap_or_default())?;

    let user = store
        .update_profile(id, &full_name, &email)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(operation = "update_profile", user_id = %user.id, "Profile updated");

    Ok(user)
}

/// Changes the caller's own password.
///
/// The current password must verify against the stored hash before the new
/// one is accepted; the new password faces the same strength policy as
/// signup. On success the stored hash is replaced and old tokens stay valid
/// (they carry no password material).
pub async fn change_password(
    store: &dyn UserStore,
    id: Uuid,
    request: ChangePasswordRequest,
) -> Result<()> {
    validation::require_fields(&[
        ("currentPassword", request.current_password.as_deref()),
        ("newPassword", request.new_password.as_deref()),
    ])?;

    let current = request.current_password.unwrap_or_default();
    let new = request.new_password.unwrap_or_default();

    let user = get_user(store, id).await?;

    if !password::verify(&current, &user.password_hash) {
        tracing::warn!(
            operation = "change_password",
            user_id = %user.id,
            "Current password incorrect"
        );
        return Err(Error::WrongCurrentPassword);
    }

    if let Some(reason) = password::validate_strength(&new) {
        return Err(Error::WeakPassword(reason.to_string()));
    }

    let password_hash = password::hash(&new)?;
    store
        .update_password(id, &password_hash)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(operation = "change_password", user_id = %user.id, "Password changed");

    Ok(())
}
