use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::client::Client;
use crate::models::trainer::Trainer;
use crate::models::user::User;

/// How the caller is allowed to touch a client's records.
pub enum ClientAccess {
    /// The trainer who owns the client.
    AsTrainer(Trainer),
    /// The client's own account.
    AsSelf,
}

/// Resolve the token subject back to an account. The token was already
/// signature/expiry-checked by the middleware; this re-checks existence only.
/// Deliberately does NOT re-check is_active: a token issued before
/// deactivation stays valid until it expires.
pub async fn resolve_user(pool: &PgPool, claims: &Claims) -> Result<User, ApiError> {
    db::users::get_by_email(pool, &claims.sub)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Could not validate credentials"))
}

/// Trainer gate: 403 without the trainer role, 404 when the role is set but
/// no profile was ever created.
pub async fn require_trainer(pool: &PgPool, user: &User) -> Result<Trainer, ApiError> {
    if !user.is_trainer {
        return Err(ApiError::forbidden("Only trainers can access this endpoint"));
    }
    db::trainers::get_by_user_id(pool, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer profile not found"))
}

/// Catalog mutation gate.
pub fn can_manage_catalog(user: &User) -> bool {
    user.is_trainer || user.is_superuser
}

/// The ownership matrix for client-scoped records: the owning trainer or
/// the client's own account may pass, everyone else gets Forbidden.
pub async fn authorize_client_access(
    pool: &PgPool,
    user: &User,
    client: &Client,
) -> Result<ClientAccess, ApiError> {
    if user.is_trainer {
        let trainer = require_trainer(pool, user).await?;
        if client.trainer_id == trainer.id {
            return Ok(ClientAccess::AsTrainer(trainer));
        }
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }

    if client.user_id == Some(user.id) {
        return Ok(ClientAccess::AsSelf);
    }

    Err(ApiError::forbidden("Not authorized to access this client"))
}

/// Fetch a client and authorize in one step; most handlers want both.
pub async fn load_authorized_client(
    pool: &PgPool,
    user: &User,
    client_id: uuid::Uuid,
) -> Result<(Client, ClientAccess), ApiError> {
    let client = db::clients::get_client(pool, client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    let access = authorize_client_access(pool, user, &client).await?;
    Ok((client, access))
}
