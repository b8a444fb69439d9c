use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::oauth2::GoogleUserInfo;
use crate::userdb::{User, UserStore};
use crate::utils::{base64url_encode, gen_random_string};

use super::errors::CoordinationError;

/// Map a verified Google profile to a local account.
///
/// Email is the sole matching key. An existing account is returned exactly as
/// stored; none of its profile fields are overwritten on re-login. An unseen
/// email provisions a fresh account carrying the profile's names and a random
/// password that is never surfaced, since these accounts only ever sign in
/// through Google.
pub(super) async fn resolve_account(profile: &GoogleUserInfo) -> Result<User, CoordinationError> {
    if let Some(user) = UserStore::get_user_by_email(&profile.email).await? {
        tracing::debug!(user_id = %user.id, "Matched existing account by email");
        return Ok(user);
    }

    let password = gen_random_string(24)?;
    let user = User::new(
        gen_new_user_id().await?,
        profile.email.clone(),
        profile.name.clone(),
        profile.given_name.clone(),
        profile.family_name.clone(),
        password_digest(&password),
    );

    let stored_user = UserStore::insert_user(user).await?;
    tracing::info!(user_id = %stored_user.id, "Provisioned new account");
    Ok(stored_user)
}

/// Generate a unique account ID
pub(super) async fn gen_new_user_id() -> Result<String, CoordinationError> {
    // A collision is astronomically unlikely, but a duplicate id would attach
    // the session to the wrong account
    for _ in 0..3 {
        let id = Uuid::new_v4().to_string();
        if UserStore::get_user(&id).await?.is_none() {
            return Ok(id);
        }
        tracing::warn!("Generated account ID collided, retrying");
    }

    Err(CoordinationError::Coordination(
        "Failed to generate a unique account ID".to_string(),
    ))
}

fn password_digest(password: &str) -> String {
    base64url_encode(Sha256::digest(password.as_bytes()).to_vec())
}
