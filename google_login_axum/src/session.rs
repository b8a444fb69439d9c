use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{TypedHeader, headers};
use http::{Method, StatusCode, request::Parts};
use std::convert::Infallible;

use google_login::{SESSION_COOKIE_NAME, SessionUser, get_user_from_session};

use super::config::GL_LOGIN_URL;

pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    fn new(method: Method) -> Self {
        Self { method }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", GL_LOGIN_URL.as_str());
            Redirect::temporary(GL_LOGIN_URL.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

/// Signed-in account information, available as an Axum extractor
///
/// Checks for a valid session cookie and loads the account bound to it.
/// Handlers taking `AuthUser` reject anonymous requests; `Option<AuthUser>`
/// makes the session optional.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use google_login_axum::AuthUser;
///
/// async fn account_page(user: AuthUser) -> String {
///     format!("Hello, {}!", user.session_user.display_name)
/// }
///
/// let app: Router = Router::new()
///     .route("/account", get(account_page));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// The account bound to the request's session
    pub session_user: SessionUser,
}

impl From<SessionUser> for AuthUser {
    fn from(session_user: SessionUser) -> Self {
        AuthUser { session_user }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let method = parts.method.clone();
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("Failed to extract cookies");
            AuthRedirect::new(method.clone())
        })?;

        // Get session from cookie
        let session_cookie = cookies.get(SESSION_COOKIE_NAME.as_str()).ok_or_else(|| {
            tracing::debug!("No session cookie '{}' present", SESSION_COOKIE_NAME.as_str());
            AuthRedirect::new(method.clone())
        })?;

        let session_user = get_user_from_session(session_cookie).await.map_err(|e| {
            tracing::debug!(error = %e, "Session did not resolve to an account");
            AuthRedirect::new(method.clone())
        })?;

        Ok(AuthUser::from(session_user))
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}
