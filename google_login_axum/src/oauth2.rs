use axum::{
    Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::{TypedHeader, headers};

use google_login::{
    CallbackOutcome, CallbackQuery, GL_HOME_URL, handle_google_callback, prepare_google_auth_url,
    prepare_logout_response,
};

use super::config::GL_LOGIN_URL;
use super::error::IntoResponseError;
use super::pages::render_login_page;

pub(super) fn router() -> Router {
    Router::new()
        .route("/", get(google_auth))
        .route("/callback", get(google_callback))
        .route("/logout", get(logout))
}

/// The login trigger: send the browser to Google's consent screen.
async fn google_auth() -> Result<Redirect, (StatusCode, String)> {
    let auth_url = prepare_google_auth_url().await.into_response_error()?;

    Ok(Redirect::to(&auth_url))
}

/// The configured redirect URI.
///
/// Without a `code` parameter this is a pass-through: the request gets the
/// normal login page. Any failure inside the flow is logged with its stage
/// and answered with a generic redirect; provider details stay in the logs.
async fn google_callback(Query(query): Query<CallbackQuery>) -> Response {
    match handle_google_callback(&query).await {
        Ok(CallbackOutcome::SignedIn {
            headers,
            redirect_to,
        }) => (headers, Redirect::to(&redirect_to)).into_response(),
        Ok(CallbackOutcome::PassThrough) => render_login_page(false),
        Err(e) => {
            tracing::error!(error = %e, stage = ?e.stage(), "Google sign-in failed");
            Redirect::to(&format!("{}?error=login_failed", GL_LOGIN_URL.as_str())).into_response()
        }
    }
}

async fn logout(
    TypedHeader(cookies): TypedHeader<headers::Cookie>,
) -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let headers = prepare_logout_response(cookies).await.into_response_error()?;

    Ok((headers, Redirect::to(GL_HOME_URL.as_str())))
}
