use url::Url;

use super::config::{GL_AUTH_URL, GL_TOKEN_URL, GL_USERINFO_URL, get_client};
use super::errors::OAuth2Error;
use super::types::{AccessToken, GoogleUserInfo, OAuthCredentials, TokenResponse};

/// Build the consent-screen URL the login button points at.
///
/// Pure string construction; every parameter is URL-encoded. Empty client_id
/// or redirect_uri is a configuration error, caught here before any redirect
/// is issued.
pub(crate) fn build_authorization_url(
    credentials: &OAuthCredentials,
) -> Result<String, OAuth2Error> {
    if credentials.client_id.is_empty() {
        return Err(OAuth2Error::Configuration("client_id is empty".to_string()));
    }
    if credentials.redirect_uri.is_empty() {
        return Err(OAuth2Error::Configuration(
            "redirect_uri is empty".to_string(),
        ));
    }

    let scope = credentials.scopes.join(" ");
    let url = Url::parse_with_params(
        GL_AUTH_URL.as_str(),
        &[
            ("client_id", credentials.client_id.as_str()),
            ("redirect_uri", credentials.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", scope.as_str()),
        ],
    )
    .map_err(|e| OAuth2Error::Configuration(format!("Invalid authorization endpoint: {e}")))?;

    Ok(url.into())
}

pub(crate) async fn exchange_code_for_token(
    credentials: &OAuthCredentials,
    code: &str,
) -> Result<AccessToken, OAuth2Error> {
    let client = get_client();
    let response = client
        .post(GL_TOKEN_URL.as_str())
        .form(&[
            ("code", code),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("redirect_uri", credentials.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    match response.status() {
        reqwest::StatusCode::OK => {
            tracing::debug!("Token Exchange Response: {:#?}", response);
        }
        status => {
            tracing::debug!("Token Exchange Response: {:#?}", response);
            return Err(OAuth2Error::TokenExchange(status.to_string()));
        }
    };

    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;
    let response_json: TokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    tracing::debug!("Response JSON: {:#?}", response_json);

    Ok(AccessToken::new(response_json.access_token))
}

pub(crate) async fn fetch_user_profile(
    token: &AccessToken,
) -> Result<GoogleUserInfo, OAuth2Error> {
    let client = get_client();
    let response = client
        .get(GL_USERINFO_URL.as_str())
        .bearer_auth(token.secret())
        .send()
        .await
        .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

    if !response.status().is_success() {
        return Err(OAuth2Error::FetchUserInfo(response.status().to_string()));
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

    let user_data: GoogleUserInfo = serde_json::from_str(&response_body)
        .map_err(|e| OAuth2Error::FetchUserInfo(format!("Failed to deserialize response body: {e}")))?;

    tracing::debug!("User data: {:#?}", user_data);
    Ok(user_data)
}
