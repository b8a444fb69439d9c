use askama::Template;
use axum::{
    Router,
    extract::{Form, Query},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
};
use serde::Deserialize;
use std::collections::HashMap;

use google_login::{GL_ROUTE_PREFIX, GoogleSettings, SettingsStore};

use super::error::IntoResponseError;
use super::session::AuthUser;

pub(super) fn router() -> Router {
    Router::new().route("/settings", get(settings_page).post(save_settings))
}

#[derive(Template)]
#[template(path = "settings.j2", escape = "html")]
struct SettingsTemplate<'a> {
    saved: bool,
    client_id: &'a str,
    client_secret: &'a str,
    action: &'a str,
    stylesheet_href: &'a str,
}

#[derive(Debug, Deserialize)]
struct SettingsForm {
    client_id: String,
    client_secret: String,
}

fn require_admin(user: &AuthUser) -> Result<(), (StatusCode, String)> {
    if user.session_user.has_admin_privileges() {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            "Administrator account required".to_string(),
        ))
    }
}

async fn settings_page(
    user: AuthUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, (StatusCode, String)> {
    require_admin(&user)?;

    let settings = SettingsStore::load()
        .await
        .into_response_error()?
        .unwrap_or_default();

    let action = format!("{}/admin/settings", GL_ROUTE_PREFIX.as_str());
    let stylesheet_href = format!("{}/style.css", GL_ROUTE_PREFIX.as_str());
    let template = SettingsTemplate {
        saved: params.contains_key("saved"),
        client_id: &settings.client_id,
        client_secret: &settings.client_secret,
        action: &action,
        stylesheet_href: &stylesheet_href,
    };

    Ok(Html(template.render().map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?))
}

async fn save_settings(
    user: AuthUser,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&user)?;

    SettingsStore::save(GoogleSettings::new(form.client_id, form.client_secret))
        .await
        .into_response_error()?;

    Ok(Redirect::to(&format!(
        "{}/admin/settings?saved=1",
        GL_ROUTE_PREFIX.as_str()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_template_renders_current_values() {
        let template = SettingsTemplate {
            saved: false,
            client_id: "my-client-id",
            client_secret: "my-client-secret",
            action: "/auth/google/admin/settings",
            stylesheet_href: "/auth/google/style.css",
        };

        let html = template.render().expect("template should render");

        assert!(html.contains("value=\"my-client-id\""));
        assert!(html.contains("value=\"my-client-secret\""));
        assert!(html.contains("action=\"/auth/google/admin/settings\""));
        assert!(!html.contains("Settings saved"));
    }

    #[test]
    fn test_settings_template_renders_saved_notice() {
        let template = SettingsTemplate {
            saved: true,
            client_id: "",
            client_secret: "",
            action: "/auth/google/admin/settings",
            stylesheet_href: "/auth/google/style.css",
        };

        let html = template.render().expect("template should render");

        assert!(html.contains("Settings saved"));
    }

    #[test]
    fn test_settings_template_escapes_values() {
        let template = SettingsTemplate {
            saved: false,
            client_id: "\"><script>alert(1)</script>",
            client_secret: "",
            action: "/auth/google/admin/settings",
            stylesheet_href: "/auth/google/style.css",
        };

        let html = template.render().expect("template should render");

        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
