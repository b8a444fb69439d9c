use askama::Template;
use axum::{http::StatusCode, response::Html};

use google_login_axum::{AuthUser, GL_ROUTE_PREFIX};

#[derive(Template)]
#[template(path = "index_user.j2", escape = "html")]
struct IndexTemplateUser<'a> {
    message: &'a str,
    auth_route_prefix: &'a str,
}

#[derive(Template)]
#[template(path = "index_anon.j2", escape = "html")]
struct IndexTemplateAnon<'a> {
    message: &'a str,
    auth_route_prefix: &'a str,
}

#[derive(Template)]
#[template(path = "account.j2", escape = "html")]
struct AccountTemplate<'a> {
    user: AuthUser,
    auth_route_prefix: &'a str,
}

pub(crate) async fn index(user: Option<AuthUser>) -> Result<Html<String>, (StatusCode, String)> {
    match user {
        Some(u) => {
            let message = format!("Hey {}!", u.session_user.display_name);
            let template = IndexTemplateUser {
                message: &message,
                auth_route_prefix: GL_ROUTE_PREFIX.as_str(),
            };
            let html = Html(
                template
                    .render()
                    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
            );
            Ok(html)
        }
        None => {
            let message = "Sign in to see your order history.".to_string();
            let template = IndexTemplateAnon {
                message: &message,
                auth_route_prefix: GL_ROUTE_PREFIX.as_str(),
            };
            let html = Html(
                template
                    .render()
                    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
            );
            Ok(html)
        }
    }
}

pub(crate) async fn account(user: AuthUser) -> Result<Html<String>, (StatusCode, String)> {
    tracing::trace!("Account page for: {}", user.session_user.email);
    let template = AccountTemplate {
        user,
        auth_route_prefix: GL_ROUTE_PREFIX.as_str(),
    };
    let html = Html(
        template
            .render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
    );
    Ok(html)
}
