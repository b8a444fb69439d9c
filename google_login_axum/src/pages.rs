use askama::Template;
use axum::{
    Router,
    extract::Query,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::collections::HashMap;

use google_login::GL_ROUTE_PREFIX;

use super::error::IntoResponseError;

pub(super) fn router() -> Router {
    Router::new()
        .route("/login", get(login_page))
        .route("/style.css", get(serve_style_css))
}

#[derive(Template)]
#[template(path = "login.j2", escape = "html")]
struct LoginTemplate<'a> {
    error: bool,
    login_href: &'a str,
    stylesheet_href: &'a str,
}

async fn login_page(Query(params): Query<HashMap<String, String>>) -> Response {
    render_login_page(params.contains_key("error"))
}

/// Render the storefront login page with the "Login with Google" button.
///
/// Also used by the callback route as its pass-through rendering when no
/// authorization code is present.
pub(super) fn render_login_page(error: bool) -> Response {
    let stylesheet_href = format!("{}/style.css", GL_ROUTE_PREFIX.as_str());
    let template = LoginTemplate {
        error,
        login_href: GL_ROUTE_PREFIX.as_str(),
        stylesheet_href: &stylesheet_href,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn serve_style_css() -> Result<Response, (StatusCode, String)> {
    let css_content = include_str!("../static/google-login.css");
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/css")
        .body(css_content.to_string().into())
        .into_response_error()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_template_renders_button() {
        let template = LoginTemplate {
            error: false,
            login_href: "/auth/google",
            stylesheet_href: "/auth/google/style.css",
        };

        let html = template.render().expect("template should render");

        assert!(html.contains("href=\"/auth/google\""));
        assert!(html.contains("Login with Google"));
        assert!(!html.contains("did not complete"));
    }

    #[test]
    fn test_login_template_renders_error_notice() {
        let template = LoginTemplate {
            error: true,
            login_href: "/auth/google",
            stylesheet_href: "/auth/google/style.css",
        };

        let html = template.render().expect("template should render");

        assert!(html.contains("did not complete"));
    }
}
