use axum::{
    Form,
    extract::{FromRequestParts, State},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{error::UserStoreError, management::SESSION_COOKIE, server::AppState, views};

/// The username behind a valid session cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| state.sessions.user(cookie.value()))
        {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                debug!("no valid session, redirecting to login");
                Err(Redirect::to("/login"))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn welcome() -> Html<String> {
    views::welcome()
}

pub async fn signup_page() -> Html<String> {
    views::signup()
}

pub async fn signup(State(state): State<AppState>, Form(form): Form<Credentials>) -> Response {
    match state.users.create_user(&form.username, &form.password) {
        Ok(()) => {
            info!(username = %form.username.trim(), "user signed up");
            Redirect::to("/login").into_response()
        }
        Err(UserStoreError::AlreadyExists(_)) => (
            StatusCode::CONFLICT,
            views::message("Sign up", "User already exists!"),
        )
            .into_response(),
        Err(e @ UserStoreError::InvalidInput) => {
            (StatusCode::BAD_REQUEST, views::message("Sign up", &e.to_string())).into_response()
        }
    }
}

pub async fn login_page() -> Html<String> {
    views::login()
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<Credentials>,
) -> Response {
    if !state.users.verify(&form.username, &form.password) {
        return (
            StatusCode::UNAUTHORIZED,
            views::message("Log in", "Invalid credentials!"),
        )
            .into_response();
    }

    let username = form.username.trim();
    let token = state.sessions.create(username);
    info!(username, "user logged in");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), Redirect::to("/index")).into_response()
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Some(user) = state.sessions.remove(cookie.value()) {
            info!(username = %user, "user logged out");
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/")).into_response()
}
