// tests/support/builders.rs
use super::helpers::TestApp;
use axum::body::Body;
use axum::http::{
    Method, Request,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use chrono::{DateTime, Utc};
use events_booking::application::{
    commands::{
        events::CreateEventCommand,
        users::{LoginUserCommand, SignupUserCommand},
    },
    dto::AuthenticatedUser,
};
use serde_json::Value;

pub const PASSWORD: &str = "correct horse battery staple";

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn json_request(method: Method, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).expect("build request")
}

pub fn event_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T18:00:00Z")
        .expect("valid date")
        .with_timezone(&Utc)
}

pub fn event_command(name: &str) -> CreateEventCommand {
    CreateEventCommand {
        name: name.to_string(),
        description: "an evening of talks".to_string(),
        date_time: event_date(),
        location: "Community Hall".to_string(),
    }
}

pub fn event_body(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "description": "an evening of talks",
        "date": "2025-06-01T18:00:00Z",
        "location": "Community Hall",
    })
}

/// Sign a user up, log in, and return the verified identity plus its raw token.
pub async fn signed_in_user(app: &TestApp, email: &str) -> (AuthenticatedUser, String) {
    app.services
        .user_commands
        .signup(SignupUserCommand {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .expect("signup");

    let login = app
        .services
        .user_commands
        .login(LoginUserCommand {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .expect("login");

    let user = app
        .services
        .authenticate(&login.token.token)
        .await
        .expect("fresh token authenticates");
    (user, login.token.token)
}
