use super::cookies;
use super::dto::LoginForm;
use crate::auth::Authenticator;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

const LOGIN_PAGE: &str = r#"<!doctype html>
<html>
<head><title>gatehouse</title></head>
<body>
<h1>Sign in</h1>
{error}
<form method="post" action="/login">
    <label>Username <input type="text" name="username"></label>
    <label>Password <input type="password" name="password"></label>
    <button type="submit">Log in</button>
</form>
</body>
</html>"#;

const HOME_PAGE: &str = r#"<!doctype html>
<html>
<head><title>gatehouse</title></head>
<body><h1>Welcome back</h1></body>
</html>"#;

fn page(error: Option<&str>) -> String {
    // the error line never echoes user input, only the fixed generic message
    LOGIN_PAGE.replace(
        "{error}",
        &error.map(|e| format!("<p>{}</p>", e)).unwrap_or_default(),
    )
}

pub async fn index() -> impl Responder {
    HttpResponse::Found()
        .insert_header(("Location", "/login"))
        .finish()
}

pub async fn form() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page(None))
}

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(HOME_PAGE)
}

pub async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Run the composite login flow and mark the session in cookies.
///
/// A rejected credential re-renders the form with one generic message; the
/// response never distinguishes unknown usernames from wrong passwords.
pub async fn login(
    client: web::Data<Arc<Client>>,
    request: web::Form<LoginForm>,
) -> impl Responder {
    let auth = Authenticator::new(client.get_ref().clone());
    let today = chrono::Local::now().date_naive();
    match auth.login(&request.username, &request.password, today).await {
        Ok(Some(grant)) => HttpResponse::Found()
            .insert_header(("Location", "/home"))
            .cookie(cookies::session(cookies::USER_ID, grant.user().to_string()))
            .cookie(cookies::session(
                cookies::USER_TOKEN,
                grant.token().to_string(),
            ))
            .finish(),
        Ok(None) => HttpResponse::Unauthorized()
            .content_type("text/html; charset=utf-8")
            .body(page(Some("Invalid username or password"))),
        Err(e) => {
            log::error!("login failed: {}", e);
            HttpResponse::InternalServerError().body("internal error")
        }
    }
}
