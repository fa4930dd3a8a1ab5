use actix_web::cookie::Cookie;

/// Cookie carrying the account id as a decimal string.
pub const USER_ID: &str = "user_id";
/// Cookie carrying the current login token as lowercase hex.
pub const USER_TOKEN: &str = "user_token";

/// Session cookie: Secure, site-wide path.
/// Expiry is left to the browser session; token lifetime is a non-goal here.
pub fn session(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value).secure(true).path("/").finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookies_are_secure_and_site_wide() {
        let cookie = session(USER_TOKEN, String::from("778efd91b565441aceaaac7e559f58f8"));
        assert_eq!(cookie.name(), "user_token");
        assert_eq!(cookie.value(), "778efd91b565441aceaaac7e559f58f8");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
