use serde::Deserialize;

/// Form-encoded login submission. Values are used exactly as typed;
/// no trimming or normalization before fingerprinting.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
