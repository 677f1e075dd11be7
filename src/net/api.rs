//! REST API helpers for the auth and user endpoints.
//!
//! Each function is one request/response round trip over the supplied
//! transport: no retry, no caching, no validation beyond the DTO shapes.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors are returned as-is. Status codes are not interpreted here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::transport::{ApiRequest, Transport, TransportError, decode, encode};
use super::types::{ChangePasswordParams, LoginParams, LoginResult, SuccessResponse, UserInfo, UserInfoPatch};

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const USER_INFO_PATH: &str = "/user/info";
pub const CHANGE_PASSWORD_PATH: &str = "/user/change-password";

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the transport error unchanged if the request fails.
pub async fn login<T: Transport>(transport: &T, username: &str, password: &str) -> Result<LoginResult, TransportError> {
    let params = LoginParams { username: username.to_owned(), password: password.to_owned() };
    let body = transport.send(ApiRequest::post(LOGIN_PATH, Some(encode(&params)?))).await?;
    decode(body)
}

/// End the server-side session via `POST /auth/logout`.
///
/// # Errors
///
/// Returns the transport error unchanged if the request fails.
pub async fn logout<T: Transport>(transport: &T) -> Result<SuccessResponse, TransportError> {
    let body = transport.send(ApiRequest::post(LOGOUT_PATH, None)).await?;
    decode(body)
}

/// Fetch the current user's profile from `GET /user/info`.
///
/// # Errors
///
/// Returns the transport error unchanged if the request fails.
pub async fn get_user_info<T: Transport>(transport: &T) -> Result<UserInfo, TransportError> {
    let body = transport.send(ApiRequest::get(USER_INFO_PATH)).await?;
    decode(body)
}

/// Apply a partial profile update via `PUT /user/info`; yields the full
/// updated profile.
///
/// # Errors
///
/// Returns the transport error unchanged if the request fails.
pub async fn update_user_info<T: Transport>(transport: &T, patch: &UserInfoPatch) -> Result<UserInfo, TransportError> {
    let body = transport.send(ApiRequest::put(USER_INFO_PATH, encode(patch)?)).await?;
    decode(body)
}

/// Change the current user's password via `POST /user/change-password`.
///
/// # Errors
///
/// Returns the transport error unchanged if the request fails.
pub async fn change_password<T: Transport>(
    transport: &T,
    old_password: &str,
    new_password: &str,
) -> Result<SuccessResponse, TransportError> {
    let params =
        ChangePasswordParams { old_password: old_password.to_owned(), new_password: new_password.to_owned() };
    let body = transport.send(ApiRequest::post(CHANGE_PASSWORD_PATH, Some(encode(&params)?))).await?;
    decode(body)
}
