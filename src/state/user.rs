#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::net::types::UserInfo;

/// Cached copy of the signed-in user's profile and fetch status.
#[derive(Clone, Debug, Default)]
pub struct UserState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl UserState {
    /// Whether the home page still needs to fetch the profile.
    pub fn needs_fetch(&self) -> bool {
        self.user.is_none() && !self.loading
    }
}
