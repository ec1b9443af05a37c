// Static user adapter - fixed user context for the CLI and tests

use crate::ports::UserPort;

/// [`UserPort`] implementation backed by a fixed value
pub struct StaticUserAdapter {
    user_id: Option<String>,
}

impl StaticUserAdapter {
    /// A signed-in user
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// No user session
    pub fn signed_out() -> Self {
        Self { user_id: None }
    }
}

impl UserPort for StaticUserAdapter {
    fn current_user(&self) -> Option<String> {
        self.user_id.clone()
    }
}
