// Password check in front of destructive operations.
//
// Plain equality against the configured password. It only guards against
// accidental deletes and is not an authentication mechanism.

use std::sync::Arc;

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Debug, Clone)]
pub struct AdminGate {
    password: Arc<str>,
}

impl AdminGate {
    pub fn new(password: impl Into<Arc<str>>) -> Self {
        Self { password: password.into() }
    }

    /// An empty configured password allows nothing.
    pub fn allows(&self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(candidate) => !self.password.is_empty() && candidate == &*self.password,
            None => false,
        }
    }
}
