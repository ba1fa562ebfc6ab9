//! Request-scoped context.

use storefront_core::UserId;

/// Acting-user context for a request.
///
/// The authentication layer resolves the user before validation runs; the
/// serializers never read identity from the inbound payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    user_id: UserId,
}

impl RequestContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn current_user(&self) -> UserId {
        self.user_id
    }
}
