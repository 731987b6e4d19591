use crate::Identity;

/// Resolved identity as published to subscribers.
///
/// `generation` counts sign-outs. Subscribers that only see the latest value
/// can still tell that a session ended in between, even when the same user
/// signed straight back in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityUpdate {
    pub generation: u64,
    pub identity: Option<Identity>,
}

impl IdentityUpdate {
    /// Apply a newly resolved identity. Returns false if nothing changed.
    pub fn advance(&mut self, identity: Option<Identity>) -> bool {
        if self.identity == identity {
            return false;
        }

        if identity.is_none() {
            self.generation += 1;
        }
        self.identity = identity;
        true
    }
}
