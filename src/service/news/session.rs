use std::collections::HashSet;

/// Monotonic per-session request identifier. Only the most recently issued
/// token is current; a caller that sees `is_current` return false holds a
/// stale response and should discard it instead of merging it into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// State for one logical listing/search/category session, owned by the
/// caller and passed into every fetch operation. The seen-URL set grows
/// monotonically across paginated fetches of the same listing and is only
/// ever reset explicitly via [`NewsSession::clear_seen`].
#[derive(Debug, Default)]
pub struct NewsSession {
    seen_urls: HashSet<String>,
    last_token: u64,
}

impl NewsSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every URL seen so far. Call this when starting a fresh
    /// listing, search, or category filter; the client never resets the
    /// set on its own, so pagination within one listing keeps
    /// deduplicating while unrelated sessions start clean.
    pub fn clear_seen(&mut self) {
        self.seen_urls.clear();
    }

    pub fn seen_count(&self) -> usize {
        self.seen_urls.len()
    }

    /// Issue a token for a request about to be sent. Issuing a new token
    /// invalidates every earlier one for this session.
    pub fn issue_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    /// Whether `token` is still the latest issued for this session.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_token
    }

    /// Record a URL; returns true when it was not seen before.
    pub(crate) fn mark_seen(&mut self, url: &str) -> bool {
        self.seen_urls.insert(url.to_string())
    }
}
