/// Whether a facade re-fetches its list after a successful mutation.
///
/// Component-scoped facades use [`RefreshPolicy::Manual`] and leave the
/// refresh to the caller. Process-scoped state services use
/// [`RefreshPolicy::AfterMutation`]: the list fetch runs once more with the
/// default query (not the caller's last page, filter or sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    #[default]
    Manual,
    AfterMutation,
}

impl RefreshPolicy {
    #[must_use]
    pub fn refreshes_after_mutation(self) -> bool {
        self == Self::AfterMutation
    }
}
