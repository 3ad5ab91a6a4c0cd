/// Ordered branch-name signals collected at startup
///
/// CI checkouts expose the logical branch through environment signals rather
/// than the checked-out ref (pull requests in particular run on a synthetic
/// merge ref). The signals are read once in `main` and carried here as plain
/// values so detection stays a pure function. Precedence: explicit override,
/// then the head-ref signal, then the ref-name signal; the caller falls back
/// to asking the repository when all three are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchSources {
    /// Explicit branch override (e.g. from the command line)
    pub explicit: Option<String>,
    /// Head-ref signal, set for pull-request contexts
    pub head_ref: Option<String>,
    /// Ref-name signal for the checked-out ref
    pub ref_name: Option<String>,
}

impl BranchSources {
    /// Resolve the branch name from the highest-precedence present signal
    ///
    /// Empty signals count as absent (CI exports them as empty strings when
    /// unset) and fall through to the next source.
    pub fn resolve(&self) -> Option<&str> {
        [&self.explicit, &self.head_ref, &self.ref_name]
            .into_iter()
            .filter_map(|source| source.as_deref())
            .find(|name| !name.is_empty())
    }
}
