//! Configuration options for match checking.

/// Controls which findings the match checker reports and how many witnesses
/// it keeps per category.
///
/// # Example
///
/// ```
/// use quire_core::api::CheckOptions;
///
/// let options = CheckOptions {
///     max_witnesses: 4,
///     ..CheckOptions::default()
/// };
/// assert!(options.report_unused);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Maximum number of witnesses kept per category.
    ///
    /// Default: 8
    pub max_witnesses: usize,

    /// Report branches that can never be selected.
    ///
    /// Default: true
    pub report_unused: bool,

    /// Report values only covered by guarded branches.
    ///
    /// Default: true
    pub report_guard_unverified: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_witnesses: 8,
            report_unused: true,
            report_guard_unverified: true,
        }
    }
}
