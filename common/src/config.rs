use crate::sales::channel::ReportingPolicy;

/// Runtime options threaded through the commands.
pub struct Config {
    /// Output reduction level.
    ///
    /// 1 drops the chrome, 2 leaves raw output only.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Quotes the raw total for on-site sales, as the historical reports
    /// did, instead of the subtotal.
    pub legacy_onsite: bool,
    /// Upper bound on the number of summary lines a report may hold.
    pub max_lines: usize,
}

impl Config {
    pub fn policy(&self) -> ReportingPolicy {
        if self.legacy_onsite {
            ReportingPolicy::LegacyOnSiteTotal
        } else {
            ReportingPolicy::Subtotal
        }
    }
}
