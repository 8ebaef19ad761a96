/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub profile: &'static str,
}

impl BuildMetadata {
    /// One-line summary used by the startup banner.
    pub fn banner_line(&self) -> String {
        format!(
            "Finance Tracker {} ({}, {})",
            self.version, self.git_hash, self.profile
        )
    }
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINANCE_TRACKER_BUILD_HASH").unwrap_or("unknown"),
        timestamp: option_env!("FINANCE_TRACKER_BUILD_TIMESTAMP").unwrap_or("unknown"),
        profile: option_env!("FINANCE_TRACKER_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_line_includes_crate_version() {
        let meta = current();
        assert!(meta.banner_line().contains(env!("CARGO_PKG_VERSION")));
        assert!(!meta.timestamp.is_empty());
    }
}
