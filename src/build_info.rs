use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COMMIT: &str = match option_env!("BUILD_COMMIT") {
    Some(c) => c,
    None => "unknown",
};

/// Build metadata returned by the /version endpoint.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
}

impl BuildInfo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: VERSION,
            commit: COMMIT,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_new() {
        let info = BuildInfo::new();
        assert!(!info.version.is_empty());
        assert!(!info.commit.is_empty());
    }
}
