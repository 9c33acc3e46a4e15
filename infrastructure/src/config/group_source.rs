//! Config-backed repository group source

use super::file_config::FileConfig;
use reposeek_application::ports::group_source::RepositoryGroupSource;
use reposeek_domain::RepositorySet;

/// [`RepositoryGroupSource`] reading the `[groups]` table
#[derive(Debug, Clone)]
pub struct ConfigGroupSource {
    config: FileConfig,
}

impl ConfigGroupSource {
    pub fn new(config: FileConfig) -> Self {
        Self { config }
    }
}

impl RepositoryGroupSource for ConfigGroupSource {
    fn group_repositories(&self, group: &str) -> Option<RepositorySet> {
        self.config.group_repositories(group)
    }

    fn group_names(&self) -> Vec<String> {
        self.config.groups.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reposeek_application::RepositoryFilter;
    use std::sync::Arc;

    fn source() -> ConfigGroupSource {
        let config: FileConfig = toml::from_str(
            r#"
[repositories]
backend-api = "/src/backend-api"
backend-db = "/src/backend-db"
frontend = "/src/frontend"

[groups]
backend = ["backend-api", "backend-db"]
nobody = []
"#,
        )
        .unwrap();
        ConfigGroupSource::new(config)
    }

    #[test]
    fn test_group_names() {
        assert_eq!(source().group_names(), vec!["backend", "nobody"]);
    }

    #[test]
    fn test_filter_over_config() {
        let source = source();
        let all = source.config.repository_set();
        let filter = RepositoryFilter::new(Arc::new(source));

        let backend = filter.filter_by_group(&all, "backend").unwrap();
        assert_eq!(backend.aliases().collect::<Vec<_>>(), vec!["backend-api", "backend-db"]);
        assert!(!backend.contains("frontend"));

        assert!(filter.filter_by_group(&all, "nobody").unwrap_err().is_empty_group());
        assert!(filter.filter_by_group_with_validation(&all, "backend").is_ok());
    }
}
