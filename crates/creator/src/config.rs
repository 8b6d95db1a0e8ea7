//! Facade configuration

use creator_dom::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorConfig {
    /// Options used when `render_html` is called without explicit ones
    pub render: RenderOptions,
    /// Base directory for relative destinations
    pub output_dir: Option<PathBuf>,
}

impl CreatorConfig {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Resolve a destination against `output_dir`. Absolute paths win.
    pub fn resolve(&self, destination: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if destination.is_relative() => dir.join(destination),
            _ => destination.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial() {
        let config =
            CreatorConfig::from_json(r#"{ "render": { "exclude_root_wrapper": true } }"#).unwrap();

        assert!(config.render.exclude_root_wrapper);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_resolve() {
        let config = CreatorConfig {
            output_dir: Some(PathBuf::from("/srv/site")),
            ..CreatorConfig::default()
        };

        assert_eq!(
            config.resolve(Path::new("pages/index.html")),
            PathBuf::from("/srv/site/pages/index.html")
        );
        assert_eq!(
            config.resolve(Path::new("/tmp/out.html")),
            PathBuf::from("/tmp/out.html")
        );
        assert_eq!(
            CreatorConfig::default().resolve(Path::new("a.html")),
            PathBuf::from("a.html")
        );
    }
}
