//! Filesystem-based asset source for loading piece SVGs.

use anyhow::{Context, bail};
use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use crate::domain::Piece;

/// Asset source that looks for assets under one or more base directories,
/// first match wins
pub struct FileAssets {
    base_paths: Vec<PathBuf>,
}

impl FileAssets {
    /// Assets next to the executable, falling back to the working directory
    pub fn new() -> Self {
        let mut base_paths: Vec<PathBuf> = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .into_iter()
            .collect();
        base_paths.push(PathBuf::from("."));
        Self { base_paths }
    }

    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_paths: vec![base_path.into()],
        }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        self.base_paths
            .iter()
            .map(|base| base.join(path))
            .find(|p| p.is_file())
    }

    fn describe_bases(&self) -> String {
        self.base_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every piece image must be present before the window opens
    pub fn verify_pieces(&self) -> anyhow::Result<()> {
        let missing: Vec<&str> = Piece::all()
            .map(|p| p.svg_path())
            .filter(|path| self.resolve(path).is_none())
            .collect();

        if !missing.is_empty() {
            bail!(
                "missing piece images under {}: {}",
                self.describe_bases(),
                missing.join(", ")
            );
        }
        tracing::debug!(bases = %self.describe_bases(), "piece images found");
        Ok(())
    }

    fn read(&self, path: &str) -> anyhow::Result<Option<Vec<u8>>> {
        match self.resolve(path) {
            Some(p) => fs::read(&p)
                .with_context(|| format!("reading asset {}", p.display()))
                .map(Some),
            None => Ok(None),
        }
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        Ok(self.read(path)?.map(Cow::Owned))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();

        for base in &self.base_paths {
            let Ok(entries) = fs::read_dir(base.join(path)) else {
                continue;
            };
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    results.push(SharedString::from(name.to_string()));
                }
            }
            break;
        }
        Ok(results)
    }
}
