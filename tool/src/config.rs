//! Asset path configuration.
//!
//! All paths are fixed and resolve against the firmware project root, the
//! directory that contains this tool's crate, so the working directory
//! does not matter.

use std::path::{Path, PathBuf};

const SOURCE: &str = "hiki-ava.png";
const HEADER: &str = "src/hiki_bitmaps.h";
const PREVIEW_DIR: &str = "tools";

const PREVIEW_NORMAL: &str = "preview_normal.png";
const PREVIEW_WORRIED: &str = "preview_worried.png";

/// Resolved input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub source: PathBuf,
    pub header: PathBuf,
    pub preview_normal: PathBuf,
    pub preview_worried: PathBuf,
}

/// Project root: the parent of this crate's manifest directory.
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

impl ToolConfig {
    /// Paths for the firmware project this tool ships with.
    pub fn load() -> Self {
        Self::with_root(&project_root())
    }

    /// Paths laid out under an arbitrary project root.
    pub fn with_root(root: &Path) -> Self {
        let preview_dir = root.join(PREVIEW_DIR);
        Self {
            source: root.join(SOURCE),
            header: root.join(HEADER),
            preview_normal: preview_dir.join(PREVIEW_NORMAL),
            preview_worried: preview_dir.join(PREVIEW_WORRIED),
        }
    }

    /// File name of the source artwork, for the header banner.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}
