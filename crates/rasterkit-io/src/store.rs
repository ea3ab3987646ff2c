//! Directory-pair image store
//!
//! An [`ImageStore`] pairs a directory of source images with a directory
//! for operation results. Persistence is always an explicit call;
//! nothing in the editing pipeline writes to disk on its own.

use crate::{IoResult, read_image, write_image};
use crate::format::ImageFormat;
use rasterkit_core::PixelBuffer;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory holding source images.
const ORIGINALS_DIR: &str = "original_images";
/// Subdirectory receiving operation results.
const RESULTS_DIR: &str = "result_images";

/// Image store backed by an originals/results directory pair
#[derive(Debug, Clone)]
pub struct ImageStore {
    originals: PathBuf,
    results: PathBuf,
}

impl ImageStore {
    /// Open a store rooted at `root`, using the conventional
    /// `original_images` / `result_images` subdirectories. The results
    /// directory is created if missing.
    pub fn open(root: impl AsRef<Path>) -> IoResult<Self> {
        let root = root.as_ref();
        Self::with_dirs(root.join(ORIGINALS_DIR), root.join(RESULTS_DIR))
    }

    /// Open a store with explicit source and result directories.
    pub fn with_dirs(
        originals: impl Into<PathBuf>,
        results: impl Into<PathBuf>,
    ) -> IoResult<Self> {
        let results = results.into();
        fs::create_dir_all(&results)?;
        Ok(ImageStore {
            originals: originals.into(),
            results,
        })
    }

    /// Directory the store loads source images from.
    pub fn originals_dir(&self) -> &Path {
        &self.originals
    }

    /// Directory the store saves results into.
    pub fn results_dir(&self) -> &Path {
        &self.results
    }

    /// Load a source image by file name.
    pub fn load(&self, name: &str) -> IoResult<PixelBuffer> {
        read_image(self.originals.join(name))
    }

    /// Save a result buffer under the given file name, choosing the
    /// format from the name's extension.
    pub fn save(&self, name: &str, buffer: &PixelBuffer) -> IoResult<PathBuf> {
        let path = self.results.join(name);
        let format = ImageFormat::from_path(&path)?;
        write_image(&path, buffer, format)?;
        Ok(path)
    }
}
