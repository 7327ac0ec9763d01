//! Chapter store implementations

mod fs;
mod memory;

pub use fs::FsChapterStore;
pub use memory::InMemoryChapterStore;

use folio_domain::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compile exclude patterns into one matcher
pub fn build_globset<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern.as_ref()).map_err(|e| {
            Error::config_with_source(format!("Invalid exclude pattern '{}'", pattern.as_ref()), e)
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::config_with_source("Failed to compile exclude patterns", e))
}
