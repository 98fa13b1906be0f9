use std::{env, fs, path::PathBuf, process};

use crate::entity::Entity;

/// Path for `name` inside a scratch directory owned by this test process.
///
/// The directory is created on demand; test binaries running in parallel
/// never share it.
pub fn tmp_file_path(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("xentity-{}", process::id()));
    if let Err(e) = fs::create_dir_all(&dir) {
        tracing::warn!("Could not create {}: {}", dir.display(), e);
    }
    dir.join(name)
}

/// Counts nodes by explicit recursion, independently of the traversal module.
pub fn count_entities(entity: &Entity) -> usize {
    1 + entity
        .children()
        .iter()
        .map(count_entities)
        .sum::<usize>()
}
