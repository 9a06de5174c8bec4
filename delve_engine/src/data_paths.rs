use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory holding the bundled map.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// File name of the map used when none is given on the command line.
pub const DEFAULT_MAP: &str = "map.json";

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// The bundled map, if it can be found.
pub fn default_map() -> Option<PathBuf> {
    Some(data_path(DEFAULT_MAP)).filter(|path| path.is_file())
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("delve_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            candidates.push(dir.join("delve_engine/data"));
            candidates.push(dir.join("data"));

            if let Some(parent) = dir.parent() {
                candidates.push(parent.join("delve_engine/data"));
                candidates.push(parent.join("data"));
            }
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("delve_engine/data"))
}
