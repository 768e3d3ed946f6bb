//! Path utilities: expand ~, resolve data files against the data directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute (or `~/`) paths are kept, relative ones are joined to `base`.
pub fn resolve_in(base: &Path, file: &str) -> PathBuf {
    let p = expand_tilde(file);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_files_land_in_base() {
        let base = Path::new("/srv/coach");
        assert_eq!(resolve_in(base, "data.csv"), PathBuf::from("/srv/coach/data.csv"));
        assert_eq!(resolve_in(base, "/tmp/x.csv"), PathBuf::from("/tmp/x.csv"));
    }
}
