//! Numbered screenshot naming.
//!
//! Captures are written as `imagen_<N>.png` in the working directory; the
//! next index is one past the highest existing one, scanning whatever is
//! already on disk. Gaps and stray files are tolerated.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

pub const CAPTURE_PREFIX: &str = "imagen_";
pub const CAPTURE_SUFFIX: &str = ".png";

/// Index the next capture in `dir` should use: max existing + 1, or 1 when
/// no numbered capture exists. An unreadable directory counts as empty.
pub fn next_capture_index(dir: &Path) -> u32 {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not scan {} for captures: {e}", dir.display());
            return 1;
        }
    };

    let mut highest = None;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(number) = name
            .strip_prefix(CAPTURE_PREFIX)
            .and_then(|rest| rest.strip_suffix(CAPTURE_SUFFIX))
        else {
            continue;
        };
        // Non-numeric middles (e.g. imagen_old.png) are not captures.
        if let Ok(n) = number.parse::<u32>() {
            highest = Some(highest.map_or(n, |h: u32| h.max(n)));
        }
    }

    match highest {
        Some(n) => n + 1,
        None => 1,
    }
}

/// Full path for the next capture in `dir`.
pub fn next_capture_path(dir: &Path) -> PathBuf {
    dir.join(format!(
        "{CAPTURE_PREFIX}{}{CAPTURE_SUFFIX}",
        next_capture_index(dir)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("telon-shots-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_dir_starts_at_one() {
        let dir = scratch_dir("empty");
        assert_eq!(next_capture_index(&dir), 1);
        assert_eq!(next_capture_path(&dir), dir.join("imagen_1.png"));
    }

    #[test]
    fn test_missing_dir_counts_as_empty() {
        let dir = std::env::temp_dir().join("telon-shots-definitely-missing");
        assert_eq!(next_capture_index(&dir), 1);
    }

    #[test]
    fn test_gapped_numbers_use_max_plus_one() {
        let dir = scratch_dir("gaps");
        File::create(dir.join("imagen_1.png")).unwrap();
        File::create(dir.join("imagen_3.png")).unwrap();
        assert_eq!(next_capture_index(&dir), 4);
    }

    #[test]
    fn test_strays_are_ignored() {
        let dir = scratch_dir("strays");
        File::create(dir.join("imagen_2.png")).unwrap();
        File::create(dir.join("imagen_old.png")).unwrap();
        File::create(dir.join("imagen_5.jpg")).unwrap();
        File::create(dir.join("photo_9.png")).unwrap();
        assert_eq!(next_capture_index(&dir), 3);
    }
}
