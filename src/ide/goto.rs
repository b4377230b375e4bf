//! Go-to-definition result filtering.

use std::path::{Path, PathBuf};

use crate::base::Position;

/// A definition location reported by the semantic engine, in crate-local
/// terms (no editor types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub position: Position,
}

impl Location {
    pub fn new(path: impl Into<PathBuf>, position: Position) -> Self {
        Self {
            path: path.into(),
            position,
        }
    }
}

/// Drop locations that point back into the scratch-file namespace.
///
/// The engine resolves definitions against the synthetic unit written to a
/// scratch file; a result inside that namespace is an artifact of the
/// translation, not a place in any real document.
pub fn filter_scratch_locations(locations: Vec<Location>, scratch_dir: &Path) -> Vec<Location> {
    locations
        .into_iter()
        .filter(|location| !location.path.starts_with(scratch_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_locations_dropped() {
        let locations = vec![
            Location::new("/home/dev/app/models/widget.go", Position::new(12, 5)),
            Location::new("/tmp/gotmpl-sense-scratch/unit.go", Position::new(6, 9)),
            Location::new("/home/dev/app/models/page.go", Position::new(3, 0)),
        ];
        let kept = filter_scratch_locations(locations, Path::new("/tmp/gotmpl-sense-scratch"));
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|l| !l.path.starts_with("/tmp")));
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_scratch_locations(Vec::new(), Path::new("/tmp")).is_empty());
    }
}
