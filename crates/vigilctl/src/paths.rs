//! Config-file discovery.

use std::path::PathBuf;

/// Ordered candidate list for the config file.
///
/// An explicit `-c` path is the only candidate when given; the fallback
/// chain is `~/.vigil/config.yaml`, then `./config.yaml` in the working
/// directory.
pub fn candidate_paths(explicit: Option<PathBuf>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path];
    }

    let mut candidates = Vec::new();
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".vigil").join("config.yaml"));
    }
    candidates.push(PathBuf::from("config.yaml"));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_is_sole_candidate() {
        let candidates = candidate_paths(Some(PathBuf::from("/tmp/custom.yaml")));
        assert_eq!(candidates, vec![PathBuf::from("/tmp/custom.yaml")]);
    }

    #[test]
    fn test_default_chain_ends_with_working_directory() {
        let candidates = candidate_paths(None);
        assert!(!candidates.is_empty());
        assert_eq!(candidates.last().unwrap(), &PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_home_candidate_precedes_working_directory() {
        if dirs::home_dir().is_none() {
            return; // No home in this environment, chain is cwd-only
        }
        let candidates = candidate_paths(None);
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].ends_with(".vigil/config.yaml"));
    }
}
