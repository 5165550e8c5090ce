//! Validation of the file listing returned by the hub.

use std::path::{Component, Path, PathBuf};

use crate::error::{HfError, HfResult};
use crate::models::HfRepoInfo;

/// Map a `/`-separated repository path onto `root`.
///
/// Rejects anything that could land outside `root`: empty paths, absolute
/// paths, backslashes and any segment that is not a plain file name on this
/// platform (`.`, `..`, drive prefixes).
pub fn local_path_for(root: &Path, repo_path: &str) -> HfResult<PathBuf> {
    let invalid = || HfError::InvalidResponse {
        message: format!("unsafe file path in listing: '{repo_path}'"),
    };

    if repo_path.is_empty() || repo_path.starts_with('/') || repo_path.contains('\\') {
        return Err(invalid());
    }

    let mut local = root.to_path_buf();
    for segment in repo_path.split('/') {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(invalid()),
        }
        local.push(segment);
    }
    Ok(local)
}

/// Resolved commit and validated file list of a repository revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPlan {
    /// Commit SHA every file is fetched at
    pub commit: String,
    /// Repository-relative paths, in listing order
    pub files: Vec<String>,
}

/// Turn a repository info payload into a download plan.
///
/// Every path is checked before any file is written, so a bad entry fails
/// the whole snapshot up front.
pub fn plan_snapshot(info: HfRepoInfo, root: &Path) -> HfResult<SnapshotPlan> {
    let commit = info
        .sha
        .filter(|sha| !sha.is_empty())
        .ok_or_else(|| HfError::InvalidResponse {
            message: "repository info has no commit sha".to_string(),
        })?;

    let files = info
        .siblings
        .into_iter()
        .map(|sibling| sibling.rfilename)
        .collect::<Vec<_>>();

    for file in &files {
        local_path_for(root, file)?;
    }

    Ok(SnapshotPlan { commit, files })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HfSibling;

    fn info(sha: Option<&str>, files: &[&str]) -> HfRepoInfo {
        HfRepoInfo {
            id: Some("org/set".to_string()),
            sha: sha.map(String::from),
            siblings: files
                .iter()
                .map(|f| HfSibling {
                    rfilename: (*f).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_local_path_nested() {
        let path = local_path_for(Path::new("data"), "train/part-0.parquet").unwrap();
        assert_eq!(path, PathBuf::from("data/train/part-0.parquet"));
    }

    #[test]
    fn test_local_path_rejects_traversal() {
        let root = Path::new("data");
        for bad in ["../escape", "a/../../b", "/etc/passwd", "", "a//b", "./x", "a\\b", "."] {
            assert!(local_path_for(root, bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_plan_keeps_listing_order() {
        let plan = plan_snapshot(
            info(Some("abc"), &[".gitattributes", "README.md", "data/rules.csv"]),
            Path::new("data"),
        )
        .unwrap();

        assert_eq!(plan.commit, "abc");
        assert_eq!(plan.files, vec![".gitattributes", "README.md", "data/rules.csv"]);
    }

    #[test]
    fn test_plan_requires_sha() {
        let err = plan_snapshot(info(None, &["README.md"]), Path::new("data")).unwrap_err();
        assert!(matches!(err, HfError::InvalidResponse { .. }));
    }

    #[test]
    fn test_plan_rejects_any_bad_entry() {
        let err = plan_snapshot(
            info(Some("abc"), &["README.md", "../outside"]),
            Path::new("data"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("../outside"));
    }
}
