use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::treesitter::detect_language;

/// A job script paired with the contract that declares its interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobEntry {
    pub script: PathBuf,
    pub contract: PathBuf,
    pub language: String,
}

pub struct JobWalker {
    root: PathBuf,
    contract_suffix: String,
    ignore: GlobSet,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid ignore pattern `{pattern}`: {message}")]
pub struct IgnorePatternError {
    pub pattern: String,
    pub message: String,
}

impl JobWalker {
    pub fn new(root: &Path, contract_suffix: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            contract_suffix: contract_suffix.to_string(),
            ignore: GlobSet::empty(),
        }
    }

    /// Skip scripts whose path relative to the root matches any pattern.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self, IgnorePatternError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| IgnorePatternError {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        self.ignore = builder.build().map_err(|e| IgnorePatternError {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;
        Ok(self)
    }

    /// All scripts under the root that have a sibling contract, sorted by path.
    /// Scripts without a contract are not jobs and are skipped silently.
    pub fn walk(&self) -> Vec<JobEntry> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(".jobcheckignore")
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };

            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let Some(lang) = detect_language(&path) else {
                continue;
            };
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            if self.ignore.is_match(relative) {
                continue;
            }
            let contract = contract_path_for(&path, &self.contract_suffix);
            if contract.is_file() {
                entries.push(JobEntry {
                    script: path,
                    contract,
                    language: lang.to_string(),
                });
            }
        }

        entries.sort_by(|a, b| a.script.cmp(&b.script));
        entries
    }
}

/// `jobs/deploy.ts` + `.json` -> `jobs/deploy.json`.
pub fn contract_path_for(script: &Path, suffix: &str) -> PathBuf {
    let stem = script
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    script.with_file_name(format!("{stem}{suffix}"))
}
