//! `yarn.lock`
//!
//! Yarn lockfiles are not line-structured key/value files: classic (v1) uses a
//! custom syntax and berry (v2+) a YAML dialect. Both are scanned with the
//! same text heuristics rather than a full parser:
//!
//! 1. split the file into blocks on blank lines,
//! 2. take the first block that mentions `<name>@` and the declared specifier
//!    (several majors of one package can coexist),
//! 3. in that block, the first line containing `version` carries the version
//!    as its second whitespace-separated token.

use apphost_fs::{AppFile, NormalizedPath};

use super::{DependencyQuery, LockfileReader};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct YarnLockfile;

impl LockfileReader for YarnLockfile {
    fn file(&self) -> AppFile {
        AppFile::YarnLock
    }

    fn find_version(
        &self,
        _path: &NormalizedPath,
        content: &str,
        query: &DependencyQuery<'_>,
    ) -> Result<Option<String>> {
        let content = content.replace("\r\n", "\n");
        let marker = format!("{}@", query.name);

        let version = content
            .split("\n\n")
            .filter(|block| block.contains(&marker) && block.contains(query.declared))
            .find_map(version_in_block);

        Ok(version)
    }
}

fn version_in_block(block: &str) -> Option<String> {
    let line = block.lines().find(|line| line.contains("version"))?;
    let token = line.split_whitespace().nth(1)?;
    Some(token.trim_matches('"').to_string())
}
