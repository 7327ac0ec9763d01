//! Chapter identifier
//!
//! A chapter is identified by its path relative to the book root, always
//! `/`-separated and with `.` and `..` components folded away. Index links
//! (`./intro.md#setup`), prose links between chapters and paths found while
//! walking the book directory all normalise to the same id.

use crate::constants::{EXTERNAL_LINK_PREFIXES, MARKDOWN_EXTENSIONS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// Stable identifier of a chapter: its normalised root-relative path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(String);

impl ChapterId {
    /// Build an id from a root-relative path string
    ///
    /// Fails when the path is empty or climbs above the book root.
    pub fn new(raw: &str) -> Result<Self> {
        normalize(raw).map(Self).ok_or_else(|| {
            Error::invalid_argument(format!("'{raw}' is not a path inside the book"))
        })
    }

    /// Interpret an index link target as a chapter id
    ///
    /// External URLs, empty targets and pure anchors yield `None`. Fragments
    /// and query strings are dropped and `%20` is decoded.
    pub fn from_link(target: &str) -> Option<Self> {
        let path = link_path(target)?;
        normalize(&path).map(Self)
    }

    /// Build an id from a filesystem path relative to the book root
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str()?.to_string()),
                Component::CurDir => {}
                Component::ParentDir => {
                    parts.pop()?;
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        if parts.is_empty() {
            return None;
        }
        Some(Self(parts.join("/")))
    }

    /// Resolve a prose link written inside this chapter
    ///
    /// Relative targets are taken from this chapter's directory, targets
    /// starting with `/` from the book root.
    pub fn resolve_link(&self, target: &str) -> Option<Self> {
        let path = link_path(target)?;
        if path.starts_with('/') {
            return normalize(&path).map(Self);
        }
        let joined = match self.parent() {
            Some(dir) => format!("{dir}/{path}"),
            None => path,
        };
        normalize(&joined).map(Self)
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory part of the id, if the chapter is not at the root
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(dir, _)| dir)
    }

    /// File name without extension, used as a fallback title
    pub fn file_stem(&self) -> &str {
        let name = self.0.rsplit('/').next().unwrap_or(&self.0);
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    /// True when the id has a Markdown file extension
    pub fn is_markdown(&self) -> bool {
        self.0.rsplit_once('.').is_some_and(|(_, ext)| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChapterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_external(target: &str) -> bool {
    target.contains("://")
        || EXTERNAL_LINK_PREFIXES
            .iter()
            .any(|prefix| target.starts_with(prefix))
}

/// Strip anchors, queries and percent-encoded spaces from a link target
fn link_path(target: &str) -> Option<String> {
    let target = target.trim();
    if target.is_empty() || is_external(target) {
        return None;
    }
    let end = target.find(['#', '?']).unwrap_or(target.len());
    let path = target[..end].replace("%20", " ");
    if path.is_empty() { None } else { Some(path) }
}

fn normalize(raw: &str) -> Option<String> {
    let raw = raw.trim().replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();
    for component in raw.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            part => parts.push(part),
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
