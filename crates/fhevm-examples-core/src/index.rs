//! SUMMARY.md upkeep: the category-grouped table of contents listing all
//! generated documents.
//!
//! The parser is deliberately loose. Summary files get hand-edited, so the
//! only structure it recognizes is `## ` section headers; every other line
//! is opaque body content, preserved verbatim and never reordered. Upserts
//! append, they never rewrite what is already there.
//!
//! Duplicate detection keys on the link target's file name only, matching
//! the source tool this replaces. Two categories therefore cannot link
//! documents that share a file name; accepted limitation.

use std::path::Path;

use crate::error::Result;

const DEFAULT_PREAMBLE: &str = "# Table of contents";
const DEFAULT_SECTION: &str = "Examples";

/// One `## ` section: its header line plus the opaque lines that follow it
/// up to the next header.
#[derive(Debug, Clone)]
struct Section {
    header: String,
    body: Vec<String>,
}

impl Section {
    fn name(&self) -> &str {
        self.header.trim_start_matches('#').trim()
    }
}

/// In-memory model of a summary file: preamble lines, then ordered sections.
#[derive(Debug, Clone)]
pub struct SummaryIndex {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl SummaryIndex {
    /// The index produced for a docs tree that has never been generated
    /// into: a title and one empty default section.
    pub fn empty() -> Self {
        Self {
            preamble: vec![DEFAULT_PREAMBLE.to_string(), String::new()],
            sections: vec![Section {
                header: format!("## {DEFAULT_SECTION}"),
                body: vec![String::new()],
            }],
        }
    }

    /// Parse summary text. Never fails; unrecognized content is kept as
    /// opaque body lines.
    pub fn parse(text: &str) -> Self {
        let mut preamble = Vec::new();
        let mut sections: Vec<Section> = Vec::new();

        for line in text.lines() {
            if line.starts_with("## ") {
                sections.push(Section {
                    header: line.to_string(),
                    body: Vec::new(),
                });
            } else if let Some(section) = sections.last_mut() {
                section.body.push(line.to_string());
            } else {
                preamble.push(line.to_string());
            }
        }

        Self { preamble, sections }
    }

    /// Serialize back to text, reproducing every retained line.
    pub fn to_text(&self) -> String {
        let mut lines: Vec<&str> = self.preamble.iter().map(String::as_str).collect();
        for section in &self.sections {
            lines.push(&section.header);
            lines.extend(section.body.iter().map(String::as_str));
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Whether any link anywhere in the file targets the given file name.
    fn contains_file(&self, file_name: &str) -> bool {
        let mut all_lines = self
            .preamble
            .iter()
            .chain(self.sections.iter().flat_map(|s| {
                std::iter::once(&s.header).chain(s.body.iter())
            }));
        all_lines.any(|line| {
            link_target(line)
                .and_then(|t| Path::new(t).file_name())
                .is_some_and(|n| n == std::ffi::OsStr::new(file_name))
        })
    }

    /// Insert a link for `link_target` under `category`.
    ///
    /// No-op if a link to the same file name already exists (idempotent
    /// regeneration). A known category gets the link appended to its block;
    /// a new category gets a header and link appended at the end of file.
    pub fn upsert(&mut self, category: &str, title: &str, link_target: &str) {
        let file_name = match Path::new(link_target).file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => link_target.to_string(),
        };
        if self.contains_file(&file_name) {
            tracing::debug!(link = link_target, "index already links this document");
            return;
        }

        let link = format!("* [{title}]({link_target})");
        if let Some(section) = self.sections.iter_mut().find(|s| s.name() == category) {
            let pos = section
                .body
                .iter()
                .rposition(|l| !l.trim().is_empty())
                .map(|i| i + 1)
                .unwrap_or(section.body.len());
            section.body.insert(pos, link);
        } else {
            if let Some(last) = self.sections.last_mut() {
                if last.body.last().is_none_or(|l| !l.trim().is_empty()) {
                    last.body.push(String::new());
                }
            }
            self.sections.push(Section {
                header: format!("## {category}"),
                body: vec![String::new(), link, String::new()],
            });
        }
    }
}

/// Extract the `(target)` of a markdown link, if the line holds one.
fn link_target(line: &str) -> Option<&str> {
    let start = line.find("](")? + 2;
    let end = line[start..].find(')')? + start;
    Some(&line[start..end])
}

/// Load (or initialize), mutate, and atomically rewrite a summary file.
///
/// The link target is written relative to the summary file's directory when
/// the output path sits under it, which is how GitBook resolves links.
pub fn upsert(index_path: &Path, category: &str, title: &str, output_path: &Path) -> Result<()> {
    let mut index = if index_path.is_file() {
        SummaryIndex::parse(&std::fs::read_to_string(index_path)?)
    } else {
        SummaryIndex::empty()
    };

    let link_target = index_path
        .parent()
        .and_then(|dir| output_path.strip_prefix(dir).ok())
        .unwrap_or(output_path);
    index.upsert(category, title, &link_target.to_string_lossy());

    write_atomic(index_path, &index.to_text())
}

/// Write-then-rename so a crash mid-write cannot truncate the index.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "SUMMARY.md".to_string());
    let tmp = path.with_file_name(format!("{file_name}.tmp"));
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn index_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("docs/SUMMARY.md")
    }

    fn out(dir: &tempfile::TempDir, rel: &str) -> PathBuf {
        dir.path().join(rel)
    }

    #[test]
    fn test_created_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        upsert(&path, "Basic", "FHE Counter", &out(&dir, "docs/examples/fhe-counter.md"))
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Table of contents"));
        assert!(text.contains("## Basic"));
        assert!(text.contains("* [FHE Counter](examples/fhe-counter.md)"));
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        let out = &out(&dir, "docs/examples/fhe-counter.md");
        upsert(&path, "Basic", "FHE Counter", out).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        upsert(&path, "Basic", "FHE Counter", out).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("fhe-counter.md").count(), 1);
    }

    #[test]
    fn test_same_category_links_are_consecutive() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        upsert(&path, "Basic", "FHE Counter", &out(&dir, "docs/examples/fhe-counter.md"))
            .unwrap();
        upsert(&path, "Basic", "FHE Add", &out(&dir, "docs/examples/fhe-add.md")).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("## Basic").count(), 1);
        let counter = text.find("* [FHE Counter]").unwrap();
        let add = text.find("* [FHE Add]").unwrap();
        assert!(counter < add);
        // Nothing but whitespace between the two links.
        assert!(text[counter..add]
            .lines()
            .skip(1)
            .all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_new_category_appended_at_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        upsert(&path, "Basic", "FHE Counter", &out(&dir, "docs/examples/fhe-counter.md"))
            .unwrap();
        upsert(
            &path,
            "Decryption",
            "User Decrypt",
            &out(&dir, "docs/examples/user-decrypt.md"),
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let basic = text.find("## Basic").unwrap();
        let decryption = text.find("## Decryption").unwrap();
        assert!(basic < decryption);
        assert!(text[decryption..].contains("* [User Decrypt](examples/user-decrypt.md)"));
    }

    #[test]
    fn test_insertion_before_next_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "# Table of contents\n\n## Basic\n\n* [FHE Counter](examples/fhe-counter.md)\n\n## Advanced\n\n* [Auction](examples/auction.md)\n",
        )
        .unwrap();

        upsert(&path, "Basic", "FHE Add", &out(&dir, "docs/examples/fhe-add.md")).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let add = text.find("* [FHE Add]").unwrap();
        let advanced = text.find("## Advanced").unwrap();
        assert!(add < advanced);
    }

    #[test]
    fn test_hand_edits_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "# Table of contents\n\nSome hand-written intro.\n\n## Basic\n\n* [FHE Counter](examples/fhe-counter.md)\n<!-- keep this comment -->\n",
        )
        .unwrap();

        upsert(&path, "Basic", "FHE Add", &out(&dir, "docs/examples/fhe-add.md")).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Some hand-written intro."));
        assert!(text.contains("<!-- keep this comment -->"));
        assert!(text.contains("* [FHE Add](examples/fhe-add.md)"));
    }

    #[test]
    fn test_duplicate_file_name_across_categories_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        upsert(&path, "Basic", "Counter", &out(&dir, "docs/examples/counter.md")).unwrap();
        upsert(&path, "Advanced", "Counter Again", &out(&dir, "docs/other/counter.md"))
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("## Advanced"));
        assert_eq!(text.matches("counter.md").count(), 1);
    }

    #[test]
    fn test_no_leftover_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = index_path(&dir);
        upsert(&path, "Basic", "Counter", &out(&dir, "docs/examples/counter.md")).unwrap();
        assert!(!path.with_file_name("SUMMARY.md.tmp").exists());
    }
}
