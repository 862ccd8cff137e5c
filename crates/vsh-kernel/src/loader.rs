//! Bulk tree loader.
//!
//! Builds a complete namespace tree from a semicolon-delimited description
//! file: a header row naming the `path`, `type`, and optional `content`
//! columns, then one row per node. Rows are applied in file order, so a
//! description must list parents before children — there is no multi-pass
//! resolution. Loading is all-or-nothing: any bad row aborts the load and
//! the partial tree is discarded.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;
use tracing::debug;

use crate::vfs::{NodeKind, VfsTree};

/// Column delimiter in the description format.
const DELIMITER: char = ';';

/// Fixed path checked for a message of the day after loading.
pub const MOTD_PATH: &str = "/motd";

/// A description that could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read description: {0}")]
    Io(#[from] std::io::Error),

    #[error("description has no header row")]
    MissingHeader,

    #[error("description header is missing the `{0}` column")]
    MissingColumn(&'static str),

    #[error("description line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}

/// Column layout discovered from the header row.
struct Header {
    path: usize,
    kind: usize,
    content: Option<usize>,
    width: usize,
}

impl Header {
    fn parse(line: &str) -> Result<Self, LoadError> {
        let names: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        let index = |wanted: &'static str| -> Result<usize, LoadError> {
            names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(wanted))
                .ok_or(LoadError::MissingColumn(wanted))
        };
        Ok(Self {
            path: index("path")?,
            kind: index("type")?,
            content: names
                .iter()
                .position(|n| n.eq_ignore_ascii_case("content")),
            width: names.len(),
        })
    }
}

/// Load a description file into a fresh tree.
pub fn load_description(path: &Path) -> Result<VfsTree, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_description(&text)
}

/// Parse description text into a fresh tree.
///
/// On error the partial tree never escapes; the caller keeps whatever
/// tree it had before.
pub fn parse_description(text: &str) -> Result<VfsTree, LoadError> {
    let mut lines = text.lines().enumerate();
    let header = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(_, line)| Header::parse(line))
        .ok_or(LoadError::MissingHeader)??;

    let mut tree = VfsTree::new();
    let mut loaded = 0usize;
    for (idx, raw) in lines {
        if raw.trim().is_empty() {
            continue;
        }
        // 1-based, counting from the top of the file
        let line = idx + 1;
        let fields: Vec<&str> = raw.splitn(header.width, DELIMITER).collect();

        let path = field(&fields, header.path, "path", line)?;
        let kind = match field(&fields, header.kind, "type", line)? {
            "dir" | "directory" => NodeKind::Directory,
            "file" => NodeKind::File,
            other => {
                return Err(LoadError::MalformedRow {
                    line,
                    reason: format!("unknown type `{other}`"),
                })
            }
        };

        // The root is synthesized, never declared.
        if path == "/" {
            continue;
        }

        let content = match kind {
            NodeKind::File => header
                .content
                .and_then(|i| fields.get(i))
                .map(|raw| decode_content(raw.trim()))
                .filter(|c| !c.is_empty()),
            NodeKind::Directory => None,
        };

        tree.attach(path, kind, content)
            .map_err(|e| LoadError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
        loaded += 1;
    }

    debug!(nodes = loaded, "description loaded");
    Ok(tree)
}

fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &str,
    line: usize,
) -> Result<&'a str, LoadError> {
    match fields.get(index).map(|f| f.trim()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LoadError::MalformedRow {
            line,
            reason: format!("missing {name}"),
        }),
    }
}

/// Best-effort reverse of base64-encoded content.
///
/// Any decode or UTF-8 failure falls back to the raw string; content is
/// never an error source.
fn decode_content(raw: &str) -> String {
    match BASE64.decode(raw) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VfsTree;

    #[test]
    fn loads_directories_and_files() {
        let tree = parse_description(
            "path;type;content\n\
             /home;dir;\n\
             /home/notes;file;aGVsbG8=\n",
        )
        .unwrap();

        let notes = tree.resolve("/home/notes").unwrap();
        assert_eq!(tree.node(notes).content(), Some("hello"));
        assert!(tree.node(tree.resolve("/home").unwrap()).is_dir());
    }

    #[test]
    fn root_row_is_skipped() {
        let tree = parse_description("path;type\n/;dir\n/a;dir\n").unwrap();
        assert!(tree.resolve("/a").is_some());
        assert_eq!(tree.count(VfsTree::ROOT), 2);
    }

    #[test]
    fn header_may_reorder_columns() {
        let tree = parse_description(
            "type;content;path\nfile;aGk=;/greeting\n",
        )
        .unwrap();
        let greeting = tree.resolve("/greeting").unwrap();
        assert_eq!(tree.node(greeting).content(), Some("hi"));
    }

    #[test]
    fn child_before_parent_is_malformed() {
        let err = parse_description("path;type\n/a/b;file\n/a;dir\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn file_as_parent_is_malformed() {
        let err = parse_description(
            "path;type\n/a;file\n/a/b;file\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn duplicate_path_is_malformed() {
        let err = parse_description("path;type\n/a;dir\n/a;dir\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn missing_type_is_malformed() {
        let err = parse_description("path;type\n/a;\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn missing_column_in_header_is_fatal() {
        let err = parse_description("path;content\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("type")));
    }

    #[test]
    fn empty_description_has_no_header() {
        assert!(matches!(
            parse_description("").unwrap_err(),
            LoadError::MissingHeader
        ));
    }

    #[test]
    fn undecodable_content_is_kept_verbatim() {
        // "hello!" is not valid base64; it must survive untouched
        let tree = parse_description("path;type;content\n/x;file;hello!\n").unwrap();
        let x = tree.resolve("/x").unwrap();
        assert_eq!(tree.node(x).content(), Some("hello!"));
    }

    #[test]
    fn content_may_contain_the_delimiter() {
        // content is the last column; embedded delimiters stay in it
        let tree = parse_description("path;type;content\n/x;file;a;b;c\n").unwrap();
        let x = tree.resolve("/x").unwrap();
        assert_eq!(tree.node(x).content(), Some("a;b;c"));
    }
}
