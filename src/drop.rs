//! Drag-and-drop file loading
//!
//! Terminals have no drop target. Dropping files onto a terminal window
//! pastes their paths, shell-quoted and space-separated, which the editor
//! receives as a bracketed paste. This module recognizes such pastes,
//! splits them back into paths and reads the first file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// What a bracketed paste turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paste {
    /// Dropped files, in drop order
    Files(Vec<PathBuf>),
    /// Plain text to insert
    Text(String),
}

/// Classify pasted text as a file drop or plain text
pub fn classify_paste(text: &str) -> Paste {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return Paste::Text(text.to_string());
    }

    let paths: Vec<PathBuf> = match parse_path_list(trimmed) {
        Some(tokens) if tokens.first().is_some_and(|t| looks_like_path(t)) => {
            tokens.iter().map(|t| expand_path(t)).collect()
        }
        _ => return Paste::Text(text.to_string()),
    };

    // `// comment` is shaped like a path too; only real files count as a drop
    match paths.first() {
        Some(first) if fs::symlink_metadata(first).is_ok() => Paste::Files(paths),
        _ => Paste::Text(text.to_string()),
    }
}

/// Split a shell-quoted, space-separated path list
///
/// Handles single quotes (with the `'\''` idiom), double quotes and
/// backslash escapes. Returns None if a quote is left open.
pub fn parse_path_list(text: &str) -> Option<Vec<String>> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_token = true;
                loop {
                    match chars.next()? {
                        '\'' => break,
                        c => current.push(c),
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next()? {
                        '"' => break,
                        '\\' => match chars.next()? {
                            c @ ('"' | '\\' | '$' | '`') => current.push(c),
                            c => {
                                current.push('\\');
                                current.push(c);
                            }
                        },
                        c => current.push(c),
                    }
                }
            }
            '\\' => {
                in_token = true;
                current.push(chars.next()?);
            }
            c if c.is_whitespace() => {
                if in_token {
                    paths.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        paths.push(current);
    }
    Some(paths)
}

/// Check whether a token is shaped like a file path
fn looks_like_path(token: &str) -> bool {
    let bytes = token.as_bytes();
    let drive_letter = bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/');

    token.starts_with('/')
        || token.starts_with("~/")
        || token.starts_with("./")
        || token.starts_with("../")
        || token.starts_with("file://")
        || token.starts_with("\\\\")
        || drive_letter
}

/// Turn a dropped token into a filesystem path
fn expand_path(token: &str) -> PathBuf {
    if let Some(rest) = token.strip_prefix("file://") {
        // file://host/path keeps only the path
        let path = rest.find('/').map(|i| &rest[i..]).unwrap_or(rest);
        return PathBuf::from(percent_decode(path));
    }

    if let Some(rest) = token.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(token)
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";

    std::env::var_os(var).map(PathBuf::from)
}

/// Decode `%XX` escapes; malformed escapes are kept as-is
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Decode file bytes, honoring a UTF-8 or UTF-16 byte-order mark
///
/// Without a mark the bytes are taken as UTF-8; invalid sequences become
/// U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => to_unit([*a, *b]),
            // A dangling odd byte cannot form a code unit
            _ => 0xFFFD,
        })
        .collect();
    String::from_utf16_lossy(&units)
}

/// Read a whole file as text
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| EditorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "read dropped file");
    Ok(decode_text(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_single_quoted_paths() {
        assert_eq!(
            parse_path_list("'/Users/test/my file.txt'"),
            Some(vec!["/Users/test/my file.txt".to_string()])
        );
        assert_eq!(
            parse_path_list(r"'/Users/test/foo'\''s.txt' '/other/bar.txt'"),
            Some(vec![
                "/Users/test/foo's.txt".to_string(),
                "/other/bar.txt".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_backslash_and_double_quotes() {
        assert_eq!(
            parse_path_list(r"/tmp/my\ file.cs /tmp/b.cs"),
            Some(vec!["/tmp/my file.cs".to_string(), "/tmp/b.cs".to_string()])
        );
        assert_eq!(
            parse_path_list(r#""C:\Users\me\a b.cs""#),
            Some(vec![r"C:\Users\me\a b.cs".to_string()])
        );
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert_eq!(parse_path_list("'/tmp/open"), None);
        assert_eq!(parse_path_list("trailing\\"), None);
    }

    #[test]
    fn test_classify_paste() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cs");
        let b = dir.path().join("with space.cs");
        fs::write(&a, "class A {}").unwrap();
        fs::write(&b, "class B {}").unwrap();

        assert_eq!(
            classify_paste(&format!("'{}' '{}'", a.display(), b.display())),
            Paste::Files(vec![a.clone(), b.clone()])
        );
        let uri = format!("file://{}\n", b.display().to_string().replace(' ', "%20"));
        assert_eq!(classify_paste(&uri), Paste::Files(vec![b.clone()]));

        assert_eq!(
            classify_paste("int x = 1;"),
            Paste::Text("int x = 1;".to_string())
        );
        assert_eq!(
            classify_paste("/tmp/a\n/tmp/b"),
            Paste::Text("/tmp/a\n/tmp/b".to_string())
        );
        assert_eq!(classify_paste(""), Paste::Text(String::new()));
    }

    #[test]
    fn test_comment_lines_are_text() {
        assert_eq!(
            classify_paste("// TODO: fix this"),
            Paste::Text("// TODO: fix this".to_string())
        );
        assert_eq!(classify_paste("/* x */"), Paste::Text("/* x */".to_string()));
    }

    #[test]
    fn test_missing_path_is_text() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.cs");
        let pasted = missing.display().to_string();
        assert_eq!(classify_paste(&pasted), Paste::Text(pasted.clone()));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("/a%20b/%E6%97%A5.txt"), "/a b/日.txt");
        assert_eq!(percent_decode("/100%"), "/100%");
        assert_eq!(percent_decode("/%zz"), "/%zz");
    }

    #[test]
    fn test_decode_text_boms() {
        assert_eq!(decode_text(b"plain"), "plain");
        assert_eq!(decode_text(b"\xEF\xBB\xBFbom"), "bom");
        assert_eq!(decode_text(&[0xFF, 0xFE, b'h', 0, b'i', 0]), "hi");
        assert_eq!(decode_text(&[0xFE, 0xFF, 0, b'h', 0, b'i']), "hi");
        assert_eq!(decode_text(b"bad\xFFbyte"), "bad\u{FFFD}byte");
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"class A {}\r\n").unwrap();
        assert_eq!(read_file(file.path()).unwrap(), "class A {}\r\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.cs");
        match read_file(&missing) {
            Err(EditorError::FileRead { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected FileRead error, got {:?}", other),
        }
    }
}
