//! Text decoding with an encoding fallback list.
//!
//! Data files are usually UTF-8 but spreadsheets exported on Traditional
//! Chinese Windows produce cp950 (Big5). Each encoding is tried in order and
//! the first clean decode wins; replacement characters are never accepted.

use std::path::Path;

use encoding_rs::{BIG5, Encoding, UTF_8};

use super::error::LoadError;

/// Default fallback order.
pub fn default_encodings() -> Vec<&'static Encoding> {
    vec![UTF_8, BIG5]
}

/// Resolve an encoding label.
///
/// Accepts any WHATWG label plus the Windows code page names `cp950` and
/// `ms950`, which map to Big5.
pub fn parse_encoding(label: &str) -> Result<&'static Encoding, LoadError> {
    let normalized = label.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "cp950" | "ms950" | "windows-950" => Ok(BIG5),
        other => Encoding::for_label(other.as_bytes())
            .ok_or_else(|| LoadError::UnknownEncoding(label.to_string())),
    }
}

/// Decode `bytes` with the first encoding that produces no errors.
///
/// A leading byte-order mark is dropped from the result.
pub fn decode(bytes: &[u8], encodings: &[&'static Encoding]) -> Option<(String, &'static Encoding)> {
    encodings.iter().find_map(|&encoding| {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if had_errors {
            return None;
        }
        let text = text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string();
        Some((text, encoding))
    })
}

/// Read a file and decode it with the fallback list.
pub fn read_text(
    path: &Path,
    encodings: &[&'static Encoding],
) -> Result<(String, &'static Encoding), LoadError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    decode(&bytes, encodings).ok_or_else(|| LoadError::Undecodable {
        path: path.to_path_buf(),
        tried: encodings
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", "),
    })
}
