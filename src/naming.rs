//! Content fingerprinting and revisioned output file names.

use std::path::Path;

/// Number of hex characters kept from the content hash.
const FINGERPRINT_LEN: usize = 10;

/// Short, deterministic content fingerprint over raw bytes.
///
/// Same bytes always produce the same fingerprint; different bytes collide
/// only with negligible probability.
pub fn fingerprint(source: &[u8]) -> String {
    let hash = blake3::hash(source);
    hex::encode(&hash.as_bytes()[..FINGERPRINT_LEN / 2])
}

/// Compute the output file name for bundled content.
///
/// Returns `file_name` unchanged when revisioning is off. Otherwise the
/// content fingerprint is injected before the final extension so unchanged
/// bytes keep a stable, cache-friendly name (`app.js` -> `app-<hash>.js`).
/// Directory components are preserved untouched.
pub fn out_file_name(source: &[u8], file_name: &str, rev: bool) -> String {
    if rev {
        revisioned_file_name(file_name, &fingerprint(source))
    } else {
        file_name.to_string()
    }
}

fn revisioned_file_name(file_name: &str, fingerprint: &str) -> String {
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let stem = &file_name[..file_name.len() - ext.len() - 1];
            format!("{stem}-{fingerprint}.{ext}")
        }
        None => format!("{file_name}-{fingerprint}"),
    }
}
