//! Document loading functionality.
//!
//! Documents are parsed into `serde_yaml::Value`. YAML is a superset of JSON,
//! so `.json` files go through the same parser. Files ending in `.gz` are
//! decompressed first, and `.jsonl`/`.ndjson` files load as a sequence with one
//! element per line.

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Loads and parses a YAML or JSON document from the filesystem.
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The file contents are not valid YAML/JSON
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    if determine_jsonl_format(path_ref) {
        parse_jsonl_content(&content)
    } else {
        parse_document(&content)
            .with_context(|| format!("Failed to parse {}", path_ref.display()))
    }
}

/// Parses a single YAML or JSON document.
pub fn parse_document(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).context("Invalid YAML/JSON document")
}

/// Parses newline-delimited JSON into a sequence. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(value);
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Sequence(lines))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes.
pub fn load_document_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_document(&content).context("Failed to parse document from stdin")
}

/// Checks for .jsonl or .ndjson, ignoring a trailing .gz.
fn determine_jsonl_format<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);
    base.ends_with(".jsonl") || base.ends_with(".ndjson")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path).context("Failed to open gzipped file")?;
    decompress_gzip_bytes(&bytes)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data - input may be corrupted")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_jsonl_format() {
        assert!(determine_jsonl_format("data.jsonl"));
        assert!(determine_jsonl_format("data.ndjson"));
        assert!(determine_jsonl_format("path/to/data.jsonl.gz"));
        assert!(!determine_jsonl_format("data.json"));
        assert!(!determine_jsonl_format("data.yaml.gz"));
    }

    #[test]
    fn test_parse_jsonl_content_skips_blank_lines() {
        let value = parse_jsonl_content("{\"id\":1}\n\n{\"id\":2}\n").unwrap();
        assert_eq!(value.as_sequence().map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_jsonl_content_empty() {
        let err = parse_jsonl_content("").unwrap_err();
        assert!(err.to_string().contains("No valid JSON found"));
    }

    #[test]
    fn test_parse_jsonl_content_reports_line() {
        let err = parse_jsonl_content("{\"ok\":true}\n{bad}\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_decompress_corrupted_bytes() {
        let err = decompress_gzip_bytes(b"not gzip data").unwrap_err();
        assert!(err.to_string().contains("decompress"));
    }
}
