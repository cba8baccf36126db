use super::{parse_plaintext, parse_rle, LexiconEntry, ParsedPattern};
use crate::ImportError;
use std::path::Path;
use tracing::debug;

/// Reads a pattern file, picking the parser by extension:
/// `rle`, `cells`/`txt` (plaintext) or `json` (lexicon entry).
pub fn load_pattern_file(path: &Path) -> Result<ParsedPattern, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let parse: fn(&str) -> Result<ParsedPattern, ImportError> = match extension.as_deref() {
        Some("rle") => parse_rle,
        Some("cells" | "txt") => parse_plaintext,
        Some("json") => |text: &str| LexiconEntry::parse(text)?.to_pattern(),
        _ => {
            return Err(ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pattern = parse(&text)?;
    debug!(
        path = %path.display(),
        width = pattern.width,
        height = pattern.height,
        "parsed pattern file"
    );
    Ok(pattern)
}
