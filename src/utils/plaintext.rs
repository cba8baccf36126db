use super::ParsedPattern;
use crate::ImportError;

/// Parses the plaintext picture format (`.cells`, lexicon entries).
///
/// `O` marks a live cell, any other character a dead one. Lines starting with `!`
/// are comments. Short rows are padded with dead cells up to the widest row.
pub fn parse_plaintext(text: &str) -> Result<ParsedPattern, ImportError> {
    let mut rows = text
        .lines()
        .filter(|line| !line.starts_with('!'))
        .collect::<Vec<_>>();
    // a final newline leaves no extra row, but a blank trailing line does
    while rows.last().is_some_and(|line| line.trim().is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let width = rows
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let mut result = ParsedPattern::blank(width, rows.len());
    for (y, line) in rows.iter().enumerate() {
        for (x, c) in line.chars().enumerate() {
            result.cells[x + y * width] = c == 'O';
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::parse_plaintext;
    use crate::ImportError;

    #[test]
    fn test_glider() {
        let pattern = parse_plaintext("!Name: Glider\n.O.\n..O\nOOO\n").unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 3));
        assert_eq!(pattern.population(), 5);
        assert!(pattern.is_alive(1, 0));
        assert!(pattern.is_alive(2, 1));
        assert!(!pattern.is_alive(0, 0));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let pattern = parse_plaintext("O\n..O\n").unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 2));
        assert!(pattern.is_alive(0, 0));
        assert!(!pattern.is_alive(2, 0));
        assert!(pattern.is_alive(2, 1));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(parse_plaintext(""), Err(ImportError::Empty)));
        assert!(matches!(
            parse_plaintext("!only a comment\n\n"),
            Err(ImportError::Empty)
        ));
    }

    #[test]
    fn test_only_capital_o_is_alive() {
        let pattern = parse_plaintext("o*O#").unwrap();
        assert_eq!(pattern.population(), 1);
        assert!(pattern.is_alive(2, 0));
    }
}
