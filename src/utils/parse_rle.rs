use super::ParsedPattern;
use crate::ImportError;

/// Largest picture an RLE header may declare, in cells.
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

/// Parses a pattern in RLE format into a picture of its declared size.
pub fn parse_rle(text: &str) -> Result<ParsedPattern, ImportError> {
    let data = text.as_bytes();

    let parse_next_number = |i: &mut usize| -> Option<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return None;
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = text.get(*i..j)?.parse::<usize>().ok()?;
        *i = j;
        Some(ans)
    };

    let mut i = 0;
    // skipping comment and blank lines
    loop {
        while i < data.len() && data[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < data.len() && data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        } else {
            break;
        }
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(ImportError::MissingRleHeader);
    }
    let width = parse_next_number(&mut i).ok_or(ImportError::MissingRleHeader)?;
    let height = parse_next_number(&mut i).ok_or(ImportError::MissingRleHeader)?;
    if width == 0 || height == 0 {
        return Err(ImportError::ZeroSize { width, height });
    }
    if width
        .checked_mul(height)
        .map_or(true, |cells| cells > MAX_PATTERN_CELLS)
    {
        return Err(ImportError::TooLarge { width, height });
    }
    let mut result = ParsedPattern::blank(width, height);
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }

    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, 1usize);
    let out_of_bounds = |x: usize, y: usize| ImportError::OutOfBounds {
        x,
        y,
        width,
        height,
    };
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => {
                cnt = parse_next_number(&mut i).ok_or(ImportError::UnexpectedSymbol {
                    symbol: data[i] as char,
                    offset: i,
                })?;
                continue;
            }
            b'o' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| y < height && end <= width)
                    .ok_or_else(|| out_of_bounds(x.saturating_add(cnt).saturating_sub(1), y))?;
                result.cells[x + y * width..end + y * width].fill(true);
                x = end;
            }
            b'b' => x = x.checked_add(cnt).ok_or_else(|| out_of_bounds(usize::MAX, y))?,
            b'$' => (x, y) = (0, y.checked_add(cnt).ok_or_else(|| out_of_bounds(0, usize::MAX))?),
            b'!' => break,
            c if c.is_ascii_whitespace() => {}
            c => {
                return Err(ImportError::UnexpectedSymbol {
                    symbol: c as char,
                    offset: i,
                })
            }
        }
        (i, cnt) = (i + 1, 1);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::parse_rle;
    use crate::ImportError;

    const GLIDER: &str = "#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";

    #[test]
    fn test_glider() {
        let pattern = parse_rle(GLIDER).unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 3));
        let alive = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|&(x, y)| pattern.is_alive(x, y))
            .collect::<Vec<_>>();
        assert_eq!(alive, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_multiline_body_and_row_skips() {
        let pattern = parse_rle("x = 12, y = 4\n12o2$\no!").unwrap();
        assert_eq!(pattern.population(), 13);
        assert!(pattern.is_alive(11, 0));
        assert!(!pattern.is_alive(0, 1));
        assert!(pattern.is_alive(0, 2));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_rle("bob$2bo$3o!"),
            Err(ImportError::MissingRleHeader)
        ));
        assert!(matches!(
            parse_rle("x = 3\nbo!"),
            Err(ImportError::MissingRleHeader)
        ));
    }

    #[test]
    fn test_zero_size() {
        assert!(matches!(
            parse_rle("x = 0, y = 3\n!"),
            Err(ImportError::ZeroSize { .. })
        ));
    }

    #[test]
    fn test_cells_outside_box() {
        assert!(matches!(
            parse_rle("x = 2, y = 1\n3o!"),
            Err(ImportError::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_rle("x = 2, y = 1\n$o!"),
            Err(ImportError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_huge_runs_are_rejected() {
        assert!(matches!(
            parse_rle("x = 2, y = 1\n18446744073709551615b18446744073709551615bo!"),
            Err(ImportError::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_rle("x = 2, y = 1\n18446744073709551615$2$o!"),
            Err(ImportError::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_rle("x = 2, y = 1\n1b18446744073709551615o!"),
            Err(ImportError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_huge_header_is_rejected() {
        assert!(matches!(
            parse_rle("x = 4294967296, y = 4294967296\no!"),
            Err(ImportError::TooLarge { .. })
        ));
        assert!(matches!(
            parse_rle("x = 100000, y = 100000\no!"),
            Err(ImportError::TooLarge { .. })
        ));
        assert!(parse_rle("x = 4096, y = 4096\no!").is_ok());
    }

    #[test]
    fn test_unexpected_symbol() {
        assert!(matches!(
            parse_rle("x = 2, y = 1\nqo!"),
            Err(ImportError::UnexpectedSymbol { symbol: 'q', .. })
        ));
    }
}
