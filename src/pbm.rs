//! Plain PBM (`P1`) reading and writing
//!
//! Header: blank lines and `#` lines are skipped, then a line that is exactly
//! `P1`, then (again after skipping) a line starting with two positive
//! integers `width height`. The body is `width * height` whitespace separated
//! `0`/`1` values in row-major order; `#` starts a comment that runs to the
//! end of the line.

use crate::error::PbmError;
use crate::models::PixelGrid;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Read the magic number and dimension lines.
///
/// Returns `(width, height)`, both positive. The reader is left positioned at
/// the first body line.
pub fn read_header<R: BufRead>(reader: &mut R) -> Result<(usize, usize), PbmError> {
    let magic = next_content_line(reader)?.ok_or(PbmError::MissingMagic)?;
    if magic != "P1" {
        return Err(PbmError::BadMagic { line: magic });
    }

    let dims = next_content_line(reader)?.ok_or(PbmError::MissingDimensions)?;
    let invalid = || PbmError::InvalidDimensions { line: dims.clone() };
    let mut tokens = dims.split_whitespace();
    let width = parse_dimension(tokens.next()).ok_or_else(invalid)?;
    let height = parse_dimension(tokens.next()).ok_or_else(invalid)?;
    width.checked_mul(height).ok_or_else(invalid)?;

    Ok((width, height))
}

/// Read a full `P1` image.
pub fn read_pbm<R: BufRead>(mut reader: R) -> Result<PixelGrid, PbmError> {
    let (width, height) = read_header(&mut reader)?;
    let expected = width * height;

    let mut data = Vec::new();
    let mut line = String::new();
    'lines: while data.len() < expected {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let content = line.split('#').next().unwrap_or_default();
        for token in content.split_whitespace() {
            let value = match token {
                "0" => 0,
                "1" => 1,
                _ => {
                    return Err(PbmError::InvalidPixel {
                        index: data.len(),
                        token: token.to_string(),
                    });
                }
            };
            data.push(value);
            if data.len() == expected {
                break 'lines;
            }
        }
    }

    if data.len() < expected {
        return Err(PbmError::TruncatedBody {
            expected,
            found: data.len(),
        });
    }

    debug!(width, height, "read PBM image");
    Ok(PixelGrid::from_raw(width, height, data)?)
}

/// Parse a `P1` image held in memory.
pub fn parse_pbm(text: &str) -> Result<PixelGrid, PbmError> {
    read_pbm(text.as_bytes())
}

/// Write `grid` as `P1`: each value followed by a space, each row by a newline.
pub fn write_pbm<W: Write>(mut writer: W, grid: &PixelGrid) -> io::Result<()> {
    writeln!(writer, "P1")?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    let mut line = Vec::with_capacity(grid.width() * 2 + 1);
    for row in grid.rows() {
        line.clear();
        for &v in row {
            line.push(b'0' + v);
            line.push(b' ');
        }
        line.push(b'\n');
        writer.write_all(&line)?;
    }
    writer.flush()
}

/// Render `grid` as a `P1` string.
pub fn to_pbm_string(grid: &PixelGrid) -> String {
    let body = grid.as_bytes().len().saturating_mul(2);
    let mut out = Vec::with_capacity(body.saturating_add(16 + grid.height()));
    // Vec<u8> writes cannot fail
    let _ = write_pbm(&mut out, grid);
    String::from_utf8_lossy(&out).into_owned()
}

fn next_content_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, PbmError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Ok(Some(trimmed.to_string()));
    }
}

fn parse_dimension(token: Option<&str>) -> Option<usize> {
    let value = token?.parse::<i64>().ok()?;
    if value <= 0 {
        return None;
    }
    usize::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_with_comments() {
        let text = "# made by hand\n\nP1\n# size next\n3 2\n1 0 1 # first row\n\n0 1 0\n";
        let grid = parse_pbm(text).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.as_bytes(), &[1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_header_leaves_reader_at_body() {
        let mut reader = Cursor::new("P1\r\n4 1 extra\r\n0 1 1 0\r\n");
        assert_eq!(read_header(&mut reader).unwrap(), (4, 1));
        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "0 1 1 0\r\n");
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(parse_pbm(""), Err(PbmError::MissingMagic)));
        assert!(matches!(
            parse_pbm("# only comments\n"),
            Err(PbmError::MissingMagic)
        ));
        assert!(matches!(
            parse_pbm("P4\n3 2\n"),
            Err(PbmError::BadMagic { .. })
        ));
        assert!(matches!(
            parse_pbm("P1\n# no size\n"),
            Err(PbmError::MissingDimensions)
        ));
        assert!(matches!(
            parse_pbm("P1\n3\n"),
            Err(PbmError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            parse_pbm("P1\n0 2\n"),
            Err(PbmError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            parse_pbm("P1\nthree two\n"),
            Err(PbmError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_body_errors() {
        assert!(matches!(
            parse_pbm("P1\n2 2\n0 1 1\n"),
            Err(PbmError::TruncatedBody {
                expected: 4,
                found: 3
            })
        ));
        match parse_pbm("P1\n2 1\n0 7\n") {
            Err(PbmError::InvalidPixel { index, token }) => {
                assert_eq!(index, 1);
                assert_eq!(token, "7");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_trailing_values_ignored() {
        let grid = parse_pbm("P1\n2 1\n1 0 1 1 junk\n").unwrap();
        assert_eq!(grid.as_bytes(), &[1, 0]);
    }

    #[test]
    fn test_write_layout() {
        let grid = PixelGrid::from_raw(2, 2, vec![1, 0, 0, 1]).unwrap();
        assert_eq!(to_pbm_string(&grid), "P1\n2 2\n1 0 \n0 1 \n");
        assert_eq!(parse_pbm(&to_pbm_string(&grid)).unwrap(), grid);
    }
}
