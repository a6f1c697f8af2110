//! Front-matter extraction for Markdown entry files.
//!
//! A line scanner rather than a regex: the first line must be exactly `---`
//! and the block runs until the next line that is exactly `---`.

/// Front-matter delimiter line.
const DELIMITER: &str = "---";

/// A document split into its front-matter header and the remaining body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Text between the delimiters, without the delimiter lines.
    pub header: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

/// Split one line off the front of `text`.
///
/// Returns the line without its terminator (a trailing `\r` is dropped too)
/// and the rest after the `\n`, or `None` for the rest on the last line.
fn split_line(text: &str) -> (&str, Option<&str>) {
    let (line, rest) = match text.find('\n') {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    };
    (line.strip_suffix('\r').unwrap_or(line), rest)
}

/// Locate the front-matter block at the very start of `content`.
///
/// A leading UTF-8 byte order mark is ignored. Returns `None` when the
/// document does not open with a delimiter line or the block is never
/// closed.
#[must_use]
pub fn extract_front_matter(content: &str) -> Option<FrontMatter<'_>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let (first, rest) = split_line(content);
    if first != DELIMITER {
        return None;
    }
    let header_start = rest?;

    let mut offset = 0;
    let mut remaining = header_start;
    loop {
        let (line, next) = split_line(remaining);
        if line == DELIMITER {
            let header = header_start[..offset].strip_suffix('\n').unwrap_or("");
            let header = header.strip_suffix('\r').unwrap_or(header);
            return Some(FrontMatter {
                header,
                body: next.unwrap_or(""),
            });
        }
        let next = next?;
        offset += remaining.len() - next.len();
        remaining = next;
    }
}
