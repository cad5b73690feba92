//! Mark occurrences of the search term inside a title or description.

/// A run of text, either part of a match or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Byte length of a case-insensitive occurrence of `needle` at the start of `haystack`.
fn match_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for expected in needle {
        let (_, c) = chars.next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(haystack.len(), |(i, _)| i))
}

/// Split `text` into alternating unmatched and matched segments.
///
/// Matching is case-insensitive and non-overlapping, scanning left to right.
/// An empty term yields the whole text as one unmatched segment.
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if term.is_empty() {
        return vec![Segment {
            text,
            matched: false,
        }];
    }

    let needle: Vec<char> = term.chars().collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_at(&text[pos..], &needle) {
            if plain_start < pos {
                segments.push(Segment {
                    text: &text[plain_start..pos],
                    matched: false,
                });
            }
            segments.push(Segment {
                text: &text[pos..pos + len],
                matched: true,
            });
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }

    segments
}
