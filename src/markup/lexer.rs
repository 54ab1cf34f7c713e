// src/markup/lexer.rs  —  Flat, forward-only split of HTML-ish text into segments
use std::ops::Range;

/// Elements whose content is raw text and runs until the matching close tag.
const RAW_TEXT: &[&str] = &["script", "style", "textarea"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind { Open, Close, SelfClosing }

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Character data between tags
    Text(Range<usize>),
    Tag {
        span: Range<usize>,
        name: String,
        kind: TagKind,
    },
    /// Content of a raw-text element (script/style/textarea), never scanned
    Raw(Range<usize>),
    /// Comment, doctype or processing instruction, copied verbatim
    Other(Range<usize>),
}

impl Segment {
    pub fn span(&self) -> Range<usize> {
        match self {
            Segment::Text(r) | Segment::Raw(r) | Segment::Other(r) => r.clone(),
            Segment::Tag { span, .. } => span.clone(),
        }
    }
}

/// Split `src` into consecutive segments covering it exactly.
///
/// Not a conforming HTML parser: a `<` that does not start a tag, or a tag
/// with no closing `>`, is treated as text.
pub fn segments(src: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(off) = src[pos..].find('<') {
        let lt = pos + off;
        let Some((seg, end)) = markup_at(src, lt) else {
            pos = lt + 1;
            continue;
        };
        if text_start < lt {
            out.push(Segment::Text(text_start..lt));
        }

        let raw_close = match &seg {
            Segment::Tag { name, kind: TagKind::Open, .. } if RAW_TEXT.contains(&name.as_str()) => {
                Some(name.clone())
            }
            _ => None,
        };
        out.push(seg);
        pos = end;

        if let Some(name) = raw_close {
            let close = find_close_tag(src, end, &name).unwrap_or(src.len());
            if end < close {
                out.push(Segment::Raw(end..close));
            }
            pos = close;
        }
        text_start = pos;
    }

    if text_start < src.len() {
        out.push(Segment::Text(text_start..src.len()));
    }
    out
}

/// Recognize markup starting at `lt` (which holds '<').
fn markup_at(src: &str, lt: usize) -> Option<(Segment, usize)> {
    let rest = &src[lt..];
    if rest.starts_with("<!--") {
        let end = rest[4..].find("-->").map_or(src.len(), |i| lt + 4 + i + 3);
        return Some((Segment::Other(lt..end), end));
    }
    if rest.starts_with("<!") || rest.starts_with("<?") {
        let close = rest[1..].find(['<', '>']).map(|i| i + 1)?;
        if rest.as_bytes()[close] != b'>' {
            return None;
        }
        let end = lt + close + 1;
        return Some((Segment::Other(lt..end), end));
    }

    let (kind, name_start) = if rest.starts_with("</") { (TagKind::Close, 2) } else { (TagKind::Open, 1) };
    let name_len = rest[name_start..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(rest.len() - name_start);
    let first = rest[name_start..].chars().next()?;
    if name_len == 0 || !first.is_ascii_alphabetic() {
        return None;
    }

    let end = lt + tag_end(rest)?;
    let name = rest[name_start..name_start + name_len].to_ascii_lowercase();
    let kind = if kind == TagKind::Open && src[..end - 1].ends_with('/') {
        TagKind::SelfClosing
    } else {
        kind
    };
    Some((Segment::Tag { span: lt..end, name, kind }, end))
}

/// Offset just past the '>' closing the tag at the start of `tag`,
/// skipping '>' inside quoted attribute values. An unquoted '<' ends the
/// attempt, so a run of unterminated tags is not rescanned to the end.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in tag.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _)           => {}
            (None, '"' | '\'')     => quote = Some(c),
            (None, '>')            => return Some(i + 1),
            (None, '<')            => return None,
            _                      => {}
        }
    }
    None
}

/// Byte offset of the next `</name` (ASCII case-insensitive) at or after `from`.
fn find_close_tag(src: &str, from: usize, name: &str) -> Option<usize> {
    let needle = format!("</{name}");
    let hay = src.as_bytes();
    (from..hay.len().saturating_sub(needle.len() - 1))
        .find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle.as_bytes()))
}

/// True when the tag source `tag` (e.g. `<a href="x" hidden>`) carries `attr`.
pub fn has_attribute(tag: &str, attr: &str) -> bool {
    let inner = tag.trim_start_matches('<').trim_end_matches('>');
    let mut quote: Option<char> = None;
    let mut word = String::new();
    let mut words = Vec::new();
    for c in inner.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_)           => {}
            None => match c {
                '"' | '\''                      => quote = Some(c),
                c if c.is_whitespace() || c == '=' || c == '/' => {
                    if !word.is_empty() { words.push(std::mem::take(&mut word)); }
                }
                c => word.push(c),
            },
        }
    }
    if !word.is_empty() { words.push(word); }
    // First word is the tag name
    words.iter().skip(1).any(|w| w.eq_ignore_ascii_case(attr))
}
