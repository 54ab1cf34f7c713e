// src/markup/annotate.rs  —  Tag call signs in an HTML-ish document, single pass
use super::lexer::{self, Segment, TagKind};
use super::render::{self, DECORATED_ATTR, ELEMENT};
use crate::callsign::{self, DecoratedCallsign, PrefixTable};
use crate::config::AppConfig;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Elements whose text is never scanned. Raw-text elements (script, style,
/// textarea) are already opaque to the lexer.
const SKIP: &[&str] = &["script", "style", "textarea", "noscript", ELEMENT];

/// Non-breaking space entities; in a rendered page these are whitespace.
static NBSP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:nbsp|#160|#[xX]0*[aA]0);").expect("nbsp pattern is valid")
});

/// Result of one annotate pass.
#[derive(Debug, Clone, Default)]
pub struct Annotated {
    pub text:      String,
    /// Every call sign rendered in this pass, in document order
    pub callsigns: Vec<DecoratedCallsign>,
}

/// Decorate bare `<call-sign>` elements and, when search is enabled, wrap call
/// signs found in free text.
///
/// The input is walked once, front to back. Match spans for each text run are
/// collected against the original text and the output is built by appending,
/// so inserted markup is never rescanned. Running `annotate` on its own
/// output changes nothing.
pub fn annotate(src: &str, table: &PrefixTable, cfg: &AppConfig) -> Annotated {
    let segs = lexer::segments(src);
    let mut out = Annotated { text: String::with_capacity(src.len()), ..Default::default() };
    // Open elements from SKIP, innermost last
    let mut skipping: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < segs.len() {
        match &segs[i] {
            Segment::Tag { span, name, kind: TagKind::Open } => {
                let tag = &src[span.clone()];
                if name == ELEMENT && skipping.is_empty() && !lexer::has_attribute(tag, DECORATED_ATTR) {
                    if let Some(cs) = element_callsign(src, &segs[i..], table) {
                        out.text.push_str(&render::render(&cs, cfg));
                        out.callsigns.push(cs);
                        i += 3;
                        continue;
                    }
                }
                out.text.push_str(tag);
                if let Some(s) = SKIP.iter().find(|s| **s == name.as_str()) {
                    skipping.push(*s);
                }
            }
            Segment::Tag { span, name, kind: TagKind::Close } => {
                out.text.push_str(&src[span.clone()]);
                // Tolerate unclosed children: pop back to the matching open
                if let Some(pos) = skipping.iter().rposition(|s| *s == name.as_str()) {
                    skipping.truncate(pos);
                }
            }
            Segment::Text(r) if cfg.enable_search && skipping.is_empty() => {
                tag_text(&src[r.clone()], table, cfg, &mut out);
            }
            seg => out.text.push_str(&src[seg.span()]),
        }
        i += 1;
    }

    log::debug!("[annotate] tagged {} call sign(s)", out.callsigns.len());
    out
}

/// `<call-sign>TOKEN</call-sign>` at the start of `segs` → decorated call sign.
fn element_callsign(src: &str, segs: &[Segment], table: &PrefixTable) -> Option<DecoratedCallsign> {
    let [_, Segment::Text(inner), Segment::Tag { name, kind: TagKind::Close, .. }, ..] = segs else {
        return None;
    };
    if name != ELEMENT {
        return None;
    }
    let token = src[inner.clone()].trim();
    match callsign::parse(token) {
        Ok(parsed) => Some(callsign::decorate(parsed, token, table)),
        Err(e) => {
            log::debug!("[annotate] leaving <{ELEMENT}>{token}</{ELEMENT}> as is: {e}");
            None
        }
    }
}

/// `text` as the scanner should see it: byte offsets unchanged, `&nbsp;`
/// entities blanked to spaces, plus one trailing space so the end of the run
/// terminates a call sign.
fn scan_view(text: &str) -> String {
    let mut view = NBSP
        .replace_all(text, |c: &Captures| " ".repeat(c[0].len()))
        .into_owned();
    view.push(' ');
    view
}

/// Wrap every accepted call sign in one text run.
fn tag_text(text: &str, table: &PrefixTable, cfg: &AppConfig, out: &mut Annotated) {
    let view = scan_view(text);
    let mut last = 0;
    // Every span ends before the terminator, so it lies inside `text`
    for found in callsign::search(&view, table) {
        if cfg.require_known_prefix && found.callsign.territory.is_none() {
            log::trace!("[annotate] {} has no known prefix, not tagged", found.callsign.token);
            continue;
        }
        out.text.push_str(&text[last..found.span.start]);
        out.text.push_str(&render::render(&found.callsign, cfg));
        out.callsigns.push(found.callsign);
        last = found.span.end;
    }
    out.text.push_str(&text[last..]);
}
