// src/markup/render.rs  —  DecoratedCallsign → <call-sign> element
use crate::callsign::DecoratedCallsign;
use crate::config::AppConfig;

/// Element name used for tagged call signs.
pub const ELEMENT: &str = "call-sign";
/// Marker attribute set on every element this crate renders.
pub const DECORATED_ATTR: &str = "data-decorated";

pub const CLASS: &str = "callsign";
pub const MONO_CLASS: &str = "callsign-mono";

/// Render one call sign as an inline element, honouring the display flags.
pub fn render(cs: &DecoratedCallsign, cfg: &AppConfig) -> String {
    let mut html = format!("<{ELEMENT} {DECORATED_ATTR} class=\"{CLASS}");
    if cfg.enable_monospace_style {
        html.push(' ');
        html.push_str(MONO_CLASS);
    }
    html.push('"');

    if let Some(t) = &cs.territory {
        html.push_str(&format!(" data-territory=\"{}\"", escape(t)));
    }
    if cfg.enable_phonetic {
        html.push_str(&format!(" title=\"{}\"", escape(&cs.phonetic())));
    }
    html.push('>');

    if cfg.enable_flag {
        if let Some(flag) = cs.flag() {
            html.push_str(&flag);
            html.push(' ');
        }
    }
    html.push_str(&escape(&cs.token));
    html.push_str(&format!("</{ELEMENT}>"));
    html
}

/// `<link>` tag for the configured stylesheet, when styling is enabled.
pub fn stylesheet_link(cfg: &AppConfig) -> Option<String> {
    cfg.enable_monospace_style
        .then(|| format!("<link rel=\"stylesheet\" href=\"{}\">", escape(&cfg.css_path)))
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callsign::{decorate, parse, PrefixTable};

    fn dec(token: &str) -> DecoratedCallsign {
        decorate(parse(token).unwrap(), token, PrefixTable::builtin().unwrap())
    }

    #[test]
    fn full_element() {
        let html = render(&dec("SM8AYA"), &AppConfig::default());
        assert_eq!(
            html,
            "<call-sign data-decorated class=\"callsign callsign-mono\" data-territory=\"SE\" \
             title=\"Sierra Mike Eight Alfa Yankee Alfa\">\u{1F1F8}\u{1F1EA} SM8AYA</call-sign>"
        );
    }

    #[test]
    fn display_flags_turn_parts_off() {
        let cfg = AppConfig {
            enable_flag:            false,
            enable_phonetic:        false,
            enable_monospace_style: false,
            ..AppConfig::default()
        };
        assert_eq!(
            render(&dec("W1AW"), &cfg),
            "<call-sign data-decorated class=\"callsign\" data-territory=\"US\">W1AW</call-sign>"
        );
    }

    #[test]
    fn unknown_territory_renders_without_flag() {
        let html = render(&dec("QQ3ABC"), &AppConfig::default());
        assert!(!html.contains("data-territory"));
        assert!(html.ends_with(">QQ3ABC</call-sign>"));
    }

    #[test]
    fn stylesheet() {
        let cfg = AppConfig { css_path: "a\"b.css".into(), ..AppConfig::default() };
        assert_eq!(
            stylesheet_link(&cfg).as_deref(),
            Some("<link rel=\"stylesheet\" href=\"a&quot;b.css\">")
        );
        let cfg = AppConfig { enable_monospace_style: false, ..AppConfig::default() };
        assert_eq!(stylesheet_link(&cfg), None);
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
