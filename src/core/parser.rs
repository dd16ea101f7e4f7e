//! Streaming XML tokenizer for XMP packets
//!
//! This module drives a quick-xml reader over an extracted packet and reports
//! open-tag, text and close-tag events to an [`XmlEventHandler`]. Tag names
//! are reported as qualified names (`dc:subject`); namespace prefixes are not
//! resolved.

use crate::core::error::{XmpError, XmpResult};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;

/// Receiver for tokenizer events
///
/// Returning an error from any callback aborts the parse with that error.
pub trait XmlEventHandler {
    /// An element was opened. Self-closing elements are reported as an open
    /// immediately followed by a close.
    fn open_tag(&mut self, name: &str) -> XmpResult<()>;

    /// A run of character data between two markup items, with entity and
    /// character references already resolved.
    fn text(&mut self, text: &str) -> XmpResult<()>;

    /// An element was closed.
    fn close_tag(&mut self, name: &str) -> XmpResult<()>;
}

/// Parser for XMP packets
#[derive(Debug, Clone, Default)]
pub struct XmpParser {
    max_depth: Option<usize>,
}

impl XmpParser {
    /// Create a new parser with no depth limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that rejects elements nested deeper than `max_depth`
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Tokenize `xml` to completion, feeding every event to `handler`.
    ///
    /// End tags must match their start tags, and the document must not end
    /// with elements still open.
    pub fn parse<H: XmlEventHandler>(&self, xml: &str, handler: &mut H) -> XmpResult<()> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().check_end_names = true;

        let mut text = String::new();
        let mut depth = 0usize;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| XmpError::from(e).at_position(reader.error_position()))?;

            match event {
                Event::Text(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmpError::MalformedMarkup(err.to_string()))?;
                    text.push_str(&decoded);
                }
                Event::GeneralRef(e) => {
                    let name = e
                        .decode()
                        .map_err(|err| XmpError::MalformedMarkup(err.to_string()))?;
                    push_reference(&mut text, &name)?;
                }
                Event::Start(e) => {
                    flush_text(&mut text, handler)?;
                    depth += 1;
                    self.check_depth(depth)?;
                    check_attributes(&e, reader.buffer_position())?;
                    handler.open_tag(&qualified_name(e.name()))?;
                }
                Event::Empty(e) => {
                    flush_text(&mut text, handler)?;
                    self.check_depth(depth + 1)?;
                    check_attributes(&e, reader.buffer_position())?;
                    let name = qualified_name(e.name());
                    handler.open_tag(&name)?;
                    handler.close_tag(&name)?;
                }
                Event::End(e) => {
                    flush_text(&mut text, handler)?;
                    depth = depth.saturating_sub(1);
                    handler.close_tag(&qualified_name(e.name()))?;
                }
                Event::Eof => {
                    flush_text(&mut text, handler)?;
                    if depth > 0 {
                        return Err(XmpError::MalformedMarkup(format!(
                            "unexpected end of document with {} unclosed element(s)",
                            depth
                        )));
                    }
                    return Ok(());
                }
                // CDATA, comments, processing instructions and declarations
                // carry no text but still end the pending text run
                _ => flush_text(&mut text, handler)?,
            }
        }
    }

    fn check_depth(&self, depth: usize) -> XmpResult<()> {
        match self.max_depth {
            Some(max) if depth > max => Err(XmpError::MalformedMarkup(format!(
                "element nesting depth {} exceeds limit of {}",
                depth, max
            ))),
            _ => Ok(()),
        }
    }
}

/// Reject unquoted values, value-less attributes, missing separators and
/// duplicate names
fn check_attributes(start: &BytesStart<'_>, position: u64) -> XmpResult<()> {
    for attr in start.attributes() {
        attr.map_err(|e| XmpError::from(quick_xml::Error::from(e)).at_position(position))?;
    }
    Ok(())
}

fn qualified_name(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.as_ref()).to_string()
}

fn flush_text<H: XmlEventHandler>(text: &mut String, handler: &mut H) -> XmpResult<()> {
    if !text.is_empty() {
        handler.text(text)?;
        text.clear();
    }
    Ok(())
}

/// Append the replacement of `&name;` to `text`
fn push_reference(text: &mut String, name: &str) -> XmpResult<()> {
    if let Some(reference) = name.strip_prefix('#') {
        let ch = resolve_char_reference(reference).ok_or_else(|| {
            XmpError::MalformedMarkup(format!("invalid character reference: &{};", name))
        })?;
        text.push(ch);
    } else if let Some(resolved) = resolve_predefined_entity(name) {
        text.push_str(resolved);
    } else {
        return Err(XmpError::MalformedMarkup(format!(
            "unknown entity reference: &{};",
            name
        )));
    }
    Ok(())
}

/// Resolve `49` (decimal) or `x31` (hexadecimal) to a character
fn resolve_char_reference(reference: &str) -> Option<char> {
    let code_point = if let Some(hex) = reference.strip_prefix('x') {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        reference.parse::<u32>().ok()?
    };
    char::from_u32(code_point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::XmpErrorKind;
    use pretty_assertions::assert_eq;

    /// Records every event as a string
    #[derive(Debug, Default)]
    struct XmlEventLog {
        events: Vec<String>,
    }

    impl XmlEventHandler for XmlEventLog {
        fn open_tag(&mut self, name: &str) -> XmpResult<()> {
            self.events.push(format!("<{}>", name));
            Ok(())
        }

        fn text(&mut self, text: &str) -> XmpResult<()> {
            self.events.push(format!("text({})", text));
            Ok(())
        }

        fn close_tag(&mut self, name: &str) -> XmpResult<()> {
            self.events.push(format!("</{}>", name));
            Ok(())
        }
    }

    fn events(xml: &str) -> XmpResult<Vec<String>> {
        let mut log = XmlEventLog::default();
        XmpParser::new().parse(xml, &mut log)?;
        Ok(log.events)
    }

    #[test]
    fn test_open_text_close() {
        let events = events("<x:xmpmeta><dc:title>Hi</dc:title><br/></x:xmpmeta>").unwrap();
        assert_eq!(
            events,
            vec![
                "<x:xmpmeta>",
                "<dc:title>",
                "text(Hi)",
                "</dc:title>",
                "<br>",
                "</br>",
                "</x:xmpmeta>",
            ]
        );
    }

    #[test]
    fn test_references_coalesce_into_one_text() {
        let events = events("<a>Tom &amp; Jerry &#169;&#xE9;</a>").unwrap();
        assert_eq!(events, vec!["<a>", "text(Tom & Jerry ©é)", "</a>"]);
    }

    #[test]
    fn test_comment_splits_text() {
        let events = events("<a>one<!-- c -->two<![CDATA[skip]]></a>").unwrap();
        assert_eq!(events, vec!["<a>", "text(one)", "text(two)", "</a>"]);
    }

    #[test]
    fn test_whitespace_is_reported() {
        let events = events("<a>\n  <b>x</b>\n</a>").unwrap();
        assert_eq!(
            events,
            vec!["<a>", "text(\n  )", "<b>", "text(x)", "</b>", "text(\n)", "</a>"]
        );
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = events("<a><b></a>").unwrap_err();
        assert_eq!(err.kind(), XmpErrorKind::MalformedMarkup);
    }

    #[test]
    fn test_unclosed_element() {
        let err = events("<a><b>text").unwrap_err();
        assert_eq!(err.kind(), XmpErrorKind::MalformedMarkup);
    }

    #[test]
    fn test_strict_attributes() {
        assert!(events(r#"<a x="1" y='2'>ok</a>"#).is_ok());

        for xml in [
            "<a x=1>v</a>",
            "<a x>v</a>",
            r#"<a x="1"y="2">v</a>"#,
            r#"<a x="1" x="2">v</a>"#,
            "<a><b x=1/></a>",
        ] {
            let err = events(xml).unwrap_err();
            assert_eq!(err.kind(), XmpErrorKind::MalformedMarkup, "{}", xml);
            assert!(err.message().contains("at position"), "{}", err);
        }
    }

    #[test]
    fn test_unknown_entity() {
        let err = events("<a>&nbsp;</a>").unwrap_err();
        assert!(err.message().contains("&nbsp;"));
    }

    #[test]
    fn test_max_depth() {
        let mut log = XmlEventLog::default();
        let parser = XmpParser::with_max_depth(Some(2));
        assert!(parser.parse("<a><b>ok</b></a>", &mut log).is_ok());

        let err = parser.parse("<a><b><c/></b></a>", &mut log).unwrap_err();
        assert!(err.message().contains("exceeds limit of 2"));
    }

    #[test]
    fn test_handler_error_aborts() {
        struct Reject;
        impl XmlEventHandler for Reject {
            fn open_tag(&mut self, _: &str) -> XmpResult<()> {
                Ok(())
            }
            fn text(&mut self, text: &str) -> XmpResult<()> {
                Err(XmpError::InvalidInput(text.to_string()))
            }
            fn close_tag(&mut self, _: &str) -> XmpResult<()> {
                Ok(())
            }
        }

        let err = XmpParser::new().parse("<a>stop</a>", &mut Reject).unwrap_err();
        assert_eq!(err, XmpError::InvalidInput("stop".to_string()));
    }
}
