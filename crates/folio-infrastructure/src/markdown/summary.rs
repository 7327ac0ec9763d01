//! Index file parsing
//!
//! Layout understood:
//!
//! ```text
//! # Book title              <- only before any entry or part
//!
//! [Introduction](intro.md)  <- prefix chapter, depth 0
//!
//! # Fundamentals            <- every later heading opens a part
//!
//! - [Variables](js/vars.md) <- depth 1
//!     - [Scope](js/scope.md) <- depth 2
//! - [Draft]()               <- draft, no target
//!
//! ---                       <- separator, ignored
//! ```

use super::{LineIndex, parser_options};
use folio_domain::{ChapterId, Part, Summary, SummaryEntry};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use tracing::warn;

struct OpenHeading {
    level: HeadingLevel,
    line: usize,
    text: String,
}

struct OpenLink {
    dest: String,
    line: usize,
    title: String,
}

/// Parse the index file into a [`Summary`]
pub fn parse_summary(text: &str) -> Summary {
    let lines = LineIndex::new(text);
    let mut summary = Summary::default();
    let mut current = Part::new(None, None);
    let mut depth = 0usize;
    let mut heading: Option<OpenHeading> = None;
    let mut link: Option<OpenLink> = None;

    for (event, range) in Parser::new_ext(text, parser_options()).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(OpenHeading {
                    level,
                    line: lines.line_of(range.start),
                    text: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some(open) = heading.take() else {
                    continue;
                };
                let title = open.text.trim().to_string();
                let nothing_declared = summary.title.is_none()
                    && summary.parts.is_empty()
                    && current.title.is_none()
                    && current.entries.is_empty();
                if open.level == HeadingLevel::H1 && nothing_declared {
                    summary.title = Some(title);
                } else {
                    let finished = std::mem::replace(
                        &mut current,
                        Part::new(Some(title), Some(open.line)),
                    );
                    push_part(&mut summary, finished);
                }
            }
            Event::Start(Tag::List(_)) => depth += 1,
            Event::End(TagEnd::List(_)) => depth = depth.saturating_sub(1),
            Event::Start(Tag::Link { dest_url, .. }) if heading.is_none() => {
                link = Some(OpenLink {
                    dest: dest_url.to_string(),
                    line: lines.line_of(range.start),
                    title: String::new(),
                });
            }
            Event::End(TagEnd::Link) => {
                if let Some(open) = link.take() {
                    if let Some(entry) = into_entry(open, depth) {
                        current.entries.push(entry);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(open) = link.as_mut() {
                    open.title.push_str(&text);
                } else if let Some(open) = heading.as_mut() {
                    open.text.push_str(&text);
                }
            }
            _ => {}
        }
    }

    push_part(&mut summary, current);
    summary
}

/// Titled parts are kept even when empty so they can be reported
fn push_part(summary: &mut Summary, part: Part) {
    if part.title.is_some() || !part.entries.is_empty() {
        summary.parts.push(part);
    }
}

fn into_entry(link: OpenLink, depth: usize) -> Option<SummaryEntry> {
    let title = link.title.trim().to_string();
    let dest = link.dest.trim();
    let target = if dest.is_empty() {
        None
    } else {
        match ChapterId::from_link(dest) {
            Some(id) => Some(id),
            None => {
                warn!(target = dest, line = link.line, "Index link is not a chapter, skipped");
                return None;
            }
        }
    };
    Some(SummaryEntry {
        title,
        target,
        depth,
        line: link.line,
    })
}
