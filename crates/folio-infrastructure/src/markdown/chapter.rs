//! Chapter parsing

use super::{LineIndex, parser_options};
use folio_domain::{Chapter, ChapterId, ChapterLink, Section, Snippet};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use std::path::PathBuf;

struct OpenHeading {
    level: u8,
    line: usize,
    text: String,
}

struct OpenSnippet {
    dialect: Option<String>,
    line: usize,
    code: String,
}

/// Parse Markdown into a [`Chapter`]
///
/// Headings become sections, fenced code blocks become snippets and every
/// link destination is recorded. Indented code blocks carry no dialect and
/// are not treated as snippets.
pub fn parse_chapter(id: ChapterId, path: impl Into<PathBuf>, content: String) -> Chapter {
    let lines = LineIndex::new(&content);
    let mut sections = Vec::new();
    let mut snippets = Vec::new();
    let mut links = Vec::new();
    let mut heading: Option<OpenHeading> = None;
    let mut snippet: Option<OpenSnippet> = None;

    for (event, range) in Parser::new_ext(&content, parser_options()).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(OpenHeading {
                    level: level as u8,
                    line: lines.line_of(range.start),
                    text: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(open) = heading.take() {
                    sections.push(Section {
                        level: open.level,
                        title: open.text.trim().to_string(),
                        line: open.line,
                    });
                }
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                snippet = Some(OpenSnippet {
                    dialect: dialect_of(&info),
                    line: lines.line_of(range.start),
                    code: String::new(),
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(open) = snippet.take() {
                    snippets.push(Snippet {
                        dialect: open.dialect,
                        line: open.line,
                        code: open.code,
                    });
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                links.push(ChapterLink {
                    target: dest_url.to_string(),
                    line: lines.line_of(range.start),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(open) = heading.as_mut() {
                    open.text.push_str(&text);
                } else if let Some(open) = snippet.as_mut() {
                    open.code.push_str(&text);
                }
            }
            _ => {}
        }
    }

    let named = || sections.iter().filter(|s| !s.title.is_empty());
    let title = named()
        .find(|s| s.level == 1)
        .or_else(|| named().next())
        .map(|s| s.title.clone());

    Chapter {
        id,
        path: path.into(),
        title,
        sections,
        snippets,
        links,
        content,
    }
}

/// First token of a fence info string: `js,editable` and `jsx title=x`
/// give `js` and `jsx`
fn dialect_of(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .find(|token| !token.is_empty())
        .map(str::to_string)
}
