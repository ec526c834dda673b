use pulldown_cmark::{CodeBlockKind, Event, LinkType, Options, Parser, Tag};

use crate::writer::{ListKind, WikiWriter};

pub(crate) fn convert(raw_markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(raw_markdown, options);

    let mut writer = WikiWriter::new();
    let mut in_code_block = false;
    let mut in_table_head = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    if writer.in_list() {
                        writer.item_paragraph();
                    } else {
                        writer.ensure_newline();
                    }
                }
                Tag::Heading(level, _, _) => writer.heading(level as usize),
                Tag::BlockQuote => {
                    writer.ensure_newline();
                    writer.push_str("<blockquote>");
                }
                Tag::CodeBlock(kind) => {
                    writer.ensure_newline();
                    in_code_block = true;
                    match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            writer.push_str(&format!("<syntaxhighlight lang=\"{lang}\">\n"));
                        }
                        _ => writer.push_str("<pre>"),
                    }
                }
                Tag::List(Some(_)) => writer.start_list(ListKind::Numbered),
                Tag::List(None) => writer.start_list(ListKind::Bullet),
                Tag::Item => writer.start_item(),
                Tag::Emphasis => writer.push_str("''"),
                Tag::Strong => writer.push_str("'''"),
                Tag::Strikethrough => writer.push_str("<s>"),
                Tag::Link(LinkType::Autolink | LinkType::Email, _, _) => (),
                Tag::Link(_, url, _) => writer.push_str(&format!("[{url} ")),
                Tag::Image(_, url, _) => writer.push_str(&format!("[[File:{url}|")),
                Tag::Table(_) => {
                    writer.ensure_newline();
                    writer.push_str("{| class=\"wikitable\"\n");
                }
                Tag::TableHead => in_table_head = true,
                Tag::TableRow => writer.push_str("|-\n"),
                Tag::TableCell => writer.push_str(if in_table_head { "! " } else { "| " }),
                Tag::FootnoteDefinition(_) => (),
            },
            Event::End(tag) => match tag {
                Tag::Paragraph => {
                    if !writer.in_list() {
                        writer.end_block();
                    }
                }
                Tag::Heading(level, _, _) => writer.end_heading(level as usize),
                Tag::BlockQuote => {
                    writer.push_str("</blockquote>");
                    writer.end_block();
                }
                Tag::CodeBlock(kind) => {
                    in_code_block = false;
                    match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            writer.ensure_newline();
                            writer.push_str("</syntaxhighlight>");
                        }
                        _ => writer.push_str("</pre>"),
                    }
                    writer.end_block();
                }
                Tag::List(_) => writer.end_list(),
                Tag::Item => writer.ensure_newline(),
                Tag::Emphasis => writer.push_str("''"),
                Tag::Strong => writer.push_str("'''"),
                Tag::Strikethrough => writer.push_str("</s>"),
                Tag::Link(LinkType::Autolink | LinkType::Email, _, _) => (),
                Tag::Link(..) => writer.push_str("]"),
                Tag::Image(..) => writer.push_str("]]"),
                Tag::Table(_) => {
                    writer.push_str("|}");
                    writer.end_block();
                }
                Tag::TableHead => {
                    in_table_head = false;
                    writer.ensure_newline();
                }
                Tag::TableRow => writer.ensure_newline(),
                Tag::TableCell => writer.push_str("\n"),
                Tag::FootnoteDefinition(_) => (),
            },
            Event::Text(text) => {
                if in_code_block {
                    writer.push_str(&text);
                } else {
                    writer.push_text(&text);
                }
            }
            Event::Code(code) => writer.push_str(&format!("<code>{code}</code>")),
            Event::Html(html) => writer.push_str(&html),
            Event::SoftBreak => writer.push_text(" "),
            Event::HardBreak => writer.push_str("<br />"),
            Event::Rule => {
                writer.ensure_newline();
                writer.push_str("----");
                writer.end_block();
            }
            Event::TaskListMarker(checked) => {
                writer.push_str(if checked { "[x] " } else { "[ ] " });
            }
            Event::FootnoteReference(name) => writer.push_str(&format!("[{name}]")),
        }
    }

    writer.finish()
}

#[cfg(test)]
mod test {
    #![allow(warnings, unused)]
    use crate::markdown_to_mediawiki;

    #[test]
    fn paragraphs_are_separated_by_blank_line() {
        let wikitext = markdown_to_mediawiki("first\nline\n\nsecond").unwrap();
        assert_eq!(wikitext, "first line\n\nsecond");
    }

    #[test]
    fn headings() {
        let wikitext = markdown_to_mediawiki("## Grading\n\ntext").unwrap();
        assert_eq!(wikitext, "== Grading ==\n\ntext");
    }

    #[test]
    fn emphasis_and_strong() {
        let wikitext = markdown_to_mediawiki("some *light* and **heavy** text").unwrap();
        assert_eq!(wikitext, "some ''light'' and '''heavy''' text");
    }

    #[test]
    fn external_links() {
        let wikitext = markdown_to_mediawiki("see [the guide](https://example.org/guide)").unwrap();
        assert_eq!(wikitext, "see [https://example.org/guide the guide]");
    }

    #[test]
    fn bullet_list() {
        let wikitext = markdown_to_mediawiki("* one\n* two\n\nafter").unwrap();
        assert_eq!(wikitext, "* one\n* two\n\nafter");
    }

    #[test]
    fn nested_numbered_list() {
        let wikitext = markdown_to_mediawiki("1. one\n    * inner\n2. two").unwrap();
        assert_eq!(wikitext, "# one\n#* inner\n# two");
    }

    #[test]
    fn list_item_with_two_paragraphs() {
        let wikitext = markdown_to_mediawiki("* first para\n\n  second para\n* next").unwrap();
        assert_eq!(wikitext, "* first para<br />second para\n* next");
    }

    #[test]
    fn inline_code() {
        let wikitext = markdown_to_mediawiki("run `cargo doc` now").unwrap();
        assert_eq!(wikitext, "run <code>cargo doc</code> now");
    }

    #[test]
    fn plain_code_block() {
        let wikitext = markdown_to_mediawiki("```\nlet x = 1;\n```").unwrap();
        assert_eq!(wikitext, "<pre>let x = 1;\n</pre>");
    }

    #[test]
    fn horizontal_rule() {
        let wikitext = markdown_to_mediawiki("above\n\n---\n\nbelow").unwrap();
        assert_eq!(wikitext, "above\n\n----\n\nbelow");
    }
}
