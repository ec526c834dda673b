use scraper::{ElementRef, Html, Node};
use tracing::trace;

use crate::writer::{ListKind, WikiWriter};

pub(crate) fn convert(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut writer = WikiWriter::new();
    children(&mut writer, fragment.root_element());
    writer.finish()
}

fn children(writer: &mut WikiWriter, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => writer.push_text(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    convert_element(writer, child);
                }
            }
            _ => (),
        }
    }
}

fn wrap(writer: &mut WikiWriter, element: ElementRef, open: &str, close: &str) {
    writer.push_str(open);
    children(writer, element);
    writer.push_str(close);
}

fn convert_element(writer: &mut WikiWriter, element: ElementRef) {
    let name = element.value().name();
    match name {
        "p" | "div" => {
            if writer.in_list() {
                writer.item_paragraph();
                children(writer, element);
            } else {
                writer.ensure_newline();
                children(writer, element);
                writer.end_block();
            }
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = usize::from(name.as_bytes()[1] - b'0');
            writer.heading(level);
            children(writer, element);
            writer.end_heading(level);
        }
        "strong" | "b" => wrap(writer, element, "'''", "'''"),
        "em" | "i" => wrap(writer, element, "''", "''"),
        "s" | "del" | "strike" => wrap(writer, element, "<s>", "</s>"),
        "u" => wrap(writer, element, "<u>", "</u>"),
        "code" | "tt" => wrap(writer, element, "<code>", "</code>"),
        "a" => match element.value().attr("href") {
            Some(href) if !href.is_empty() => {
                wrap(writer, element, &format!("[{href} "), "]");
            }
            _ => children(writer, element),
        },
        "img" => {
            if let Some(src) = element.value().attr("src") {
                let alt = element.value().attr("alt").unwrap_or_default();
                writer.push_str(&format!("[[File:{src}|{alt}]]"));
            }
        }
        "ul" => {
            writer.start_list(ListKind::Bullet);
            children(writer, element);
            writer.end_list();
        }
        "ol" => {
            writer.start_list(ListKind::Numbered);
            children(writer, element);
            writer.end_list();
        }
        "li" => {
            writer.start_item();
            children(writer, element);
            writer.ensure_newline();
        }
        "br" => writer.push_str("<br />"),
        "hr" => {
            writer.ensure_newline();
            writer.push_str("----");
            writer.end_block();
        }
        "pre" => {
            writer.ensure_newline();
            let text: String = element.text().collect();
            writer.push_str(&format!("<pre>{text}</pre>"));
            writer.end_block();
        }
        "blockquote" => {
            writer.ensure_newline();
            wrap(writer, element, "<blockquote>", "</blockquote>");
            writer.end_block();
        }
        "script" | "style" | "head" => trace!(element = name, "skipping html element"),
        _ => children(writer, element),
    }
}
