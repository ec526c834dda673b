//! Conversion of rich text into MediaWiki markup.
//!
//! Course descriptions are stored as markdown and block content as HTML. Both
//! end up in a wiki page, so this crate turns them into wikitext. Article
//! titles get turned into a comma separated list of wikilinks.

use eyre::WrapErr;

mod html;
mod markdown;
mod writer;

pub type Result<T> = eyre::Result<T>;

#[macro_export]
macro_rules! static_regex {
    ($re:literal $(,)?) => {{
        static RE: once_cell::sync::OnceCell<fancy_regex::Regex> = once_cell::sync::OnceCell::new();
        RE.get_or_init(|| {
            fancy_regex::Regex::new($re)
                .expect(&format!("Malformed regex '{}'. This is a bug.", $re))
        })
    }};
}

/// Converts CommonMark text into wikitext.
pub fn markdown_to_mediawiki<S: AsRef<str>>(markdown: S) -> Result<String> {
    let raw = markdown::convert(markdown.as_ref());
    tidy(&raw).wrap_err("failed to tidy wikitext converted from markdown")
}

/// Converts an HTML fragment into wikitext.
pub fn html_to_mediawiki<S: AsRef<str>>(html: S) -> Result<String> {
    let raw = html::convert(html.as_ref());
    tidy(&raw).wrap_err("failed to tidy wikitext converted from html")
}

/// Turns article titles into `[[Title A]], [[Title B]]`.
///
/// Underscores are treated as spaces, the same way the wiki resolves them.
/// An empty list of titles produces an empty string.
pub fn titles_to_wikilinks<S: AsRef<str>>(titles: &[S]) -> String {
    use itertools::Itertools;

    titles
        .iter()
        .map(|title| format!("[[{}]]", format_title(title.as_ref())))
        .join(", ")
}

fn format_title(title: &str) -> String {
    title.trim().replace('_', " ")
}

/// Collapses runs of blank lines and strips surrounding whitespace.
fn tidy(text: &str) -> Result<String> {
    let re = static_regex!(r"\n[ \t]*\n(?:[ \t]*\n)+");
    let mut tidied = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(mat) = re.find(rest)? {
        tidied.push_str(&rest[..mat.start()]);
        tidied.push_str("\n\n");
        rest = &rest[mat.end()..];
    }
    tidied.push_str(rest);
    Ok(tidied.trim().to_owned())
}
