//! Interfaces to the collaborators the renderers depend on.

use chrono::NaiveDate;

use crate::core::course::Week;
use crate::Result;

/// Turns rich text and article titles into platform markup.
pub trait MarkupConverter {
    fn markdown_to_markup(&self, text: &str) -> Result<String>;
    fn html_to_markup(&self, text: &str) -> Result<String>;
    fn titles_to_markup_links(&self, titles: &[&str]) -> Result<String>;
}

/// Resolves a week to the dates the class meets during it.
pub trait MeetingScheduler {
    /// `week_number` is the 1-based position of the week in the course.
    fn dates_for(&self, week: &Week, week_number: usize) -> Result<Vec<NaiveDate>>;
}

impl<F> MeetingScheduler for F
where
    F: Fn(&Week, usize) -> Result<Vec<NaiveDate>>,
{
    fn dates_for(&self, week: &Week, week_number: usize) -> Result<Vec<NaiveDate>> {
        self(week, week_number)
    }
}

/// MediaWiki conversion backed by the `wikitext` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wikitext;

impl MarkupConverter for Wikitext {
    fn markdown_to_markup(&self, text: &str) -> Result<String> {
        wikitext::markdown_to_mediawiki(text)
    }

    fn html_to_markup(&self, text: &str) -> Result<String> {
        wikitext::html_to_mediawiki(text)
    }

    fn titles_to_markup_links(&self, titles: &[&str]) -> Result<String> {
        Ok(wikitext::titles_to_wikilinks(titles))
    }
}
