use eyre::WrapErr;
use tracing::{debug, instrument};

use crate::{
    core::{
        collab::{MarkupConverter, MeetingScheduler, Wikitext},
        config::GlobalRenderConfig,
        course::Course,
        meetings::CourseMeetings,
    },
    error::ConfigError,
    render::{header, table, template::TemplateDictionary, timeline, RenderContext},
    Result,
};

/// Renders a single course into a wiki page.
///
/// Sections are always written in the same order: course details and
/// description, the roster table when there are students, then the timeline.
/// Each call to [`Engine::render`] builds the whole document from scratch.
#[derive(Debug)]
pub struct Engine<'c> {
    config: GlobalRenderConfig,
    course: &'c Course,
    templates: TemplateDictionary,
}

impl<'c> Engine<'c> {
    /// Checks the configuration and loads the templates for the course's
    /// platform and language.
    #[instrument(skip_all, fields(course = %course.slug))]
    pub fn new(config: GlobalRenderConfig, course: &'c Course) -> Result<Self> {
        config
            .validate()
            .wrap_err("invalid render configuration")?;

        let templates =
            TemplateDictionary::load(config.template_dir(), &course.platform, &course.language)
                .wrap_err_with(|| {
                    format!(
                        "failed loading templates for course '{}' using template dir '{}'",
                        course.slug,
                        config.template_dir().display()
                    )
                })?;

        Ok(Self {
            config,
            course,
            templates,
        })
    }

    /// Uses templates that were loaded elsewhere. They must be for the
    /// course's platform and language.
    pub fn with_templates(
        config: GlobalRenderConfig,
        course: &'c Course,
        templates: TemplateDictionary,
    ) -> Result<Self> {
        config
            .validate()
            .wrap_err("invalid render configuration")?;

        if templates.platform() != course.platform || templates.language() != course.language {
            return Err(ConfigError::TemplateMismatch {
                platform: course.platform.clone(),
                language: course.language.clone(),
                found_platform: templates.platform().to_owned(),
                found_language: templates.language().to_owned(),
            }
            .into());
        }

        Ok(Self {
            config,
            course,
            templates,
        })
    }

    pub fn course(&self) -> &Course {
        self.course
    }

    pub fn templates(&self) -> &TemplateDictionary {
        &self.templates
    }

    pub fn config(&self) -> GlobalRenderConfig {
        GlobalRenderConfig::clone(&self.config)
    }

    /// Renders with the given collaborators. Any failure discards the
    /// partially built document.
    #[instrument(skip_all, fields(course = %self.course.slug))]
    pub fn render<C, M>(&self, converter: &C, scheduler: &M) -> Result<String>
    where
        C: MarkupConverter,
        M: MeetingScheduler,
    {
        let ctx = RenderContext::new(&self.templates, &self.config, converter);
        let course = self.course;
        let mut output = String::new();

        header::render(&mut output, &ctx, course).wrap_err("failed rendering course details")?;
        table::render(&mut output, &ctx, &course.students)
            .wrap_err("failed rendering students table")?;
        timeline::render(&mut output, &ctx, &course.weeks, scheduler)
            .wrap_err("failed rendering timeline")?;

        debug!(
            weeks = course.weeks.len(),
            students = course.students.len(),
            bytes = output.len(),
            "rendered course"
        );
        Ok(output)
    }

    /// Renders with the wikitext converter and the course's own meeting
    /// schedule.
    pub fn render_default(&self) -> Result<String> {
        self.render(&Wikitext, &CourseMeetings::new(self.course))
    }
}

/// Loads templates for `course` and renders it with the default
/// collaborators.
pub fn render_course(config: GlobalRenderConfig, course: &Course) -> Result<String> {
    Engine::new(config, course)?.render_default()
}
