use eyre::WrapErr;
use std::fmt::Write;
use tracing::trace;

use crate::core::Course;
use crate::render::template::TemplateKey;
use crate::render::RenderContext;
use crate::Result;

/// Course details followed by the course description.
pub fn render(out: &mut String, ctx: &RenderContext, course: &Course) -> Result<()> {
    details(out, ctx, course)?;

    let description = ctx
        .converter()
        .markdown_to_markup(&course.description)
        .wrap_err_with(|| format!("failed to convert description of course '{}'", course.slug))?;
    write!(out, "{}{}", ctx.with_eol(&description), ctx.eol())?;

    Ok(())
}

fn details(out: &mut String, ctx: &RenderContext, course: &Course) -> Result<()> {
    let eol = ctx.eol();
    let config = ctx.config();

    let instructor = course.first_instructor();
    let support_staff = course.first_support_staff();
    if instructor.is_none() {
        trace!(course = %course.slug, "course has no instructor");
    }

    let fields = [
        ("course_name", course.title.clone()),
        (
            "instructor_username",
            instructor.map(|i| i.username.clone()).unwrap_or_default(),
        ),
        (
            "instructor_realname",
            instructor.map(|i| i.real_name.clone()).unwrap_or_default(),
        ),
        (
            "support_staff",
            support_staff.map(|s| s.username.clone()).unwrap_or_default(),
        ),
        ("subject", course.subject.clone()),
        ("start_date", course.start.to_string()),
        ("end_date", course.end.to_string()),
        ("institution", course.school.clone()),
        ("expected_students", course.expected_students.to_string()),
        ("assignment_page", config.assignment_page(&course.slug)),
        (config.dashboard_url(), "yes".to_owned()),
    ];

    write!(out, "{{{{{}", ctx.template(TemplateKey::Course))?;
    for (name, value) in fields {
        write!(out, "{eol} | {name} = {value}")?;
    }
    write!(out, "{eol}}}}}{eol}")?;

    Ok(())
}

#[cfg(test)]
mod test {

    #![allow(warnings, unused)]
    use super::*;
    use crate::core::{LineEnding, SupportStaff};
    use crate::test::{config, course, templates, Passthrough};

    fn render_header(course: &Course, line_ending: LineEnding) -> String {
        let config = config(line_ending);
        let templates = templates();
        let ctx = RenderContext::new(&templates, &config, &Passthrough);
        let mut out = String::new();
        render(&mut out, &ctx, course).unwrap();
        out
    }

    #[test]
    fn renders_course_details() {
        let mut course = course();
        course.nonstudents.push(SupportStaff {
            username: "greeter".into(),
            real_name: "Greta".into(),
            greeter: true,
        });

        let rendered = render_header(&course, LineEnding::Lf);
        let expected = "\
{{course details
 | course_name = Intro to X
 | instructor_username = alice
 | instructor_realname = Alice Example
 | support_staff = greeter
 | subject = Biology
 | start_date = 2016-01-11
 | end_date = 2016-04-29
 | institution = Example University
 | expected_students = 24
 | assignment_page = Wikipedia:Wiki_Ed/Example_University/Intro_to_X_(Spring_2016)
 | dashboard.wikiedu.org = yes
}}
A course about X.
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn missing_people_render_empty() {
        let mut course = course();
        course.instructors.clear();

        let rendered = render_header(&course, LineEnding::Lf);
        assert!(rendered.contains("\n | instructor_username = \n"));
        assert!(rendered.contains("\n | instructor_realname = \n"));
        assert!(rendered.contains("\n | support_staff = \n"));
    }

    #[test]
    fn uses_configured_line_ending_throughout() {
        let rendered = render_header(&course(), LineEnding::Cr);
        assert!(!rendered.contains('\n'));
        assert!(rendered.starts_with("{{course details\r | course_name = Intro to X\r"));
        assert!(rendered.ends_with("}}\rA course about X.\r"));
    }

    #[test]
    fn description_line_breaks_use_configured_line_ending() {
        let mut course = course();
        course.description = "First paragraph.\n\nSecond paragraph.".into();

        let rendered = render_header(&course, LineEnding::Cr);
        assert!(!rendered.contains('\n'));
        assert!(rendered.ends_with("}}\rFirst paragraph.\r\rSecond paragraph.\r"));
    }

    #[test]
    fn description_is_converted() {
        let mut course = course();
        course.description = "Some **bold** claims.".into();

        let config = config(LineEnding::Lf);
        let templates = templates();
        let ctx = RenderContext::new(&templates, &config, &crate::core::Wikitext);
        let mut out = String::new();
        render(&mut out, &ctx, &course).unwrap();

        assert!(out.ends_with("}}\nSome '''bold''' claims.\n"));
    }
}
