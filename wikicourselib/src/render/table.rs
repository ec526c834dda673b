use eyre::WrapErr;
use std::fmt::Write;
use tracing::trace;

use crate::core::{AssignmentRole, Student};
use crate::render::template::TemplateKey;
use crate::render::{template_call, RenderContext};
use crate::Result;

/// Roster of students and the articles they work on.
///
/// Nothing at all is written for a course without students.
pub fn render(out: &mut String, ctx: &RenderContext, students: &[Student]) -> Result<()> {
    if students.is_empty() {
        trace!("no students, skipping roster table");
        return Ok(());
    }

    let eol = ctx.eol();
    let table = ctx.template(TemplateKey::Table);

    write!(out, "{{{{{table}}}}}{eol}")?;
    for student in students {
        row(out, ctx, student)?;
    }
    write!(out, "{{{{end of {table}}}}}{eol}")?;

    Ok(())
}

fn row(out: &mut String, ctx: &RenderContext, student: &Student) -> Result<()> {
    let converter = ctx.converter();
    let assigned = converter
        .titles_to_markup_links(&student.titles(AssignmentRole::Assigned))
        .wrap_err_with(|| format!("failed to link articles assigned to '{}'", student.username))?;
    let reviewing = converter
        .titles_to_markup_links(&student.titles(AssignmentRole::Reviewing))
        .wrap_err_with(|| format!("failed to link articles reviewed by '{}'", student.username))?;

    let row = template_call(
        ctx.template(TemplateKey::TableRow),
        [student.username.as_str(), assigned.as_str(), reviewing.as_str()],
    );
    write!(out, "{row}{}", ctx.eol())?;

    Ok(())
}
