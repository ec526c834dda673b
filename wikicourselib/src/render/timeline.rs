use eyre::WrapErr;
use std::fmt::Write;
use tracing::{instrument, trace};

use crate::core::{MeetingScheduler, Week};
use crate::render::template::TemplateKey;
use crate::render::{block, template_call, RenderContext};
use crate::Result;

/// The weekly schedule. It has an opening marker but no closing one.
pub fn render(
    out: &mut String,
    ctx: &RenderContext,
    weeks: &[Week],
    scheduler: &dyn MeetingScheduler,
) -> Result<()> {
    write!(
        out,
        "{}{}",
        template_call(ctx.template(TemplateKey::Timeline), None::<&str>),
        ctx.eol()
    )?;

    for (week_number, week) in (1..).zip(weeks) {
        render_week(out, ctx, week, week_number, scheduler)?;
    }

    Ok(())
}

#[instrument(level = "trace", skip(out, ctx, week, scheduler))]
fn render_week(
    out: &mut String,
    ctx: &RenderContext,
    week: &Week,
    week_number: usize,
    scheduler: &dyn MeetingScheduler,
) -> Result<()> {
    let eol = ctx.eol();

    let dates = scheduler
        .dates_for(week, week_number)
        .wrap_err_with(|| format!("failed to find meeting dates for week {week_number}"))?;
    trace!(meetings = dates.len(), "rendering week");

    write!(out, "=== Week {week_number} ==={eol}")?;
    let start = template_call(ctx.template(TemplateKey::StartOfWeek), &dates);
    write!(out, "{start}{eol}")?;

    for content_block in week.ordered_blocks() {
        block::render(out, ctx, content_block)
            .wrap_err_with(|| format!("failed to render block in week {week_number}"))?;
    }

    let end = template_call(ctx.template(TemplateKey::EndOfWeek), None::<&str>);
    write!(out, "{end}{eol}")?;

    Ok(())
}
