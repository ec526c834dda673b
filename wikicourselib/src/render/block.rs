use eyre::WrapErr;
use std::fmt::Write;

use crate::core::Block;
use crate::render::{template_call, RenderContext};
use crate::Result;

/// `{{<kind template>|<label><title>}}` followed by the block's content.
pub fn render(out: &mut String, ctx: &RenderContext, block: &Block) -> Result<()> {
    let eol = ctx.eol();
    let kind = block.kind()?;

    let marker = template_call(kind.template(), [format!("{}{}", kind.label(), block.title)]);
    write!(out, "{marker}{eol}")?;

    let content = ctx
        .converter()
        .html_to_markup(&block.content)
        .wrap_err_with(|| format!("failed to convert content of block '{}'", block.title))?;
    if !content.is_empty() {
        write!(out, "{}{eol}", ctx.with_eol(&content))?;
    }

    Ok(())
}
