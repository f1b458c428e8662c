//! `todo show` -- render a list document, optionally filtered.

use anyhow::Result;
use todo_core::TodoFilter;

use crate::cli::ShowArgs;
use crate::commands::load_list;
use crate::context::RuntimeContext;
use crate::output::output_list;

/// Execute the `todo show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let list = load_list(&args.file, ctx.default_title())?;

    let criteria = TodoFilter {
        status: args.status,
        title: args.title.clone(),
        title_contains: args.contains.clone(),
    };

    if criteria.is_empty() {
        output_list(ctx, &list);
    } else {
        output_list(ctx, &list.filter_by(&criteria));
    }
    Ok(())
}
