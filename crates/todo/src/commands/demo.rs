//! `todo demo` -- build a sample list and show bulk state changes.

use anyhow::Result;
use todo_core::{Todo, TodoList};

use crate::context::RuntimeContext;
use crate::output::{output_json, output_list};

/// Builds the two-item list the demo walks through.
pub fn sample_list() -> TodoList {
    let mut list = TodoList::new("my list");
    list.add(Todo::new("Go to work"));
    list.add(Todo::new("Brush Teeth"));
    list
}

/// Execute the `todo demo` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let list = sample_list();

    if ctx.json {
        let mut snapshots = vec![serde_json::to_value(&list)?];
        list.mark_all_done();
        snapshots.push(serde_json::to_value(&list)?);
        list.mark_all_undone();
        snapshots.push(serde_json::to_value(&list)?);
        output_json(&snapshots);
        return Ok(());
    }

    step(ctx, "initial list");
    output_list(ctx, &list);

    list.mark_all_done();
    step(ctx, "after marking all done");
    output_list(ctx, &list);

    list.mark_all_undone();
    step(ctx, "after marking all undone");
    output_list(ctx, &list);

    Ok(())
}

fn step(ctx: &RuntimeContext, label: &str) {
    if !ctx.quiet {
        println!("# {}", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_list_starts_undone() {
        let list = sample_list();
        assert_eq!(
            list.render(),
            "---- my list ----\n[ ] Go to work\n[ ] Brush Teeth"
        );
        assert!(!list.is_done());
    }
}
