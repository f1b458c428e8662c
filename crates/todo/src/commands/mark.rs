//! `todo mark` -- apply state changes to a list document and print it.
//!
//! Changes apply in a fixed order: bulk (`--all-done` / `--all-undone`),
//! then `--done` and `--undone` indices, then `--done-title`. Every index is
//! checked before anything changes, so a bad index leaves the list untouched.

use anyhow::Result;
use todo_core::TodoList;
use tracing::debug;

use crate::cli::MarkArgs;
use crate::commands::load_list;
use crate::context::RuntimeContext;
use crate::output::output_list;

/// Execute the `todo mark` command.
pub fn run(ctx: &RuntimeContext, args: &MarkArgs) -> Result<()> {
    let list = load_list(&args.file, ctx.default_title())?;
    apply(&list, args)?;
    output_list(ctx, &list);
    Ok(())
}

fn apply(list: &TodoList, args: &MarkArgs) -> Result<()> {
    for &index in args.done.iter().chain(&args.undone) {
        list.item_at(index)?;
    }

    if args.all_done {
        list.mark_all_done();
    }
    if args.all_undone {
        list.mark_all_undone();
    }
    for &index in &args.done {
        list.mark_done_at(index)?;
    }
    for &index in &args.undone {
        list.mark_undone_at(index)?;
    }
    for title in &args.done_title {
        if !list.mark_done(title) {
            debug!(title = %title, "no undone todo with this title");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::Todo;

    fn base_args() -> MarkArgs {
        MarkArgs {
            file: "-".into(),
            done: Vec::new(),
            undone: Vec::new(),
            done_title: Vec::new(),
            all_done: false,
            all_undone: false,
        }
    }

    fn list() -> TodoList {
        let mut list = TodoList::new("Today's Todos");
        list.add(Todo::new("Buy milk"));
        list.add(Todo::new("Clean room"));
        list.add(Todo::new("Clean room"));
        list
    }

    #[test]
    fn bad_index_changes_nothing() {
        let list = list();
        let args = MarkArgs {
            done: vec![0],
            undone: vec![7],
            all_done: true,
            ..base_args()
        };
        let err = apply(&list, &args).unwrap_err();
        assert_eq!(err.to_string(), "invalid index: 7");
        assert!(list.all_done().is_empty());
    }

    #[test]
    fn indices_apply_after_bulk_changes() {
        let list = list();
        let args = MarkArgs {
            undone: vec![1],
            all_done: true,
            ..base_args()
        };
        apply(&list, &args).unwrap();
        assert_eq!(
            list.render(),
            "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room\n[X] Clean room"
        );
    }

    #[test]
    fn titles_walk_duplicates() {
        let list = list();
        let args = MarkArgs {
            done_title: vec!["Clean room".into(), "Clean room".into(), "Nope".into()],
            ..base_args()
        };
        apply(&list, &args).unwrap();
        assert!(!list.item_at(0).unwrap().is_done());
        assert!(list.item_at(1).unwrap().is_done());
        assert!(list.item_at(2).unwrap().is_done());
    }
}
