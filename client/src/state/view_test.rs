use super::*;

// =============================================================
// Delete confirmation
// =============================================================

#[test]
fn delete_requires_an_explicit_confirmation_step() {
    let mut view: RecordView<&str> = RecordView::default();
    assert!(view.is_idle());

    view.request_delete("row-1");
    assert_eq!(view, RecordView::Confirming("row-1"));

    assert_eq!(view.confirm_delete(), Some("row-1"));
    assert!(view.is_idle());
}

#[test]
fn cancelling_a_confirmation_deletes_nothing() {
    let mut view = RecordView::Idle;
    view.request_delete("row-1");
    view.cancel();
    assert_eq!(view.confirm_delete(), None);
}

#[test]
fn confirm_delete_outside_confirming_is_inert() {
    let mut view = RecordView::Idle;
    view.begin_edit("row-1");
    assert_eq!(view.confirm_delete(), None);
    // The edit in progress survives the stray confirm.
    assert!(view.draft_mut().is_some());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn edit_mutates_a_draft_not_the_original() {
    let mut view = RecordView::Idle;
    view.begin_edit(String::from("old"));

    *view.draft_mut().unwrap() = String::from("new");
    match &view {
        RecordView::Editing { original, draft } => {
            assert_eq!(original, "old");
            assert_eq!(draft, "new");
        }
        other => panic!("expected editing state, got {other:?}"),
    }

    assert_eq!(view.finish_edit(), Some(String::from("new")));
    assert!(view.is_idle());
}

#[test]
fn cancelling_an_edit_discards_the_draft() {
    let mut view = RecordView::Idle;
    view.begin_edit(String::from("old"));
    *view.draft_mut().unwrap() = String::from("half-typed");
    view.cancel();
    assert_eq!(view.finish_edit(), None);
}

// =============================================================
// Detail dialog
// =============================================================

#[test]
fn inspect_opens_and_cancel_closes_the_detail_dialog() {
    let mut view = RecordView::Idle;
    view.inspect("row-1");
    assert_eq!(view, RecordView::Viewing("row-1"));
    assert!(view.draft_mut().is_none());
    view.cancel();
    assert!(view.is_idle());
}
