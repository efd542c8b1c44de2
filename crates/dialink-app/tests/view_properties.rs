//! Property-based tests for the view controllers.
//!
//! Tests verify that invariants hold under arbitrary event sequences.

use dialink_app::{DialogListView, ViewAction, ViewController, ViewEvent};
use dialink_proto::ClientCommand;
use proptest::prelude::*;

/// A server-supplied dialog list with unique ids.
fn dialog_list_strategy() -> impl Strategy<Value = Vec<(u64, i64, bool)>> {
    prop::collection::btree_map(0u64..50, (0i64..1000, any::<bool>()), 0..10)
        .prop_map(|map| map.into_iter().map(|(id, (hash, unread))| (id, hash, unread)).collect())
}

fn dialogs_frame(entries: &[(u64, i64, bool)]) -> ViewEvent {
    let body: Vec<String> = entries
        .iter()
        .map(|(id, hash, unread)| {
            format!(r#"{{"id":{id},"hash":{hash},"text":"d{id}","is_unread":{unread}}}"#)
        })
        .collect();
    ViewEvent::FrameText(format!(r#"{{"command":"get_dialogs","dialogs":[{}]}}"#, body.join(",")))
}

/// Arbitrary single-entry list events mixed with full replaces.
fn list_event_strategy() -> impl Strategy<Value = ViewEvent> {
    prop_oneof![
        3 => (0u64..50, 0i64..1000, any::<bool>(), any::<i64>()).prop_map(
            |(id, hash, unread, integrity)| ViewEvent::FrameText(format!(
                r#"{{"command":"get_new_message","integrity_hash":{integrity},
                    "dialog":{{"id":{id},"hash":{hash},"text":"d{id}","is_unread":{unread}}}}}"#
            ))
        ),
        2 => (0u64..50, any::<i64>()).prop_map(|(id, integrity)| ViewEvent::FrameText(
            format!(r#"{{"command":"delete_dialog","dialog_id":{id},"integrity_hash":{integrity}}}"#)
        )),
        2 => (0u64..50, any::<i64>()).prop_map(|(id, integrity)| ViewEvent::FrameText(format!(
            r#"{{"command":"mark_dialog_as_read","dialog_id":{id},"integrity_hash":{integrity}}}"#
        ))),
        2 => dialog_list_strategy().prop_map(|entries| dialogs_frame(&entries)),
        1 => any::<i64>().prop_map(|integrity| ViewEvent::FrameText(
            format!(r#"{{"command":"check_integrity","integrity_hash":{integrity}}}"#)
        )),
    ]
}

proptest! {
    /// A full replace always yields exactly the server list, in server
    /// order, regardless of what came before.
    #[test]
    fn prop_full_replace_matches_server_list(
        history in prop::collection::vec(list_event_strategy(), 0..20),
        last in dialog_list_strategy(),
    ) {
        let mut view = DialogListView::new("Dialogs");
        for event in history {
            let _ = view.handle(event);
        }

        let _ = view.handle(dialogs_frame(&last));

        let got: Vec<(u64, i64, bool)> =
            view.entries().iter().map(|e| (e.id, e.hash, e.unread)).collect();
        prop_assert_eq!(got, last);
    }

    /// No event sequence can produce two entries with the same id.
    #[test]
    fn prop_entry_ids_stay_unique(
        events in prop::collection::vec(list_event_strategy(), 0..40),
    ) {
        let mut view = DialogListView::new("Dialogs");
        for event in events {
            let _ = view.handle(event);

            let mut ids: Vec<u64> = view.entries().iter().map(|e| e.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), view.entries().len());
        }
    }

    /// The navigation label never accumulates nested parenthetical counts.
    #[test]
    fn prop_nav_label_never_nests(
        events in prop::collection::vec(list_event_strategy(), 0..40),
    ) {
        let mut view = DialogListView::new("Dialogs");
        for event in events {
            let _ = view.handle(event);

            let label = view.nav_label();
            let parens = label.matches('(').count();
            prop_assert!(parens <= 1, "label accumulated decorations: {}", label);
            prop_assert!(label.starts_with("Dialogs"));
        }
    }

    /// An integrity check against the correct sum is idempotent: it never
    /// requests a resync, however often it runs.
    #[test]
    fn prop_matching_integrity_check_is_idempotent(
        entries in dialog_list_strategy(),
    ) {
        let mut view = DialogListView::new("Dialogs");
        let _ = view.handle(dialogs_frame(&entries));

        let hash_sum: i64 = entries.iter().map(|(_, hash, _)| hash).sum();
        let unread = entries.iter().filter(|(_, _, unread)| *unread).count() as i64;
        let frame = format!(
            r#"{{"command":"check_integrity","integrity_hash":{}}}"#,
            hash_sum + unread
        );

        for _ in 0..3 {
            let actions = view.handle(ViewEvent::FrameText(frame.clone()));
            prop_assert!(actions.is_empty());
        }

        // One unit off in either direction requests exactly one resync.
        let stale = format!(
            r#"{{"command":"check_integrity","integrity_hash":{}}}"#,
            hash_sum + unread + 1
        );
        let actions = view.handle(ViewEvent::FrameText(stale));
        prop_assert_eq!(actions, vec![ViewAction::Send(ClientCommand::GiveDialogs)]);
    }
}
