//! Checksum-based integrity reconciliation.
//!
//! The sole consistency-repair mechanism: no sequence numbers, no vector
//! clocks. Each view sums the per-item contributions of its current records
//! and compares against the checksum the server pushed alongside an event.
//! Divergence of any magnitude triggers exactly one full-resync request;
//! agreement triggers nothing, so repeated checks with a matching sum are
//! idempotent. A client that never receives further events will not
//! self-heal from a desync; that is accepted.

use dialink_proto::ClientCommand;

use crate::ViewAction;

/// Compare a locally computed checksum against the server's.
///
/// Returns the resync request to send on mismatch, `None` on agreement.
pub(crate) fn check(
    local_hash: i64,
    server_hash: i64,
    resync: ClientCommand,
) -> Option<ViewAction> {
    if local_hash == server_hash {
        None
    } else {
        tracing::info!("integrity mismatch: local {local_hash}, server {server_hash}");
        Some(ViewAction::Send(resync))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_hash_sends_nothing_no_matter_how_often() {
        for _ in 0..5 {
            assert_eq!(check(500, 500, ClientCommand::GiveMessages), None);
        }
    }

    #[test]
    fn any_mismatch_requests_one_resync() {
        for local in [499, 501, 0, -500, i64::MAX] {
            assert_eq!(
                check(local, 500, ClientCommand::GiveDialogs),
                Some(ViewAction::Send(ClientCommand::GiveDialogs))
            );
        }
    }
}
