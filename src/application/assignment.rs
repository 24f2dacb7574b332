use crate::domain::partner::{Partner, PartnerId};

/// Round-robin partner selection.
///
/// `cursor` is the id of the last assignee. When it is `None`, or the partner
/// has since left the sequence, it is treated as the last element so the next
/// pick wraps to the front. This tolerates partner-list mutation between
/// calls: no index stability is assumed, only the sequence as currently
/// observed.
///
/// Pure and side-effect-free; callers guarantee a non-empty slice (placement
/// refuses with `NoPartner` before getting here).
pub fn assign(partners: &[Partner], cursor: Option<PartnerId>) -> (&Partner, PartnerId) {
    debug_assert!(!partners.is_empty());
    let last = cursor
        .and_then(|id| partners.iter().position(|p| p.id == id))
        .unwrap_or(partners.len() - 1);
    let next = &partners[(last + 1) % partners.len()];
    (next, next.id)
}
