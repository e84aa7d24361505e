use std::collections::HashSet;

use crate::{Quote, QuoteKey};

/// Result of reconciling the local list against a remote snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// Remote quotes whose key was missing locally.
    pub added: usize,
    /// Local entries dropped because the remote copy takes their place.
    pub replaced: usize,
}

impl MergeOutcome {
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

/// Overlays `remote` onto `local`; remote copies win on key collision.
///
/// Nothing happens unless at least one remote key is absent locally. When it
/// is, every local entry sharing a key with the remote set is removed and the
/// remote set (first occurrence per key, remote order) is appended. Local-only
/// entries keep their position. Applying the same remote set again is a no-op.
pub fn merge(local: &mut Vec<Quote>, remote: &[Quote]) -> MergeOutcome {
    let mut remote_keys: HashSet<QuoteKey<'_>> = HashSet::new();
    let mut incoming = Vec::new();
    for quote in remote {
        if remote_keys.insert(quote.key()) {
            incoming.push(quote.clone());
        }
    }

    let added = {
        let local_keys: HashSet<QuoteKey<'_>> = local.iter().map(Quote::key).collect();
        incoming
            .iter()
            .filter(|quote| !local_keys.contains(&quote.key()))
            .count()
    };
    if added == 0 {
        return MergeOutcome::default();
    }

    let before = local.len();
    local.retain(|quote| !remote_keys.contains(&quote.key()));
    let replaced = before - local.len();
    local.extend(incoming);

    MergeOutcome { added, replaced }
}

#[cfg(test)]
mod tests {
    use super::merge;
    use crate::Quote;

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).unwrap()
    }

    #[test]
    fn duplicate_remote_entries_are_collapsed() {
        let mut local = vec![quote("a", "x")];
        let remote = vec![quote("b", "x"), quote("b", "x")];
        let outcome = merge(&mut local, &remote);
        assert_eq!(outcome.added, 1);
        assert_eq!(local, vec![quote("a", "x"), quote("b", "x")]);
    }

    #[test]
    fn local_duplicates_of_a_remote_key_collapse_to_the_remote_copy() {
        let mut local = vec![quote("a", "x"), quote("a", "x"), quote("c", "y")];
        let remote = vec![quote("a", "x"), quote("b", "x")];
        let outcome = merge(&mut local, &remote);
        assert_eq!(outcome.replaced, 2);
        assert_eq!(
            local,
            vec![quote("c", "y"), quote("a", "x"), quote("b", "x")]
        );
    }
}
