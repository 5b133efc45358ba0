// Pickable pool: fetched candidates minus the unowned set.

use std::collections::HashSet;

/// Candidates whose name is not in `unowned`, in candidate order.
///
/// Duplicated candidates are kept or dropped together. Unowned names that no
/// longer appear in the candidate list have no effect.
pub fn reconcile(candidates: &[String], unowned: &[String]) -> Vec<String> {
    let unowned: HashSet<&str> = unowned.iter().map(String::as_str).collect();
    candidates
        .iter()
        .filter(|name| !unowned.contains(name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn removes_unowned_and_keeps_order() {
        let pool = reconcile(&names(&["A", "B", "C", "D"]), &names(&["C", "A"]));
        assert_eq!(pool, names(&["B", "D"]));
    }

    #[test]
    fn duplicates_are_filtered_together() {
        let candidates = names(&["A", "B", "A", "C"]);
        assert_eq!(reconcile(&candidates, &names(&["A"])), names(&["B", "C"]));
        assert_eq!(reconcile(&candidates, &[]), candidates);
    }

    #[test]
    fn stale_unowned_entries_are_ignored() {
        let pool = reconcile(&names(&["A", "B"]), &names(&["Gone"]));
        assert_eq!(pool, names(&["A", "B"]));
    }

    #[test]
    fn match_is_exact() {
        let pool = reconcile(&names(&["Ahri"]), &names(&["ahri"]));
        assert_eq!(pool, names(&["Ahri"]));
    }

    #[test]
    fn empty_inputs() {
        assert!(reconcile(&[], &names(&["A"])).is_empty());
        assert!(reconcile(&[], &[]).is_empty());
    }

    #[test]
    fn output_size_and_membership() {
        let candidates = names(&["A", "B", "A", "C", "D", "B"]);
        let unowned = names(&["B", "Z"]);
        let first = reconcile(&candidates, &unowned);
        let second = reconcile(&candidates, &unowned);
        assert_eq!(first, second);

        let excluded = candidates.iter().filter(|c| unowned.contains(c)).count();
        assert_eq!(first.len(), candidates.len() - excluded);
        for name in &first {
            assert!(candidates.contains(name));
            assert!(!unowned.contains(name));
        }
    }
}
