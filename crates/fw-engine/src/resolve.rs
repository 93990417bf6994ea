//! Name matching for player-typed entity references.

use strsim::jaro_winkler;

/// Minimum similarity for a fuzzy match to count.
const FUZZY_THRESHOLD: f64 = 0.84;

/// Pick the entity a player-typed name refers to.
///
/// Substring containment wins first, in candidate order, so "key" finds the
/// "brass key" even when an adjective was dropped. Failing that, the
/// highest-scoring fuzzy match above the threshold is used, which absorbs
/// small typos like "gurad".
pub(crate) fn pick_by_name<'a, T, F>(query: &str, candidates: &[&'a T], name_of: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let mut best: Option<(&'a T, f64)> = None;
    for candidate in candidates.iter().copied() {
        let name = name_of(candidate).to_lowercase();
        if name.contains(&query) {
            return Some(candidate);
        }
        let score = jaro_winkler(&name, &query);
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    fn pick<'a>(query: &str, pool: &[&'a Named]) -> Option<&'a str> {
        pick_by_name(query, pool, |n| n.0).map(|n| n.0)
    }

    #[test]
    fn substring_match_wins() {
        let key = Named("brass key");
        let keg = Named("beer keg");
        assert_eq!(pick("key", &[&keg, &key]), Some("brass key"));
    }

    #[test]
    fn substring_match_takes_first_in_order() {
        let a = Named("silver coin");
        let b = Named("copper coin");
        assert_eq!(pick("coin", &[&a, &b]), Some("silver coin"));
    }

    #[test]
    fn fuzzy_match_absorbs_typos() {
        let guard = Named("guard");
        assert_eq!(pick("gurad", &[&guard]), Some("guard"));
    }

    #[test]
    fn unrelated_names_do_not_match() {
        let guard = Named("guard");
        assert_eq!(pick("dragon", &[&guard]), None);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let guard = Named("guard");
        assert_eq!(pick("  ", &[&guard]), None);
    }

    #[test]
    fn query_is_case_insensitive() {
        let key = Named("Brass Key");
        assert_eq!(pick("KEY", &[&key]), Some("Brass Key"));
    }
}
