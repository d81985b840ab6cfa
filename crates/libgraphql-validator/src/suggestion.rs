//! "Did you mean ...?" name suggestions.

/// The most suggestions [`suggest`] callers in this crate ever ask for.
pub const MAX_SUGGESTIONS: usize = 5;

/// Rank `candidates` by how closely they resemble `target`.
///
/// Similarity is the (case-sensitive) Levenshtein distance between the two
/// names. Candidates more than `max(1, ceil(len(target) / 2))` edits away are
/// discarded. Survivors are ordered by ascending distance, with ties kept in
/// the order they appear in `candidates`, and at most `max_results` are
/// returned.
pub fn suggest<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    max_results: usize,
) -> Vec<&'a str> {
    let threshold = target.chars().count().div_ceil(2).max(1);

    let mut ranked: Vec<(usize, &'a str)> = candidates
        .into_iter()
        .map(|candidate| (strsim::levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .collect();

    // `sort_by_key` is stable, so equal distances keep their input order.
    ranked.sort_by_key(|(distance, _)| *distance);

    ranked.into_iter()
        .take(max_results)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Render `items` as a quoted English disjunction:
/// `"a"`, `"a" or "b"`, `"a", "b", or "c"`.
pub fn quoted_or_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();

    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.to_owned(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
