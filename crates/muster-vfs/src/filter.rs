//! Name filtering for directory listings.

/// Match a single path component against a name filter.
///
/// `*` matches any run of characters, `?` matches exactly one character,
/// everything else is literal. This is the listing-level filter only; the
/// glob engine does its own segment matching and always lists with `*`.
///
/// ```
/// use muster_vfs::name_matches;
///
/// assert!(name_matches("*", "anything"));
/// assert!(name_matches("*.c", "Qux.c"));
/// assert!(name_matches("Q?x.c", "Qex.c"));
/// assert!(!name_matches("*.c", "Qux.h"));
/// ```
pub fn name_matches(filter: &str, name: &str) -> bool {
    if filter == "*" {
        return true;
    }
    let filter: Vec<char> = filter.chars().collect();
    let name: Vec<char> = name.chars().collect();
    matches_from(&filter, 0, &name, 0)
}

fn matches_from(filter: &[char], fi: usize, name: &[char], ni: usize) -> bool {
    if fi >= filter.len() {
        return ni >= name.len();
    }

    match filter[fi] {
        '*' => {
            // Skip consecutive stars, then try every split point.
            let mut next_fi = fi;
            while next_fi < filter.len() && filter[next_fi] == '*' {
                next_fi += 1;
            }
            if next_fi >= filter.len() {
                return true;
            }
            (ni..=name.len()).any(|split| matches_from(filter, next_fi, name, split))
        }
        '?' => ni < name.len() && matches_from(filter, fi + 1, name, ni + 1),
        c => ni < name.len() && c == name[ni] && matches_from(filter, fi + 1, name, ni + 1),
    }
}
