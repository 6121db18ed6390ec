use std::cmp::Ordering;

/// Locale-style string comparison used to order preference names.
///
/// Strings compare case-insensitively first; when they only differ by case,
/// lowercase sorts before uppercase (`"a" < "A" < "b"`). Remaining ties fall
/// back to code-point order so the result is a total order.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    a.cmp(b)
}
