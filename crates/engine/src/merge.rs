/// Combine two ordered sequences, preserving first-seen order and
/// skipping incoming items already present by value equality.
///
/// If either side is empty the other is returned unchanged (moved, no
/// copy). Idempotent: appending the same incoming sequence twice yields
/// the same result as appending it once.
pub fn union_append<T: PartialEq>(existing: Vec<T>, incoming: Vec<T>) -> Vec<T> {
    if existing.is_empty() {
        return incoming;
    }
    if incoming.is_empty() {
        return existing;
    }
    let mut merged = existing;
    for item in incoming {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }
    merged
}
