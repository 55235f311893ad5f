pub const N_ACTIONS: i32 = 13;

// 0 is reserved for the no-op; the rest follow the DS button layout.
static ACTION_TABLE: [&[&str]; N_ACTIONS as usize] = [
    &[],
    &["up"],
    &["down"],
    &["left"],
    &["right"],
    &["a"],
    &["b"],
    &["x"],
    &["y"],
    &["l"],
    &["r"],
    &["start"],
    &["select"],
];

/// Total over every index: anything outside the table resolves to the
/// empty button set rather than an error.
pub fn logical_buttons(action: i32) -> &'static [&'static str] {
    usize::try_from(action)
        .ok()
        .and_then(|index| ACTION_TABLE.get(index))
        .copied()
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves() {
        assert_eq!(logical_buttons(0), &[] as &[&str]);
        assert_eq!(logical_buttons(1), &["up"]);
        assert_eq!(logical_buttons(4), &["right"]);
        assert_eq!(logical_buttons(5), &["a"]);
        assert_eq!(logical_buttons(11), &["start"]);
        assert_eq!(logical_buttons(12), &["select"]);
    }

    #[test]
    fn out_of_table_indices_are_noops() {
        assert_eq!(logical_buttons(N_ACTIONS), &[] as &[&str]);
        assert_eq!(logical_buttons(99), &[] as &[&str]);
        assert_eq!(logical_buttons(-1), &[] as &[&str]);
        assert_eq!(logical_buttons(i32::MIN), &[] as &[&str]);
        assert_eq!(logical_buttons(i32::MAX), &[] as &[&str]);
    }
}
