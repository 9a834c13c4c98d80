use std::collections::BTreeSet;

/// Cursor and selection state for list-like forms.
///
/// Pure data with transition rules, no I/O. The cursor saturates at the
/// first and last choice instead of wrapping. The selected set is only
/// used by checkbox forms; list forms leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    cursor: usize,
    len: usize,
    selected: BTreeSet<usize>,
}

impl Selection {
    /// Create a selection over `len` choices, cursor on the first one,
    /// nothing selected. `len` must be non-zero; forms guarantee this
    /// through the pre-flight choice checks.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "selection over zero choices");
        Self {
            cursor: 0,
            len,
            selected: BTreeSet::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the cursor one choice up; no-op at the first choice.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.check_invariant();
    }

    /// Move the cursor one choice down; no-op at the last choice.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
        self.check_invariant();
    }

    /// Flip whether the choice under the cursor is selected.
    pub fn toggle(&mut self) {
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
        self.check_invariant();
    }

    /// Select every choice.
    pub fn select_all(&mut self) {
        self.selected = (0..self.len).collect();
        self.check_invariant();
    }

    /// Invert the selected set. Applying this twice restores the
    /// original selection.
    pub fn invert_all(&mut self) {
        self.selected = (0..self.len)
            .filter(|idx| !self.selected.contains(idx))
            .collect();
        self.check_invariant();
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.selected.contains(&idx)
    }

    /// The selected indices in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn check_invariant(&self) {
        debug_assert!(self.cursor < self.len, "cursor out of range");
        debug_assert!(
            self.selected.iter().all(|&idx| idx < self.len),
            "selected index out of range"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_saturates_at_both_ends() {
        let mut selection = Selection::new(3);
        selection.move_up();
        assert_eq!(selection.cursor(), 0);

        selection.move_down();
        selection.move_down();
        assert_eq!(selection.cursor(), 2);
        selection.move_down();
        assert_eq!(selection.cursor(), 2);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = Selection::new(2);
        selection.toggle();
        assert!(selection.is_selected(0));
        selection.toggle();
        assert!(!selection.is_selected(0));
    }

    #[test]
    fn select_all_selects_everything() {
        let mut selection = Selection::new(4);
        selection.select_all();
        let indices: Vec<usize> = selection.selected_indices().collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn invert_all_is_an_involution() {
        let mut selection = Selection::new(5);
        selection.toggle();
        selection.move_down();
        selection.move_down();
        selection.toggle();
        let before: Vec<usize> = selection.selected_indices().collect();

        selection.invert_all();
        let inverted: Vec<usize> = selection.selected_indices().collect();
        assert_eq!(inverted, [1, 3, 4]);

        selection.invert_all();
        let after: Vec<usize> = selection.selected_indices().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn selected_indices_are_ascending() {
        let mut selection = Selection::new(4);
        selection.move_down();
        selection.move_down();
        selection.move_down();
        selection.toggle(); // 3
        selection.move_up();
        selection.move_up();
        selection.move_up();
        selection.toggle(); // 0
        let indices: Vec<usize> = selection.selected_indices().collect();
        assert_eq!(indices, [0, 3]);
    }
}
