//! The ordered row list controller.
//!
//! [`RowList`] maintains the ordered sequence of text rows behind a
//! [`DynamicInput`](crate::DynamicInput) widget and implements the mutation
//! rules: append, per-row edit, delete with shift-down, and adjacent swaps
//! for reordering. Every mutation also computes which position should receive
//! input focus afterwards; applying that focus is the widget's job, one
//! render pass later.
//!
//! Row identity is positional: rows are distinguishable only by content and
//! position, and positions are contiguous `0..len` at all times.

/// One list entry holding a text value.
///
/// A row's position is implicit - it is the row's index in the owning
/// [`RowList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    value: String,
}

impl Row {
    /// Creates a new row with the given text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Gets the row's text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets the row's text value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// The ordered sequence of rows owned by one widget instance.
///
/// Rows are created only via [`append`](Self::append), destroyed only via
/// [`remove`](Self::remove), and reordered only via
/// [`move_up`](Self::move_up) / [`move_down`](Self::move_down). Each
/// mutation returns the focus target it implies: the position, if any, that
/// should receive input focus once the rendering layer has committed the
/// change.
///
/// Positions passed to the mutation methods must be in range; controls are
/// only rendered for live rows, so an out-of-range position is a caller bug
/// and asserts rather than being silently recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<Row>,
}

impl RowList {
    /// Creates an empty row list.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a new row with an empty value at the end of the sequence.
    ///
    /// Returns the new row's position, which is also the focus target.
    /// Growth is unbounded; append never fails.
    pub fn append(&mut self) -> usize {
        self.rows.push(Row::default());
        let position = self.rows.len() - 1;
        tracing::trace!(target: "dyninput::rows", position, "appended row");
        position
    }

    /// Replaces the value at `position`.
    ///
    /// No other row's value or position changes, and the focus target is
    /// unaffected - editing is an in-place mutation, not a structural one.
    pub fn set_value(&mut self, position: usize, value: impl Into<String>) {
        self.assert_in_range(position);
        self.rows[position].set_value(value);
    }

    /// Removes the row at `position`; all rows after it shift down by one.
    ///
    /// Returns the focus target: the row now occupying `position` if one
    /// exists (the previous `position + 1`), otherwise the new last row,
    /// otherwise `None` when the list became empty.
    pub fn remove(&mut self, position: usize) -> Option<usize> {
        self.assert_in_range(position);
        self.rows.remove(position);
        tracing::trace!(target: "dyninput::rows", position, remaining = self.rows.len(), "removed row");

        if self.rows.is_empty() {
            None
        } else if position < self.rows.len() {
            Some(position)
        } else {
            Some(self.rows.len() - 1)
        }
    }

    /// Swaps the row at `position` with the one above it.
    ///
    /// No-op when `position` is already the top row. Returns the focus
    /// target: the moved row's new position (`position - 1` on success,
    /// `position` unchanged on the no-op).
    pub fn move_up(&mut self, position: usize) -> usize {
        self.assert_in_range(position);
        if position == 0 {
            return position;
        }
        self.rows.swap(position, position - 1);
        tracing::trace!(target: "dyninput::rows", from = position, to = position - 1, "moved row up");
        position - 1
    }

    /// Swaps the row at `position` with the one below it.
    ///
    /// No-op when `position` is already the bottom row. Returns the focus
    /// target: the moved row's new position (`position + 1` on success,
    /// `position` unchanged on the no-op).
    pub fn move_down(&mut self, position: usize) -> usize {
        self.assert_in_range(position);
        if position == self.rows.len() - 1 {
            return position;
        }
        self.rows.swap(position, position + 1);
        tracing::trace!(target: "dyninput::rows", from = position, to = position + 1, "moved row down");
        position + 1
    }

    /// Gets the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Gets the row at `position`, if it exists.
    pub fn get(&self, position: usize) -> Option<&Row> {
        self.rows.get(position)
    }

    /// Gets the text value at `position`, if the row exists.
    pub fn value(&self, position: usize) -> Option<&str> {
        self.rows.get(position).map(Row::value)
    }

    /// Returns the row values in display order.
    pub fn values(&self) -> Vec<&str> {
        self.rows.iter().map(Row::value).collect()
    }

    /// Iterates over the rows in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    fn assert_in_range(&self, position: usize) {
        assert!(
            position < self.rows.len(),
            "row position {position} out of range (len {})",
            self.rows.len()
        );
    }
}

impl<'a> IntoIterator for &'a RowList {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> RowList {
        let mut list = RowList::new();
        for value in values {
            let position = list.append();
            list.set_value(position, *value);
        }
        list
    }

    #[test]
    fn test_append_focuses_new_empty_row() {
        let mut list = RowList::new();

        let first = list.append();
        assert_eq!(first, 0);
        assert_eq!(list.value(0), Some(""));

        let second = list.append();
        assert_eq!(second, 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_value_touches_only_one_row() {
        let mut list = list_of(&["apples", "pears", "watermelon", "cantaloupe"]);

        list.set_value(3, "bananas");

        assert_eq!(list.values(), vec!["apples", "pears", "watermelon", "bananas"]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_move_up_swaps_with_previous() {
        let mut list = list_of(&["apples", "pears", "watermelon", "cantaloupe"]);

        let focus = list.move_up(3);

        assert_eq!(focus, 2);
        assert_eq!(list.values(), vec!["apples", "pears", "cantaloupe", "watermelon"]);
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut list = list_of(&["apples", "pears"]);

        let focus = list.move_up(0);

        assert_eq!(focus, 0);
        assert_eq!(list.values(), vec!["apples", "pears"]);
    }

    #[test]
    fn test_move_down_swaps_with_next() {
        let mut list = list_of(&["apples", "pears", "watermelon", "cantaloupe"]);

        let focus = list.move_down(0);

        assert_eq!(focus, 1);
        assert_eq!(list.values(), vec!["pears", "apples", "watermelon", "cantaloupe"]);
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut list = list_of(&["apples", "pears", "watermelon", "cantaloupe"]);

        let focus = list.move_down(3);

        assert_eq!(focus, 3);
        assert_eq!(list.values(), vec!["apples", "pears", "watermelon", "cantaloupe"]);
    }

    #[test]
    fn test_move_up_then_down_restores_order() {
        let mut list = list_of(&["apples", "pears", "watermelon", "cantaloupe"]);
        let original = list.clone();

        let up = list.move_up(2);
        assert_eq!(up, 1);
        let down = list.move_down(up);
        assert_eq!(down, 2);

        assert_eq!(list, original);
    }

    #[test]
    fn test_remove_middle_row_focuses_successor() {
        let mut list = list_of(&["pears", "apples", "bananas"]);

        let focus = list.remove(1);

        assert_eq!(focus, Some(1));
        assert_eq!(list.values(), vec!["pears", "bananas"]);
    }

    #[test]
    fn test_remove_last_row_focuses_new_last() {
        let mut list = list_of(&["strawberries", "pears", "bananas", "grapefruit"]);

        let focus = list.remove(3);

        assert_eq!(focus, Some(2));
        assert_eq!(list.values(), vec!["strawberries", "pears", "bananas"]);
    }

    #[test]
    fn test_remove_only_row_leaves_no_focus() {
        let mut list = list_of(&["oranges"]);

        let focus = list.remove(0);

        assert_eq!(focus, None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_everything_from_the_front() {
        let mut list = list_of(&["pears", "apples", "bananas", "grapefruit"]);

        while !list.is_empty() {
            list.remove(0);
        }

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_delete_everything_from_the_back() {
        let mut list = list_of(&["pears", "apples", "bananas", "grapefruit"]);

        let mut focus = None;
        while !list.is_empty() {
            focus = list.remove(list.len() - 1);
        }

        assert!(list.is_empty());
        assert_eq!(focus, None);
    }

    #[test]
    fn test_positions_stay_contiguous_after_remove() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.remove(1);

        for (index, row) in list.iter().enumerate() {
            assert_eq!(list.value(index), Some(row.value()));
        }
        assert_eq!(list.values(), vec!["a", "c", "d"]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_value_out_of_range_panics() {
        let mut list = list_of(&["apples"]);
        list.set_value(1, "pears");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_from_empty_panics() {
        let mut list = RowList::new();
        list.remove(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_move_up_out_of_range_panics() {
        let mut list = list_of(&["apples"]);
        list.move_up(1);
    }
}
