// src/selection/state.rs

use bevy::log::debug;
use std::collections::HashSet;
use std::num::{IntErrorKind, NonZeroU64};
use thiserror::Error;

/// Stable identity of a remote record (the artwork id).
pub type RowId = u64;

/// Anything the table can show that carries a stable row identity.
pub trait SelectableRow {
    fn row_id(&self) -> RowId;
}

impl SelectableRow for RowId {
    fn row_id(&self) -> RowId {
        *self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a whole number of rows")]
    NotANumber(String),
    #[error("Row count must be positive, got {0}")]
    NonPositiveCount(i64),
    #[error("'{0}' is too many rows")]
    CountTooLarge(String),
}

/// 1-based position of a row in the full, unpaginated ordering.
///
/// `page` is 1-based and `offset` is the 0-based index inside that page.
/// A page number of 0 is treated as page 1.
pub fn absolute_position(page: u32, page_size: u32, offset: usize) -> u64 {
    let preceding_pages = u64::from(page.saturating_sub(1));
    preceding_pages * u64::from(page_size) + offset as u64 + 1
}

/// Parses the text typed into the bulk-count field.
///
/// Only checks that the input is an integer; positivity is enforced by
/// [`SelectionState::apply_bulk_select`].
pub fn parse_bulk_count(input: &str) -> Result<i64, SelectionError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => SelectionError::CountTooLarge(trimmed.to_string()),
        IntErrorKind::NegOverflow => SelectionError::NonPositiveCount(i64::MIN),
        _ => SelectionError::NotANumber(trimmed.to_string()),
    })
}

/// Cross-page selection: explicit inclusions, explicit exclusions and an
/// optional "first N rows" default.
///
/// Only the override sets are stored, so selecting the first N rows costs
/// the same regardless of N. `included` and `excluded` never share an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    included: HashSet<RowId>,
    excluded: HashSet<RowId>,
    bulk_count: Option<NonZeroU64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn included(&self) -> &HashSet<RowId> {
        &self.included
    }

    pub fn excluded(&self) -> &HashSet<RowId> {
        &self.excluded
    }

    pub fn bulk_count(&self) -> Option<NonZeroU64> {
        self.bulk_count
    }

    /// Whether the row with `row_id` at `position` counts as selected.
    /// Exclusion beats inclusion, which beats the bulk range.
    pub fn resolve(&self, row_id: RowId, position: u64) -> bool {
        if self.excluded.contains(&row_id) {
            return false;
        }
        if self.included.contains(&row_id) {
            return true;
        }
        match self.bulk_count {
            Some(count) => position <= count.get(),
            None => false,
        }
    }

    /// Applies the checked state the table reports for the visible page.
    ///
    /// Every id in `page_row_ids` is updated; ids not on the page are left
    /// alone. An unchecked row only becomes an explicit exclusion when some
    /// mechanism could otherwise have selected it.
    pub fn apply_visible_selection_edit(
        &mut self,
        page_row_ids: &[RowId],
        checked_row_ids: &HashSet<RowId>,
    ) {
        let bulk_active = self.bulk_count.is_some();
        let mut newly_included = 0usize;
        let mut newly_excluded = 0usize;

        for id in page_row_ids {
            if checked_row_ids.contains(id) {
                self.excluded.remove(id);
                if self.included.insert(*id) {
                    newly_included += 1;
                }
            } else {
                let was_included = self.included.remove(id);
                if (was_included || bulk_active) && self.excluded.insert(*id) {
                    newly_excluded += 1;
                }
            }
        }

        debug!(
            "Selection: page edit over {} row(s): +{} included, +{} excluded (totals {} / {})",
            page_row_ids.len(),
            newly_included,
            newly_excluded,
            self.included.len(),
            self.excluded.len()
        );
    }

    /// Selects rows 1..=count across all pages and drops every per-row
    /// override. Leaves the state untouched when `count` is not positive.
    pub fn apply_bulk_select(&mut self, count: i64) -> Result<NonZeroU64, SelectionError> {
        let count = u64::try_from(count)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(SelectionError::NonPositiveCount(count))?;

        self.bulk_count = Some(count);
        self.included.clear();
        self.excluded.clear();
        debug!("Selection: bulk selection set to first {} row(s)", count);
        Ok(count)
    }

    /// Parses `input` and applies it as a bulk count.
    pub fn apply_bulk_select_input(&mut self, input: &str) -> Result<NonZeroU64, SelectionError> {
        let count = parse_bulk_count(input)?;
        self.apply_bulk_select(count)
    }

    /// The rows of `page_rows` that should render as checked.
    pub fn visible_selection<'a, R: SelectableRow>(
        &self,
        page_rows: &'a [R],
        page: u32,
        page_size: u32,
    ) -> Vec<&'a R> {
        page_rows
            .iter()
            .enumerate()
            .filter(|(offset, row)| {
                self.resolve(row.row_id(), absolute_position(page, page_size, *offset))
            })
            .map(|(_, row)| row)
            .collect()
    }

    /// Ids of [`Self::visible_selection`], for widgets that track checkboxes by id.
    pub fn visible_selection_ids<R: SelectableRow>(
        &self,
        page_rows: &[R],
        page: u32,
        page_size: u32,
    ) -> HashSet<RowId> {
        self.visible_selection(page_rows, page, page_size)
            .into_iter()
            .map(|row| row.row_id())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bulk_count.is_none() && self.included.is_empty() && self.excluded.is_empty()
    }

    /// Short human-readable description for the status bar.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "Nothing selected".to_string();
        }
        let mut parts = Vec::new();
        if let Some(count) = self.bulk_count {
            parts.push(format!("First {} row(s)", count));
        }
        if !self.included.is_empty() {
            parts.push(format!("+{} picked", self.included.len()));
        }
        if !self.excluded.is_empty() {
            parts.push(format!("-{} excluded", self.excluded.len()));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_SIZE: u32 = 12;

    fn page_ids(page: u32) -> Vec<RowId> {
        let start = u64::from(page - 1) * u64::from(PAGE_SIZE) + 1;
        (start..start + u64::from(PAGE_SIZE)).collect()
    }

    fn ids(values: &[RowId]) -> HashSet<RowId> {
        values.iter().copied().collect()
    }

    fn visible(state: &SelectionState, page: u32) -> Vec<RowId> {
        let rows = page_ids(page);
        state
            .visible_selection(&rows, page, PAGE_SIZE)
            .into_iter()
            .copied()
            .collect()
    }

    fn assert_disjoint(state: &SelectionState) {
        assert!(
            state.included().is_disjoint(state.excluded()),
            "included {:?} overlaps excluded {:?}",
            state.included(),
            state.excluded()
        );
    }

    #[test]
    fn positions_are_one_based_across_pages() {
        assert_eq!(absolute_position(1, 12, 0), 1);
        assert_eq!(absolute_position(1, 12, 11), 12);
        assert_eq!(absolute_position(2, 12, 0), 13);
        assert_eq!(absolute_position(3, 25, 4), 55);
        assert_eq!(absolute_position(0, 12, 0), 1);
    }

    #[test]
    fn fresh_state_selects_nothing() {
        let state = SelectionState::new();
        assert!(state.is_empty());
        assert!(!state.resolve(1, 1));
        assert!(visible(&state, 1).is_empty());
    }

    #[test]
    fn bulk_fifteen_spans_first_two_pages() {
        let mut state = SelectionState::new();
        state.apply_bulk_select(15).unwrap();

        assert_eq!(visible(&state, 1), page_ids(1));
        assert_eq!(visible(&state, 2), vec![13, 14, 15]);
        assert!(visible(&state, 3).is_empty());
    }

    #[test]
    fn unchecking_under_bulk_records_exclusion() {
        let mut state = SelectionState::new();
        state.apply_bulk_select(15).unwrap();

        let rows = page_ids(1);
        let checked: HashSet<RowId> = rows.iter().copied().filter(|id| *id != 2).collect();
        state.apply_visible_selection_edit(&rows, &checked);

        assert!(!state.resolve(2, 2));
        assert_eq!(state.excluded(), &ids(&[2]));
        for id in rows.iter().copied().filter(|id| *id != 2) {
            assert!(state.resolve(id, id), "row {} should stay selected", id);
        }
        assert_disjoint(&state);
    }

    #[test]
    fn checking_without_bulk_only_includes() {
        let mut state = SelectionState::new();
        state.apply_visible_selection_edit(&page_ids(1), &ids(&[5]));

        assert_eq!(state.included(), &ids(&[5]));
        assert!(state.excluded().is_empty());
        assert_eq!(visible(&state, 1), vec![5]);
    }

    #[test]
    fn unchecking_a_picked_row_without_bulk_excludes_it() {
        let mut state = SelectionState::new();
        let rows = page_ids(1);
        state.apply_visible_selection_edit(&rows, &ids(&[3, 4]));
        state.apply_visible_selection_edit(&rows, &ids(&[4]));

        assert_eq!(state.included(), &ids(&[4]));
        assert_eq!(state.excluded(), &ids(&[3]));
        assert_disjoint(&state);
    }

    #[test]
    fn invalid_bulk_counts_leave_state_untouched() {
        let mut state = SelectionState::new();
        state.apply_visible_selection_edit(&page_ids(1), &ids(&[1, 7]));
        let before = state.clone();

        assert_eq!(state.apply_bulk_select(0), Err(SelectionError::NonPositiveCount(0)));
        assert_eq!(state.apply_bulk_select(-3), Err(SelectionError::NonPositiveCount(-3)));
        assert_eq!(
            state.apply_bulk_select_input("ten"),
            Err(SelectionError::NotANumber("ten".to_string()))
        );
        assert_eq!(
            state.apply_bulk_select_input(""),
            Err(SelectionError::NotANumber(String::new()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn oversized_bulk_input_reports_too_large() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.apply_bulk_select_input("99999999999999999999"),
            Err(SelectionError::CountTooLarge("99999999999999999999".to_string()))
        );
        assert_eq!(
            state.apply_bulk_select_input("-99999999999999999999"),
            Err(SelectionError::NonPositiveCount(i64::MIN))
        );
        assert!(state.is_empty());
    }

    #[test]
    fn bulk_input_accepts_surrounding_whitespace() {
        let mut state = SelectionState::new();
        let count = state.apply_bulk_select_input("  20 ").unwrap();
        assert_eq!(count.get(), 20);
        assert_eq!(state.bulk_count().map(NonZeroU64::get), Some(20));
    }

    #[test]
    fn new_bulk_count_clears_overrides() {
        let mut state = SelectionState::new();
        state.apply_bulk_select(10).unwrap();
        state.apply_visible_selection_edit(&page_ids(2), &ids(&[13, 14]));
        state.apply_visible_selection_edit(&page_ids(1), &ids(&[1]));
        assert!(!state.included().is_empty());
        assert!(!state.excluded().is_empty());

        state.apply_bulk_select(30).unwrap();
        assert!(state.included().is_empty());
        assert!(state.excluded().is_empty());
    }

    #[test]
    fn exclusion_dominates_every_other_rule() {
        let mut state = SelectionState::new();
        state.apply_bulk_select(100).unwrap();
        state.apply_visible_selection_edit(&[42], &HashSet::new());

        assert!(state.excluded().contains(&42));
        for position in [1, 42, 100, 101] {
            assert!(!state.resolve(42, position));
        }
    }

    #[test]
    fn bulk_selection_ignores_page_size_and_visit_order() {
        let n = 30;
        for page_size in [5u32, 12, 25, 100] {
            let mut state = SelectionState::new();
            state.apply_bulk_select(n).unwrap();

            let pages = (u64::from(n as u32) * 2).div_ceil(u64::from(page_size)) as u32;
            for page in (1..=pages).rev() {
                let start = u64::from(page - 1) * u64::from(page_size) + 1;
                let rows: Vec<RowId> = (start..start + u64::from(page_size)).collect();
                for (offset, row) in rows.iter().enumerate() {
                    let position = absolute_position(page, page_size, offset);
                    assert_eq!(state.resolve(*row, position), position <= n as u64);
                }
            }
        }
    }

    #[test]
    fn re_rendering_is_idempotent() {
        let mut state = SelectionState::new();
        state.apply_bulk_select(7).unwrap();
        state.apply_visible_selection_edit(&page_ids(1), &ids(&[1, 2, 3, 9]));

        let first = visible(&state, 1);
        let second = visible(&state, 1);
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2, 3, 9]);
    }

    #[test]
    fn page_edit_round_trips_for_any_subset() {
        let rows = page_ids(2);
        let subsets: [&[RowId]; 4] = [&[], &[13], &[14, 20, 24], rows.as_slice()];

        for bulk in [None, Some(5), Some(18), Some(40)] {
            for subset in subsets {
                let mut state = SelectionState::new();
                if let Some(n) = bulk {
                    state.apply_bulk_select(n).unwrap();
                }
                state.apply_visible_selection_edit(&page_ids(1), &ids(&[2, 4]));
                let page_one_before = visible(&state, 1);

                state.apply_visible_selection_edit(&rows, &ids(subset));

                assert_eq!(visible(&state, 2), subset.to_vec(), "bulk {:?}", bulk);
                assert_eq!(visible(&state, 1), page_one_before);
                assert_disjoint(&state);
            }
        }
    }

    #[test]
    fn unknown_ids_are_unselected_and_ignored() {
        let mut state = SelectionState::new();
        state.apply_visible_selection_edit(&page_ids(1), &ids(&[999]));

        assert!(state.is_empty());
        assert!(!state.resolve(999, 1));
    }

    #[test]
    fn summary_reports_each_channel() {
        let mut state = SelectionState::new();
        assert_eq!(state.summary(), "Nothing selected");

        state.apply_bulk_select(15).unwrap();
        state.apply_visible_selection_edit(&[1, 2, 3], &ids(&[1, 3]));
        state.apply_visible_selection_edit(&[4, 5], &ids(&[4, 5]));
        assert_eq!(state.summary(), "First 15 row(s), +4 picked, -1 excluded");
    }
}
