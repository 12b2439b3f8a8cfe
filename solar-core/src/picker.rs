//! Single-selection location picker.
//!
//! Mirrors the one-marker map interaction: at most one point is selected at
//! a time, a later pick relocates the selection, and an out-of-region pick
//! is rejected without touching existing state.

use thiserror::Error;

use crate::{model::Coordinate, region::ACCEPT_BOUNDS};

#[derive(Debug, Error, PartialEq)]
#[error("This model was trained on UK data only. Please pick a point within the UK.")]
pub struct OutsideRegion {
    pub rejected: Coordinate,
}

#[derive(Debug, Default)]
pub struct LocationPicker {
    selection: Option<Coordinate>,
    field_text: Option<String>,
}

impl LocationPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an in-region pick, replacing any previous selection and
    /// refreshing the coordinate field text.
    pub fn select(&mut self, point: Coordinate) -> Result<(), OutsideRegion> {
        if !ACCEPT_BOUNDS.contains(point) {
            return Err(OutsideRegion { rejected: point });
        }

        self.field_text = Some(point.to_string());
        self.selection = Some(point);
        Ok(())
    }

    /// The currently selected point, if any.
    pub fn selection(&self) -> Option<Coordinate> {
        self.selection
    }

    /// Current contents of the coordinate field (4-decimal rendering of the
    /// last accepted pick).
    pub fn field_text(&self) -> Option<&str> {
        self.field_text.as_deref()
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.field_text = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_region_pick_sets_selection_and_field() {
        let mut picker = LocationPicker::new();

        picker
            .select(Coordinate::new(51.507222, -0.1275))
            .expect("point within the UK must be accepted");

        assert_eq!(picker.selection(), Some(Coordinate::new(51.507222, -0.1275)));
        assert_eq!(picker.field_text(), Some("51.5072, -0.1275"));
    }

    #[test]
    fn later_pick_relocates_rather_than_accumulates() {
        let mut picker = LocationPicker::new();

        picker.select(Coordinate::new(51.5, -0.12)).expect("first pick");
        picker.select(Coordinate::new(55.95, -3.19)).expect("second pick");

        assert_eq!(picker.selection(), Some(Coordinate::new(55.95, -3.19)));
        assert_eq!(picker.field_text(), Some("55.9500, -3.1900"));
    }

    #[test]
    fn out_of_region_pick_leaves_state_untouched() {
        let mut picker = LocationPicker::new();
        picker.select(Coordinate::new(51.5, -0.12)).expect("first pick");

        let err = picker
            .select(Coordinate::new(48.85, 2.35))
            .expect_err("Paris is outside the accepted region");

        assert_eq!(err.rejected, Coordinate::new(48.85, 2.35));
        assert_eq!(picker.selection(), Some(Coordinate::new(51.5, -0.12)));
        assert_eq!(picker.field_text(), Some("51.5000, -0.1200"));
    }

    #[test]
    fn rejection_before_any_pick_leaves_picker_empty() {
        let mut picker = LocationPicker::new();

        picker
            .select(Coordinate::new(0.0, 0.0))
            .expect_err("equator is outside the accepted region");

        assert_eq!(picker.selection(), None);
        assert_eq!(picker.field_text(), None);
    }

    #[test]
    fn clear_drops_the_selection() {
        let mut picker = LocationPicker::new();
        picker.select(Coordinate::new(51.5, -0.12)).expect("pick");

        picker.clear();

        assert_eq!(picker.selection(), None);
        assert_eq!(picker.field_text(), None);
    }
}
