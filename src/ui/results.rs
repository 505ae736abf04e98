//! Search results list view.
//!
//! Renders matching names as a single-selection list with virtual
//! scrolling, so only visible rows are laid out.

use eframe::egui::{self, ScrollArea};

/// Height of one result row, spacing excluded.
const ROW_HEIGHT: f32 = 22.0;

/// Scroll offset that puts row `selected` at the top of the list.
///
/// `row_pitch` is the row height plus vertical item spacing, matching how
/// `ScrollArea::show_rows` lays rows out.
pub fn scroll_offset_for(selected: usize, row_pitch: f32) -> f32 {
    selected as f32 * row_pitch
}

/// View for displaying search results.
pub struct ResultsView;

impl ResultsView {
    /// Display the results list.
    ///
    /// `scroll_to_selected` brings the selected row into view, used after
    /// keyboard navigation. `placeholder` is drawn as a single dimmed,
    /// non-selectable row when there are no results.
    ///
    /// Returns the index of a clicked row, if any.
    pub fn show(
        ui: &mut egui::Ui,
        results: &[String],
        selected: Option<usize>,
        scroll_to_selected: bool,
        placeholder: Option<&str>,
    ) -> Option<usize> {
        let mut clicked_index = None;

        egui::Frame::none()
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(4.0)
            .show(ui, |ui| {
                if results.is_empty() {
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            if let Some(text) = placeholder {
                                ui.weak(text);
                            }
                        });
                    return;
                }

                let mut scroll = ScrollArea::vertical().auto_shrink([false, false]);
                if let Some(index) = selected.filter(|_| scroll_to_selected) {
                    let row_pitch = ROW_HEIGHT + ui.spacing().item_spacing.y;
                    scroll = scroll.vertical_scroll_offset(scroll_offset_for(index, row_pitch));
                }

                scroll.show_rows(ui, ROW_HEIGHT, results.len(), |ui, row_range| {
                    for i in row_range {
                        if let Some(name) = results.get(i) {
                            let is_selected = selected == Some(i);
                            let response = ui.add_sized(
                                [ui.available_width(), ROW_HEIGHT],
                                egui::SelectableLabel::new(is_selected, name.as_str()),
                            );
                            if response.clicked() {
                                clicked_index = Some(i);
                            }
                        }
                    }
                });
            });

        clicked_index
    }
}
