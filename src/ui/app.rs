//! Main search window.
//!
//! Implements eframe::App: a query line with a search button, the result
//! list and a status line. All state changes go through [`SearchState`] so
//! they can be tested without a window.

use std::path::PathBuf;

use eframe::egui;

use crate::search::SearchOutcome;
use crate::service::{NameFilterService, StatusTone};
use crate::ui::actions;
use crate::ui::fonts;
use crate::ui::results::ResultsView;

/// Status line colour for warnings.
const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);

/// Actions requested by the keyboard in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardActions {
    pub submit: bool,
    pub select_next: bool,
    pub select_previous: bool,
    pub copy: bool,
}

/// Read the shortcuts out of a frame's input.
///
/// egui-winit turns Ctrl+C (Cmd+C on macOS) into `Event::Copy` and drops
/// the key event, so Ctrl+Shift+C is a copy event with shift held. A copy
/// event without shift belongs to the text box. On macOS Ctrl is not the
/// command key and Ctrl+Shift+C still arrives as a key press.
pub fn read_keyboard(i: &egui::InputState) -> KeyboardActions {
    let copy_event = i.events.iter().any(|e| matches!(e, egui::Event::Copy));
    let ctrl_c = i.modifiers.ctrl && i.key_pressed(egui::Key::C);

    KeyboardActions {
        submit: i.key_pressed(egui::Key::Enter),
        select_next: i.key_pressed(egui::Key::ArrowDown),
        select_previous: i.key_pressed(egui::Key::ArrowUp),
        copy: i.modifiers.shift && (copy_event || ctrl_c),
    }
}

/// Everything the window shows, independent of egui.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Current text in the query line.
    pub query: String,
    /// Names from the last search.
    results: Vec<String>,
    /// Dimmed row shown instead of results.
    placeholder: Option<&'static str>,
    /// Currently selected result index.
    selected: Option<usize>,
    /// Status line text.
    status: String,
    /// Status line colour class.
    tone: StatusTone,
}

impl SearchState {
    /// Initial state, with the startup message of the service.
    pub fn new(service: &NameFilterService) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            placeholder: None,
            selected: None,
            status: service.startup_message(),
            tone: service.load_status().tone(),
        }
    }

    /// Run the current query and replace the displayed results.
    pub fn submit(&mut self, service: &NameFilterService) {
        let outcome = service.search(&self.query);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: SearchOutcome) {
        self.placeholder = outcome.status.placeholder();
        self.status = outcome.status.message();
        self.tone = StatusTone::Normal;
        self.results = outcome.results;
        self.selected = None;
    }

    /// Move the selection one row down, starting from the first row.
    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.results.len() - 1),
            None => 0,
        });
    }

    /// Move the selection one row up.
    pub fn select_previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.results.get(i))
            .map(String::as_str)
    }

    pub fn set_status(&mut self, status: String, tone: StatusTone) {
        self.status = status;
        self.tone = tone;
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn tone(&self) -> StatusTone {
        self.tone
    }
}

/// The name search window.
pub struct NameSearchApp {
    service: NameFilterService,
    state: SearchState,
    /// Whether this is the first frame (for initial focus).
    first_frame: bool,
    /// Set after keyboard navigation so the list follows the selection.
    scroll_to_selected: bool,
}

impl NameSearchApp {
    /// Create the window around an already-loaded service.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        service: NameFilterService,
        font_path: Option<PathBuf>,
    ) -> Self {
        fonts::configure_fonts(&cc.egui_ctx, font_path.as_deref());

        let state = SearchState::new(&service);
        Self {
            service,
            state,
            first_frame: true,
            scroll_to_selected: false,
        }
    }

    fn copy_selected(&mut self) {
        let Some(name) = self.state.selected_name().map(str::to_string) else {
            return;
        };
        match actions::copy_to_clipboard(&name) {
            Ok(()) => self
                .state
                .set_status(format!("Copied \"{}\" to clipboard.", name), StatusTone::Normal),
            Err(e) => {
                tracing::error!("Failed to copy name: {}", e);
                self.state
                    .set_status(format!("Failed to copy: {}", e), StatusTone::Error);
            }
        }
    }

    /// Handle keyboard shortcuts. Returns true if a search was requested.
    fn handle_keyboard(&mut self, ctx: &egui::Context) -> bool {
        let actions = ctx.input(read_keyboard);

        if actions.select_next {
            self.state.select_next();
            self.scroll_to_selected = true;
        }
        if actions.select_previous {
            self.state.select_previous();
            self.scroll_to_selected = true;
        }
        if actions.copy {
            self.copy_selected();
        }

        actions.submit
    }

    fn status_color(&self, ui: &egui::Ui) -> egui::Color32 {
        match self.state.tone() {
            StatusTone::Normal => ui.visuals().text_color(),
            StatusTone::Warning => WARNING_COLOR,
            StatusTone::Error => ui.visuals().error_fg_color,
        }
    }
}

impl eframe::App for NameSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut submit = self.handle_keyboard(ctx);

        // Status line
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let color = self.status_color(ui);
            ui.label(egui::RichText::new(self.state.status()).color(color));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Query line
            ui.horizontal(|ui| {
                ui.label("Search name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.state.query)
                        .desired_width(ui.available_width() - 70.0)
                        .hint_text("Type a name..."),
                );

                if self.first_frame {
                    response.request_focus();
                    self.first_frame = false;
                }

                if ui.button("Search").clicked() {
                    submit = true;
                }

                if submit {
                    response.request_focus();
                }
            });

            ui.add_space(8.0);

            if submit {
                self.state.submit(&self.service);
            }

            let clicked = ResultsView::show(
                ui,
                self.state.results(),
                self.state.selected(),
                self.scroll_to_selected,
                self.state.placeholder(),
            );
            self.scroll_to_selected = false;

            if let Some(index) = clicked {
                self.state.select(index);
            }
        });
    }
}
