use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};

use serde::Serialize;

use crate::catalog::{OptionCatalog, eq_ignore_case};
use crate::config::Config;
use crate::input::CatalogUpdate;
use crate::layout::LayoutRegions;
use crate::outside::PointerRouter;
use crate::select::{Picker, PickerChange, SelectSettings, Variant};

const REQUIRED_MESSAGE: &str = "A selection is required";

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Finish, // Print the selection (Enter/Esc on a closed picker)
    Abort,  // Print nothing (Ctrl+C)
}

/// Final selection printed on finish
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub selected: Vec<String>,
    /// Values created this session that ended up selected
    pub created: Vec<String>,
}

/// Application state
///
/// The app is the host of the controlled picker: every `PickerChange` the
/// picker returns is applied here before the next frame.
pub struct App {
    pub picker: Picker,
    pub router: PointerRouter,
    pub layout_regions: LayoutRegions,
    pub max_visible: usize,
    pub should_quit: bool,
    pub output_mode: Option<OutputMode>,
    pub status: Option<String>,
    pub loading: bool,
    created: Rc<RefCell<Vec<String>>>,
    catalog_rx: Option<Receiver<CatalogUpdate>>,
}

impl App {
    pub fn new(
        variant: Variant,
        options: Vec<String>,
        initial: Vec<String>,
        settings: SelectSettings,
        config: &Config,
    ) -> Self {
        let router = PointerRouter::new();
        let created = Rc::new(RefCell::new(Vec::new()));

        let hook_log = Rc::clone(&created);
        let picker = Picker::new(
            variant,
            OptionCatalog::new(options),
            initial,
            settings,
            config.palette.columns,
        )
        .with_router(router.clone())
        .with_on_create(move |value| hook_log.borrow_mut().push(value.to_string()));

        Self {
            picker,
            router,
            layout_regions: LayoutRegions::new(),
            max_visible: config.picker.max_visible.max(1),
            should_quit: false,
            output_mode: None,
            status: None,
            loading: false,
            created,
            catalog_rx: None,
        }
    }

    /// Receive catalog lists from a background loader
    pub fn with_loader(mut self, rx: Receiver<CatalogUpdate>) -> Self {
        self.catalog_rx = Some(rx);
        self.loading = true;
        self
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the output mode (if set)
    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Values created this session, in creation order
    pub fn created(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    pub fn selection(&self) -> Selection {
        let selected = self.picker.selected();
        let created = self
            .created
            .borrow()
            .iter()
            .filter(|c| selected.iter().any(|s| eq_ignore_case(s, c)))
            .cloned()
            .collect();
        Selection { selected, created }
    }

    /// Apply a change returned by the picker
    pub fn accept(&mut self, change: Option<PickerChange>) {
        let Some(change) = change else {
            return;
        };
        if let Some(created) = change.created() {
            self.status = Some(format!("Created \"{}\"", created));
        } else {
            self.status = None;
        }
        self.picker.apply(&change);
        log::debug!("selection is now {:?}", self.picker.selected());
    }

    /// Swap in any catalog lists that arrived since the last frame
    pub fn poll_catalog(&mut self) {
        let Some(rx) = &self.catalog_rx else {
            return;
        };

        let mut latest = None;
        loop {
            match rx.try_recv() {
                Ok(update) => latest = Some(update),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.catalog_rx = None;
                    break;
                }
            }
        }

        match latest {
            Some(CatalogUpdate::Loaded(options)) => {
                log::info!("catalog replaced with {} options", options.len());
                self.loading = false;
                self.picker.replace_catalog(options);
            }
            Some(CatalogUpdate::Failed(message)) => {
                log::warn!("option source failed: {}", message);
                self.loading = false;
                self.status = Some(message);
            }
            None => {}
        }
    }

    /// Finish with the current selection unless a required value is missing
    pub fn finish(&mut self) {
        if self.picker.is_missing_required() {
            self.status = Some(REQUIRED_MESSAGE.to_string());
            return;
        }
        self.output_mode = Some(OutputMode::Finish);
        self.should_quit = true;
    }

    pub fn abort(&mut self) {
        self.output_mode = Some(OutputMode::Abort);
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
