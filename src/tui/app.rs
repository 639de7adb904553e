use crate::scoring::{Score, ScoreCalculator, ScoreKey};
use crate::tui::theme::ThemeColors;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    pub calculator: ScoreCalculator,
    /// One entry per checklist item, in catalog order
    pub rows: Vec<ScoreKey>,
    pub table_state: ratatui::widgets::TableState,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(calculator: ScoreCalculator, theme: ThemeColors) -> Self {
        let rows: Vec<ScoreKey> = calculator
            .catalog()
            .iter()
            .flat_map(|(id, domain)| (0..domain.item_count()).map(move |i| ScoreKey::new(id, i)))
            .collect();

        let mut table_state = ratatui::widgets::TableState::default();
        if !rows.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            calculator,
            rows,
            table_state,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            theme,
        }
    }

    pub fn next_row(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= self.rows.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) => self.rows.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Jump to the first item of the next domain (wraps around)
    pub fn next_domain(&mut self) {
        let Some(current) = self.selected_key() else {
            return;
        };
        let target = self
            .rows
            .iter()
            .position(|k| k.domain > current.domain)
            .unwrap_or(0);
        self.table_state.select(Some(target));
    }

    pub fn selected_key(&self) -> Option<ScoreKey> {
        self.table_state
            .selected()
            .and_then(|i| self.rows.get(i).copied())
    }

    /// Label of an item, e.g. "Motor Skills / Draws straight lines"
    pub fn item_label(&self, key: ScoreKey) -> String {
        self.calculator
            .catalog()
            .get(key.domain)
            .map(|d| {
                let item = d.items.get(key.item).map(String::as_str).unwrap_or("?");
                format!("{} / {}", d.name, item)
            })
            .unwrap_or_default()
    }

    /// Score the selected item
    pub fn set_selected(&mut self, value: u8) {
        let Some(key) = self.selected_key() else {
            return;
        };
        match self.calculator.set_score(key, value as i64) {
            Ok(_) => debug!(domain = key.domain.0, item = key.item, value, "score set"),
            Err(e) => self.show_flash(format!("Error: {}", e)),
        }
    }

    /// Raise or lower the selected item's score by one.
    /// Raising an unscored item starts at 0.
    pub fn step_selected(&mut self, up: bool) {
        let Some(key) = self.selected_key() else {
            return;
        };
        let next = match (self.calculator.score(key), up) {
            (Some(score), true) => score.increment(),
            (Some(score), false) => score.decrement(),
            (None, true) => Score::MIN,
            (None, false) => return,
        };
        self.set_selected(next.value());
    }

    /// Remove the selected item's score
    pub fn clear_selected(&mut self) {
        let Some(key) = self.selected_key() else {
            return;
        };
        if let Err(e) = self.calculator.clear_score(key) {
            self.show_flash(format!("Error: {}", e));
        }
    }

    /// "Calculate Results"
    pub fn calculate(&mut self) {
        let unscored = self.calculator.item_count() - self.calculator.scored_count();
        let result = self.calculator.calculate();
        info!(
            total = result.total_score,
            max = result.max_score,
            "calculated results"
        );
        let percent = result.overall_percent();
        if unscored > 0 {
            self.show_flash(format!(
                "Calculated: {}% ({} unscored items counted as 0)",
                percent, unscored
            ));
        } else {
            self.show_flash(format!("Calculated: {}%", percent));
        }
    }

    /// "Reset All"
    pub fn reset(&mut self) {
        self.calculator.reset();
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
        info!("reset all scores");
        self.show_flash("Reset all scores".to_string());
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}
