//! Centralized theme module for TUI colors and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;

/// Background luma above which the terminal is treated as light
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score-based colors (traffic light pattern)
    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,
    pub bar_empty: Color,
    pub unscored: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub index_color: Color,
    pub domain_color: Color,
    pub header_style: Style,
    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup and panel colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub stale_color: Color,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            score_high: Color::Green,
            score_mid: Color::Yellow,
            score_low: Color::Red,
            bar_empty: Color::DarkGray,
            unscored: Color::DarkGray,
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            domain_color: Color::Cyan,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            stale_color: Color::Yellow,
        }
    }

    /// Light theme palette, darker foregrounds on pale backgrounds
    pub fn light() -> Self {
        Self {
            score_high: Color::Rgb(0, 128, 0),
            score_mid: Color::Rgb(170, 110, 0),
            score_low: Color::Rgb(190, 0, 0),
            bar_empty: Color::Indexed(250),
            unscored: Color::Indexed(244),
            row_alt_bg: Color::Indexed(255),
            index_color: Color::Indexed(244),
            domain_color: Color::Blue,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(190, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            stale_color: Color::Rgb(170, 110, 0),
        }
    }

    /// Returns the color for a percentage of the maximum score
    pub fn percent_color(&self, percent: u32) -> Color {
        if percent >= 70 {
            self.score_high
        } else if percent >= 40 {
            self.score_mid
        } else {
            self.score_low
        }
    }
}

/// Pick the palette for the configured mode. `Auto` asks the terminal for its
/// background luminance and falls back to dark when it cannot tell.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => ThemeColors::light(),
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                tracing::debug!("terminal background detection failed: {}", e);
                ThemeColors::dark()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_color_thresholds() {
        let theme = ThemeColors::dark();
        assert_eq!(theme.percent_color(100), Color::Green);
        assert_eq!(theme.percent_color(70), Color::Green);
        assert_eq!(theme.percent_color(69), Color::Yellow);
        assert_eq!(theme.percent_color(40), Color::Yellow);
        assert_eq!(theme.percent_color(39), Color::Red);
        assert_eq!(theme.percent_color(0), Color::Red);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(resolve_theme(ThemeMode::Light).title_color, Color::Blue);
        assert_eq!(resolve_theme(ThemeMode::Dark).title_color, Color::Cyan);
    }
}
