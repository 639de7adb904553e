use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{AssessmentResult, DomainCatalog};

/// Narrowest terminal that still gets percent bars
const MIN_WIDTH_FOR_BARS: usize = 60;
const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width for the current terminal, or None when bars would not fit
pub fn bar_width_for_terminal() -> Option<usize> {
    match get_terminal_width() {
        Some(w) if w >= MIN_WIDTH_FOR_BARS => Some(BAR_WIDTH),
        _ => None,
    }
}

/// Format the assessment summary:
///
/// ```text
/// Assessment Summary
/// Total Score: 6 / 60
/// Progress: 10%
///
/// Receptive Language: 0 points (0%)
/// ...
/// ```
///
/// When `bar_width` is given each domain line ends with a percent bar.
pub fn format_summary(result: &AssessmentResult, use_colors: bool, bar_width: Option<usize>) -> String {
    let mut lines = Vec::with_capacity(result.domain_results.len() + 4);

    let total = format!("{} / {}", result.total_score, result.max_score);
    let progress = format!("{}%", result.overall_percent());
    if use_colors {
        lines.push("Assessment Summary".bold().green().to_string());
        lines.push(format!("Total Score: {}", total.bold()));
        lines.push(format!("Progress: {}", progress.bold()));
    } else {
        lines.push("Assessment Summary".to_string());
        lines.push(format!("Total Score: {}", total));
        lines.push(format!("Progress: {}", progress));
    }
    lines.push(String::new());

    let name_width = result
        .domain_results
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(0)
        + 1; // trailing colon

    for domain in &result.domain_results {
        let label = format!("{}:", domain.name);
        let label = match bar_width {
            Some(_) => format!("{:<width$}", label, width = name_width),
            None => label,
        };
        let label = if use_colors {
            label.bold().to_string()
        } else {
            label
        };
        let detail = format!("{} points ({}%)", domain.score, domain.percent);

        let line = match bar_width {
            Some(width) => format!(
                "{} {:<18} {}",
                label,
                detail,
                percent_bar(domain.percent, width, use_colors)
            ),
            None => format!("{} {}", label, detail),
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// Format the result as tab-separated values for scripting
/// Columns: domain, score, max, percent; final row is the overall total
pub fn format_tsv(result: &AssessmentResult) -> String {
    result
        .domain_results
        .iter()
        .map(|d| format!("{}\t{}\t{}\t{}", d.name, d.score, d.max_score, d.percent))
        .chain(std::iter::once(format!(
            "Total\t{}\t{}\t{}",
            result.total_score,
            result.max_score,
            result.overall_percent()
        )))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the result as pretty-printed JSON
pub fn format_json(result: &AssessmentResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Numbered list of domains and their items, as used by `--set D:I=V`
pub fn format_domain_list(catalog: &DomainCatalog, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for (id, domain) in catalog.iter() {
        let heading = format!("{:>2}. {}", id.0 + 1, domain.name);
        if use_colors {
            lines.push(heading.bold().cyan().to_string());
        } else {
            lines.push(heading);
        }
        for (i, item) in domain.items.iter().enumerate() {
            let index = format!("{:>6}.", i + 1);
            if use_colors {
                lines.push(format!("{} {}", index.dimmed(), item));
            } else {
                lines.push(format!("{} {}", index, item));
            }
        }
    }
    lines.join("\n")
}

/// Render a percent as a bar of `width` cells
fn percent_bar(percent: u32, width: usize, use_colors: bool) -> String {
    let filled = ((percent.min(100) as usize * width) + 50) / 100;
    let empty = width.saturating_sub(filled);
    let bar = "█".repeat(filled);
    let rest = "░".repeat(empty);

    if !use_colors {
        return format!("{}{}", bar, rest);
    }
    let colored = if percent >= 70 {
        bar.green().to_string()
    } else if percent >= 40 {
        bar.yellow().to_string()
    } else {
        bar.red().to_string()
    };
    format!("{}{}", colored, rest.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreCalculator;

    fn sample_result() -> AssessmentResult {
        let mut calc = ScoreCalculator::default();
        calc.set_score_by_name("Motor Skills", 0, 2).unwrap();
        calc.set_score_by_name("Motor Skills", 1, 3).unwrap();
        calc.set_score_by_name("Motor Skills", 2, 1).unwrap();
        calc.calculate().clone()
    }

    #[test]
    fn test_format_summary_plain() {
        let output = format_summary(&sample_result(), false, None);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Assessment Summary");
        assert_eq!(lines[1], "Total Score: 6 / 60");
        assert_eq!(lines[2], "Progress: 10%");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Receptive Language: 0 points (0%)");
        assert_eq!(lines[6], "Motor Skills: 6 points (50%)");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_format_summary_with_bars() {
        let output = format_summary(&sample_result(), false, Some(10));
        let motor = output
            .lines()
            .find(|l| l.starts_with("Motor Skills:"))
            .unwrap();
        assert!(motor.contains("6 points (50%)"));
        assert!(motor.ends_with("█████░░░░░"));

        let receptive = output
            .lines()
            .find(|l| l.starts_with("Receptive Language:"))
            .unwrap();
        assert!(receptive.ends_with("░░░░░░░░░░"));
    }

    #[test]
    fn test_percent_bar_bounds() {
        assert_eq!(percent_bar(0, 4, false), "░░░░");
        assert_eq!(percent_bar(100, 4, false), "████");
        assert_eq!(percent_bar(50, 4, false), "██░░");
    }

    #[test]
    fn test_format_tsv() {
        let output = format_tsv(&sample_result());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "Motor Skills\t6\t12\t50");
        assert_eq!(lines[5], "Total\t6\t60\t10");
    }

    #[test]
    fn test_format_json_fields() {
        let json = format_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_score"], 6);
        assert_eq!(value["max_score"], 60);
        assert_eq!(value["domain_results"][2]["name"], "Motor Skills");
        assert_eq!(value["domain_results"][2]["percent"], 50);
        assert!(value["calculated_at"].is_string());
    }

    #[test]
    fn test_format_domain_list() {
        let output = format_domain_list(&DomainCatalog::builtin(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], " 1. Receptive Language");
        assert_eq!(lines[1], "     1. Follows 1-step instructions");
        assert_eq!(lines[16], " 5. Daily Living Skills");
    }
}
