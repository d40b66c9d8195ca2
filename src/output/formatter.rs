use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::password::StrengthReport;
use crate::scoring::{CategoryScore, MetricScore, ScoreReport, Tier, MAX_TOTAL};

const BAR_WIDTH: usize = 40;
const PASSWORD_BAR_WIDTH: usize = 50;
const RULE: &str = "═══════════════════════════════════════════════════════════════";

const BANNER: &str = r"   ____ _ _   _   _       _       ____  _                         _   _
  / ___(_) |_| | | |_   _| |__   / ___|| |_ _ __ ___ _ __   __ _| |_| |__
 | |  _| | __| |_| | | | | '_ \  \___ \| __| '__/ _ \ '_ \ / _` | __| '_ \
 | |_| | | |_|  _  | |_| | |_) |  ___) | |_| | |  __/ | | | (_| | |_| | | |
  \____|_|\__|_| |_|\__,_|_.__/  |____/ \__|_|  \___|_| |_|\__, |\__|_| |_|
                                                           |___/";

/// Decide whether to colour output: stdout must be a TTY, `NO_COLOR` unset,
/// and colours not disabled on the command line
pub fn should_use_colors(disabled: bool) -> bool {
    !disabled && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that fits next to the percentage text on narrow terminals
fn bar_width(preferred: usize) -> usize {
    match get_terminal_width() {
        Some(width) if width < preferred + 25 => width.saturating_sub(25).max(10),
        _ => preferred,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Strong,
    Fair,
    Weak,
    Poor,
}

impl Level {
    /// Band a percentage: >=80 strong, >=60 fair, >=40 weak, else poor
    fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Level::Strong
        } else if percentage >= 60.0 {
            Level::Fair
        } else if percentage >= 40.0 {
            Level::Weak
        } else {
            Level::Poor
        }
    }

    fn paint(&self, text: &str, use_colors: bool) -> String {
        if !use_colors {
            return text.to_string();
        }
        match self {
            Level::Strong => text.green().to_string(),
            Level::Fair => text.cyan().to_string(),
            Level::Weak => text.yellow().to_string(),
            Level::Poor => text.red().to_string(),
        }
    }
}

fn percentage(score: f64, max: f64) -> f64 {
    if max > 0.0 {
        (score / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Render `filled` of `width` cells
fn bar(filled: usize, width: usize, full: char, empty: char) -> String {
    let filled = filled.min(width);
    std::iter::repeat(full)
        .take(filled)
        .chain(std::iter::repeat(empty).take(width - filled))
        .collect()
}

/// Trim a trailing ".0" so whole points print as integers
pub fn format_points(points: f64) -> String {
    let rounded = (points * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// A titled strength meter:
/// ```text
/// PROFILE COMPLETENESS
/// [████████████████████████████░░░░░░░░░░░░] 70.0% (70/100)
/// ```
pub fn format_meter(title: &str, score: f64, max: f64, use_colors: bool) -> String {
    let pct = percentage(score, max);
    let width = bar_width(BAR_WIDTH);
    let filled = (width as f64 * pct / 100.0) as usize;
    let line = format!(
        "[{}] {:.1}% ({}/{})",
        bar(filled, width, '█', '░'),
        pct,
        format_points(score),
        format_points(max)
    );

    let title = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    format!("{}\n{}", title, Level::from_percentage(pct).paint(&line, use_colors))
}

/// Status glyph for a sub-metric: full marks, partial, weak, nothing
fn metric_glyph(metric: &MetricScore) -> &'static str {
    let ratio = metric.ratio();
    if ratio >= 1.0 {
        "✓"
    } else if ratio >= 0.6 {
        "○"
    } else if ratio > 0.0 {
        "△"
    } else {
        "✗"
    }
}

fn metric_title(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One line per sub-metric: glyph, name, points and what was observed
pub fn format_metric(metric: &MetricScore, use_colors: bool) -> String {
    let line = format!(
        "{} {} {}/{}: {}",
        metric_glyph(metric),
        metric_title(metric.name),
        format_points(metric.points),
        format_points(metric.max),
        metric.detail
    );
    Level::from_percentage(metric.ratio() * 100.0).paint(&line, use_colors)
}

fn format_category(category: &CategoryScore, use_colors: bool) -> String {
    let mut lines = vec![format_meter(
        category.category.title(),
        category.subtotal,
        category.max(),
        use_colors,
    )];
    lines.extend(
        category
            .metrics
            .iter()
            .map(|m| format!("    {}", format_metric(m, use_colors))),
    );
    lines.join("\n")
}

fn tier_level(tier: Tier) -> Level {
    match tier {
        Tier::Excellent => Level::Strong,
        Tier::Good => Level::Fair,
        Tier::Developing => Level::Weak,
        Tier::NeedsWork => Level::Poor,
    }
}

/// Full text report for one account
pub fn format_report(username: &str, report: &ScoreReport, use_colors: bool) -> String {
    let header = |text: &str| {
        if use_colors {
            text.magenta().bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut sections = vec![
        header(BANNER),
        header(RULE),
        header(&format!("GITHUB STRENGTH ANALYSIS: {}", username)),
        header(RULE),
        format_meter("OVERALL GITHUB STRENGTH", report.total, MAX_TOTAL, use_colors),
    ];

    let tier = format!("Rating: {}", report.tier.label());
    sections.push(tier_level(report.tier).paint(&tier, use_colors));

    for category in report.categories() {
        sections.push(format_category(category, use_colors));
    }

    let mut advice = vec![header("RECOMMENDATIONS:")];
    advice.extend(
        report
            .recommendations()
            .into_iter()
            .map(|hint| format!("    • {}", Level::Weak.paint(hint, use_colors))),
    );
    advice.push(format!(
        "    {}",
        tier_level(report.tier).paint(report.tier.verdict(), use_colors)
    ));
    sections.push(advice.join("\n"));
    sections.push(header(RULE));

    sections.join("\n\n")
}

/// Pretty-printed JSON for scripting
pub fn format_json(username: &str, report: &ScoreReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "username": username,
        "report": report,
    }))
}

/// Password strength meter, filled in proportion to the score
pub fn format_password_meter(score: u32, use_colors: bool) -> String {
    let width = bar_width(PASSWORD_BAR_WIDTH);
    let filled = (score.min(100) as usize * width) / 100;
    let line = format!("[{}] {}%", bar(filled, width, '#', '.'), score.min(100));
    Level::from_percentage(score as f64).paint(&line, use_colors)
}

/// A numbered password followed by its strength breakdown
pub fn format_password(index: usize, password: &str, strength: &StrengthReport, use_colors: bool) -> String {
    let title = format!("Password #{}:", index);
    let mut lines = vec![
        if use_colors {
            title.bold().to_string()
        } else {
            title
        },
        format!("  {}", password),
        format_password_meter(strength.score, use_colors),
    ];
    lines.extend(strength.details.iter().map(|d| format!("  - {}", d)));
    lines.join("\n")
}

/// Strength breakdown for a password typed by the user (never echoed)
pub fn format_strength(strength: &StrengthReport, use_colors: bool) -> String {
    let mut lines = vec![format_password_meter(strength.score, use_colors)];
    lines.extend(strength.details.iter().map(|d| format!("  - {}", d)));
    lines.join("\n")
}
