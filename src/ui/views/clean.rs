//! Sweep views

use std::path::Path;

use roadie::sweep::{SweepFailure, SweepOutcome, SweepPlan};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_sweep_header(
    root: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let action = if dry_run {
        "Roadie Clean (Dry Run)"
    } else {
        "Roadie Clean"
    };
    format!(
        "{} {}\nRoot: {}\n",
        Icon::Clean.colored(supports_color, supports_unicode),
        ColoredText::info(action).bold().render(supports_color),
        root.display()
    )
}

/// List what a sweep would remove. Directories carry a trailing slash so
/// the two removal strategies read apart.
pub fn render_sweep_preview(
    plan: &SweepPlan,
    supports_color: bool,
    _supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(
        &ColoredText::warning("Artifacts:")
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    for dir in &plan.dirs {
        out.push_str(&format!("  - {}/\n", dir.display()));
    }
    for file in &plan.files {
        out.push_str(&format!("  - {}\n", file.display()));
    }
    out
}

/// Per-path removal detail for verbose runs, same shape as the preview.
pub fn render_sweep_detail(
    outcome: &SweepOutcome,
    _supports_color: bool,
    _supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for dir in &outcome.removed_dirs {
        out.push_str(&format!("  - {}/\n", dir.display()));
    }
    for file in &outcome.removed_files {
        out.push_str(&format!("  - {}\n", file.display()));
    }
    out
}

pub fn render_sweep_empty(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Nothing to remove\n",
        Icon::Success.colored(supports_color, supports_unicode)
    )
}

pub fn render_sweep_summary(
    removed: usize,
    failures: &[SweepFailure],
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    let line = if dry_run {
        format!("{removed} {} would be removed", artifacts(removed))
    } else {
        format!("Removed {removed} {}", artifacts(removed))
    };
    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(line).render(supports_color)
    ));

    if !failures.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!(
                "{} {} could not be removed:",
                failures.len(),
                paths(failures.len())
            ))
            .render(supports_color)
        ));
        for failure in failures {
            out.push_str(&format!(
                "  - {}: {}\n",
                failure.path.display(),
                failure.message
            ));
        }
    }

    out
}

fn artifacts(n: usize) -> &'static str {
    if n == 1 {
        "artifact"
    } else {
        "artifacts"
    }
}

fn paths(n: usize) -> &'static str {
    if n == 1 {
        "path"
    } else {
        "paths"
    }
}
