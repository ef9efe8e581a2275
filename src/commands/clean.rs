//! `roadie clean`: sweep generated artifacts out of the project tree.
//!
//! The sweep never fails the command. Paths that cannot be removed are
//! reported and skipped, a second run over a clean tree finds nothing,
//! and the exit code is 0 either way. Only setup errors (bad config, an
//! unreadable root) exit non-zero.

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;
use serde_json::json;

use roadie::sweep::{build_plan, execute_plan, ArtifactSet, SweepPlan};

use crate::ui::context::UiContext;
use crate::ui::views::clean::{
    render_sweep_detail, render_sweep_empty, render_sweep_header, render_sweep_preview,
    render_sweep_summary,
};

pub fn cmd_clean(
    project: Option<&Path>,
    dry_run: bool,
    yes: bool,
    json: bool,
    verbose: u8,
    quiet: bool,
) -> Result<i32> {
    let ctx = super::prepare(project, json, verbose, quiet)?;
    let root = ctx.root;
    let ui = ctx.ui;

    let set = ArtifactSet::for_config(&root, &ctx.config.clean, &ctx.config.version.file)?;
    let plan = build_plan(&root, &set)?;

    if ui.json {
        println!(
            "{}",
            json!({
                "type": "sweep_start",
                "root": root.display().to_string(),
                "patterns": set.patterns().len(),
                "dry_run": dry_run,
            })
        );
    } else if ui.chatty() {
        print!("{}", render_sweep_header(&root, dry_run, ui.color, ui.unicode));
    }

    if plan.is_empty() {
        if ui.json {
            println!(
                "{}",
                json!({"type": "sweep_complete", "removed": 0, "failed": 0})
            );
        } else if ui.chatty() {
            print!("{}", render_sweep_empty(ui.color, ui.unicode));
        }
        return Ok(0);
    }

    if dry_run {
        emit_dry_run(&ui, &plan);
        return Ok(0);
    }

    if !yes && !confirm_sweep(&ui, &plan)? {
        println!("Aborted.");
        return Ok(0);
    }

    let outcome = execute_plan(&root, &plan);

    if ui.json {
        for path in &outcome.removed_dirs {
            println!(
                "{}",
                json!({"type": "removed", "path": path.display().to_string(), "kind": "dir"})
            );
        }
        for path in &outcome.removed_files {
            println!(
                "{}",
                json!({"type": "removed", "path": path.display().to_string(), "kind": "file"})
            );
        }
        for failure in &outcome.failures {
            println!(
                "{}",
                json!({
                    "type": "error",
                    "path": failure.path.display().to_string(),
                    "message": failure.message,
                })
            );
        }
        println!(
            "{}",
            json!({
                "type": "sweep_complete",
                "removed": outcome.removed_count(),
                "failed": outcome.failures.len(),
            })
        );
    } else if ui.chatty() {
        if ui.verbose > 0 {
            print!("{}", render_sweep_detail(&outcome, ui.color, ui.unicode));
        }
        print!(
            "{}",
            render_sweep_summary(
                outcome.removed_count(),
                &outcome.failures,
                false,
                ui.color,
                ui.unicode
            )
        );
    } else {
        for failure in &outcome.failures {
            eprintln!(
                "warning: could not remove {}: {}",
                failure.path.display(),
                failure.message
            );
        }
    }

    Ok(0)
}

fn emit_dry_run(ui: &UiContext, plan: &SweepPlan) {
    if ui.json {
        for path in &plan.dirs {
            println!(
                "{}",
                json!({"type": "would_remove", "path": path.display().to_string(), "kind": "dir"})
            );
        }
        for path in &plan.files {
            println!(
                "{}",
                json!({"type": "would_remove", "path": path.display().to_string(), "kind": "file"})
            );
        }
        println!(
            "{}",
            json!({"type": "sweep_complete", "removed": 0, "failed": 0, "planned": plan.len()})
        );
    } else if ui.chatty() {
        println!();
        print!("{}", render_sweep_preview(plan, ui.color, ui.unicode));
        println!();
        print!(
            "{}",
            render_sweep_summary(plan.len(), &[], true, ui.color, ui.unicode)
        );
    }
}

/// Ask before removing anything, but only when a human can answer: piped
/// stdin, `--json`, and `--quiet` all proceed unprompted so scripts and CI
/// never hang on a question nobody will see.
fn confirm_sweep(ui: &UiContext, plan: &SweepPlan) -> Result<bool> {
    if ui.json || ui.quiet || !std::io::stdin().is_terminal() {
        return Ok(true);
    }

    println!();
    print!("{}", render_sweep_preview(plan, ui.color, ui.unicode));
    println!();

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Remove {} artifact(s)?", plan.len()))
        .default(true)
        .interact()?;
    Ok(confirmed)
}
