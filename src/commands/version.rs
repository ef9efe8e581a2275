//! `roadie version`: make sure the generated version stamp exists.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use roadie::stamp::{ensure_stamp, BumpLevel};

use crate::ui::views::version::{render_stamp_header, render_stamp_report};

pub fn cmd_version(
    project: Option<&Path>,
    bump: Option<BumpLevel>,
    fresh: bool,
    json: bool,
    verbose: u8,
    quiet: bool,
) -> Result<i32> {
    let ctx = super::prepare(project, json, verbose, quiet)?;
    let root = ctx.root;
    let ui = ctx.ui;

    if ui.chatty() {
        print!("{}", render_stamp_header(ui.color, ui.unicode));
    }

    let report = ensure_stamp(&root, &ctx.config.version, bump, fresh)?;

    if ui.json {
        println!(
            "{}",
            json!({
                "type": "stamp_written",
                "path": report.path.display().to_string(),
                "version": report.stamp.version.to_string(),
                "created": report.created,
            })
        );
    } else if ui.chatty() {
        print!("{}", render_stamp_report(&report, ui.color, ui.unicode));
    }

    Ok(0)
}
