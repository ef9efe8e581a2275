//! Version stamp views

use roadie::stamp::StampReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_stamp_header(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Stamp.colored(supports_color, supports_unicode),
        ColoredText::info("Roadie Version")
            .bold()
            .render(supports_color)
    )
}

pub fn render_stamp_report(
    report: &StampReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!("Stamp: {}\n", report.path.display());
    let line = if report.created {
        format!("Stamped {} (from git describe)", report.stamp.version)
    } else {
        format!("Version {} (already stamped)", report.stamp.version)
    };
    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(line).render(supports_color)
    ));
    out
}
