use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::Result;

pub const BAR_WIDTH: usize = 40;

/// Single-line bar on stdout: `[████    ] 3/8`.
/// A hidden bar still counts, it just never draws.
pub fn strip_bar(total: u64, visible: bool) -> Result<ProgressBar> {
    let target = if visible {
        // Per-file work is slow next to the refresh limit, so every file redraws.
        ProgressDrawTarget::stdout_with_hz(u8::MAX)
    } else {
        ProgressDrawTarget::hidden()
    };

    let bar = ProgressBar::with_draw_target(Some(total), target);
    let template = format!("[{{bar:{BAR_WIDTH}}}] {{pos}}/{{len}}");
    bar.set_style(ProgressStyle::with_template(&template)?.progress_chars("█ "));
    Ok(bar)
}
