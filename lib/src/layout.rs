//! Compositing of display lines into a logo template.
//!
//! The compositor pairs each logo row with one display row: display
//! lines are centered vertically inside the logo when they fit, and the
//! logo gains a blank gutter below itself when they do not. Overlong
//! lines are cut to the terminal on a visible-column budget so embedded
//! color sequences survive intact.

use crate::ansi;
use crate::logo::{self, CLEAR, Logo};

/// Columns reserved for the `...` continuation marker.
const ELLIPSIS_WIDTH: usize = 3;

/// Pads and centers `lines` against a logo of `height` rows.
///
/// With `N <= height` lines the result has exactly `height` rows:
/// `floor((height - N) / 2)` blank rows, the lines in order, then the
/// remaining blank rows. With more lines than rows no padding is added
/// at all and the input is returned unchanged.
pub fn frame(lines: Vec<String>, height: usize) -> Vec<String> {
    if lines.len() > height {
        return lines;
    }

    let top = (height - lines.len()) / 2;
    let mut framed = vec![String::new(); top];
    framed.extend(lines);
    framed.resize(height, String::new());
    framed
}

/// Composes the final printable block.
///
/// Steps, in order: resolve the palette (an accent override repeats one
/// color across every slot), truncate display lines that overflow
/// `terminal_width` minus the logo column, center them against the logo
/// height, substitute palette placeholders, and join the rows with a
/// single trailing reset so no color state leaks past the block.
///
/// `terminal_width == None` means the width is unknown (not a real
/// terminal) and truncation is skipped entirely.
pub fn compose(
    logo: &Logo,
    display_lines: &[String],
    terminal_width: Option<usize>,
    accent: Option<&str>,
) -> String {
    let palette = logo.resolve_palette(accent);
    let gutter = logo.width();

    let lines: Vec<String> = display_lines
        .iter()
        .map(|line| fit_line(line, terminal_width, gutter))
        .collect();
    let rows = frame(lines, logo.height());

    let mut block = String::new();
    for (i, text) in rows.iter().enumerate() {
        if i > 0 {
            block.push('\n');
        }
        match logo.lines.get(i) {
            Some(template) => block.push_str(&logo::render_line(template, &palette)),
            // Text overflowed the logo; keep the column aligned.
            None => block.push_str(&" ".repeat(gutter)),
        }
        block.push_str(text);
    }
    block.push_str(CLEAR);
    block
}

/// Cuts one display line to the text column budget.
///
/// A line that fits is passed through untouched. A cut line keeps as
/// many visible characters as fit alongside the `...` marker, and gains
/// a forced reset when the retained prefix left a color sequence open.
fn fit_line(line: &str, terminal_width: Option<usize>, gutter: usize) -> String {
    let Some(width) = terminal_width else {
        return line.to_string();
    };

    let budget = width.saturating_sub(gutter);
    if ansi::visible_width(line) <= budget {
        return line.to_string();
    }

    let truncated = ansi::truncate_to_width(line, budget.saturating_sub(ELLIPSIS_WIDTH));
    let mut out = truncated.kept;
    out.push_str("...");
    if truncated.had_open_color {
        out.push_str(CLEAR);
    }
    out
}
