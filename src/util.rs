// src/util.rs — Terminal text fitting for tables and status lines

use std::borrow::Cow;

use ratatui::style::Style;
use ratatui::text::Span;

const ELLIPSIS: char = '…';

/// Columns `s` occupies in a terminal (wide CJK glyphs count as two).
pub fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Fit `s` into `max_width` terminal columns. A cut string ends in `…`,
/// which takes one of the columns. Never splits a grapheme.
pub fn fit_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    let span = Span::raw(s);
    for grapheme in span.styled_graphemes(Style::default()) {
        let w = display_width(grapheme.symbol);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(grapheme.symbol);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// `fit_width`, then right-pad with spaces to exactly `width` columns.
pub fn pad_width(s: &str, width: usize) -> String {
    let fitted = fit_width(s, width);
    let fill = width.saturating_sub(display_width(&fitted));
    format!("{}{}", fitted, " ".repeat(fill))
}

/// First `n` characters of an identifier, for compact listings.
pub fn short_id(id: &str, n: usize) -> &str {
    match id.char_indices().nth(n) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
