use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Number of terminal columns `s` occupies.
///
/// CJK and emoji count as two columns, combining marks as zero.
///
/// ```
/// use blogdeck::util::display_width;
///
/// assert_eq!(display_width("Hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Byte index of the longest prefix of `s` that fits in `max_width` columns.
fn fit_prefix(s: &str, max_width: usize) -> usize {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > max_width {
            return idx;
        }
        used += w;
    }
    s.len()
}

/// Truncate `s` to at most `max_width` columns, marking the cut with "...".
///
/// Strings that already fit are returned borrowed. Widths of three columns
/// or fewer have no room for the ellipsis, so the text is simply clipped.
///
/// ```
/// use blogdeck::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Short", 10), "Short");
/// assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
/// assert_eq!(truncate_to_width("Test", 2), "Te");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Borrowed(&s[..fit_prefix(s, max_width)]);
    }
    let cut = fit_prefix(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
///
/// Words wider than a line are clipped. When the text does not fit in
/// `max_lines`, the last line ends with "...".
pub fn wrap_to_width(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflowed = false;

    for word in s.split_whitespace() {
        let word = truncate_to_width(word, width);
        let needed = if current.is_empty() {
            display_width(&word)
        } else {
            display_width(&current) + 1 + display_width(&word)
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
            continue;
        }

        if lines.len() + 1 == max_lines {
            overflowed = true;
            break;
        }
        lines.push(std::mem::take(&mut current));
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if overflowed {
        if let Some(last) = lines.last_mut() {
            let room = width.saturating_sub(ELLIPSIS_WIDTH);
            let keep = fit_prefix(last, room);
            last.truncate(keep);
            last.push_str(ELLIPSIS);
        }
    }

    lines
}

fn is_stripped_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

/// Remove terminal control characters and ANSI escape sequences.
///
/// Catalog text comes from user-supplied files and is drawn straight into
/// the terminal. Tab, newline and carriage return survive; CSI (`ESC [`)
/// and OSC (`ESC ]`, ended by BEL or `ESC \`) sequences are dropped whole.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_stripped_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            if !is_stripped_control(c) {
                out.push(c);
            }
            continue;
        }

        match chars.peek() {
            Some('[') => {
                chars.next();
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    Cow::Owned(out)
}
