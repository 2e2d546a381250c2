//! Every conversion in a format pattern funnels its text through the same two
//! budgeting functions, so their sign conventions must stay uniform: a positive
//! budget keeps the head of a string, a negative budget keeps the tail.
//!
//! Both functions are total — any input combination produces some deterministic
//! string, and extreme budgets degrade to the identity instead of panicking.

/// Shapes a string to a fixed width: truncate first, then pad.
///
/// `length` is the truncation budget — positive keeps the first `length` chars,
/// negative keeps the last `|length|`, zero skips truncation. `count` is the
/// minimum width — positive right-justifies with leading spaces, negative
/// left-justifies with trailing spaces, zero skips padding.
#[must_use]
pub fn shorten(input: &str, count: i32, length: i32) -> String {
    let chars: Vec<char> = input.chars().collect();

    let keep = length.unsigned_abs() as usize;
    let truncated: String = if length != 0 && keep < chars.len() {
        if length > 0 {
            chars[..keep].iter().collect()
        } else {
            chars[chars.len() - keep..].iter().collect()
        }
    } else {
        input.to_string()
    };

    let width = count.unsigned_abs() as usize;
    let len = truncated.chars().count();
    if count == 0 || width <= len {
        return truncated;
    }

    let padding = " ".repeat(width - len);
    if count > 0 {
        format!("{padding}{truncated}")
    } else {
        format!("{truncated}{padding}")
    }
}

/// Abbreviates a dotted qualified name in two independent steps: segment
/// collapsing (`count`), then character-budget truncation (`max_length`).
///
/// `count > 0` keeps the first `count` dot-delimited segments; `count < 0` drops
/// them instead, falling back to the final segment when the name has too few
/// segments to collapse. `max_length` bounds the rendered length by replacing
/// whole dropped segments with a single `*` — at the tail for a positive budget,
/// at the head for a negative one. The `*` never stands for a partial segment.
///
/// Only segments are ever collapsed, so a name without dots passes through the
/// budgeting step unchanged.
#[must_use]
pub fn shorten_class_name(name: &str, count: i32, max_length: i32) -> String {
    truncate_segments(&collapse_segments(name, count), max_length)
}

/// Keeps (positive) or strips (negative) a bounded number of leading segments.
fn collapse_segments(name: &str, count: i32) -> String {
    if count == 0 {
        return name.to_string();
    }

    if count > 0 {
        let mut out = String::new();
        let mut points = 1;
        let mut index = 0;
        loop {
            match name[index..].find('.') {
                None => {
                    out.push_str(&name[index..]);
                    break;
                }
                Some(rel) => {
                    let dot = index + rel;
                    if points == count {
                        // the count-th segment is kept without its trailing dot
                        out.push_str(&name[index..dot]);
                        break;
                    }
                    out.push_str(&name[index..=dot]);
                    index = dot + 1;
                    points += 1;
                }
            }
        }
        return out;
    }

    // saturating_neg keeps i32::MIN total: it collapses to "keep everything",
    // which falls through to the final-segment fallback below
    let kept = collapse_segments(name, count.saturating_neg());
    if kept == name {
        // not enough segments to collapse — keep only the final one
        name.rfind('.')
            .map_or_else(|| name.to_string(), |dot| name[dot + 1..].to_string())
    } else {
        name.strip_prefix(&format!("{kept}."))
            .map_or_else(|| name.to_string(), ToString::to_string)
    }
}

/// Replaces segments that overflow the character budget with a single `*`.
fn truncate_segments(name: &str, max_length: i32) -> String {
    if max_length == 0 {
        return name.to_string();
    }

    let chars: Vec<char> = name.chars().collect();
    let budget = max_length.unsigned_abs() as usize;
    if budget >= chars.len() {
        return name.to_string();
    }

    if max_length > 0 {
        // walk from the start; the first segment is always kept
        let mut out = String::new();
        let mut index = 0;
        loop {
            match chars[index..].iter().position(|&c| c == '.') {
                None => {
                    if out.is_empty() {
                        out.extend(&chars[index..]);
                    } else {
                        out.push('*');
                    }
                    break;
                }
                Some(rel) => {
                    let dot = index + rel;
                    if !out.is_empty() && dot + 1 > budget {
                        out.push('*');
                        break;
                    }
                    out.extend(&chars[index..=dot]);
                    index = dot + 1;
                }
            }
        }
        return out;
    }

    // walk from the end; the last segment is always kept and the marker is
    // anchored at the front
    let mut out = String::new();
    let mut out_len = 0;
    let mut index = chars.len() - 1;
    while index > 0 {
        match chars[..=index].iter().rposition(|&c| c == '.') {
            None => {
                if !out.is_empty() && out_len + index + 1 > budget {
                    out.insert(0, '*');
                } else {
                    let head: String = chars[..=index].iter().collect();
                    out.insert_str(0, &head);
                }
                break;
            }
            Some(dot) => {
                let segment_len = index - dot + 1;
                if !out.is_empty() && out_len + segment_len + 1 > budget {
                    out.insert(0, '*');
                    break;
                }
                let segment: String = chars[dot..=index].iter().collect();
                out.insert_str(0, &segment);
                out_len += segment_len;
                if dot == 0 {
                    break;
                }
                index = dot - 1;
            }
        }
    }
    out
}
