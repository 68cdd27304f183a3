//! Splitting raw markdown into header and body

const DELIMITER: &str = "---";
const LINE_ENDINGS: &[char] = &['\r', '\n'];

/// Split `content` into `(header, body)`.
///
/// The header must open on the very first line with a line containing only
/// `---` and close on the next such line. Returns `None` when either
/// delimiter is missing; callers then treat the whole text as body.
pub(crate) fn split_header(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end_matches(LINE_ENDINGS) != DELIMITER {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end_matches(LINE_ENDINGS) == DELIMITER {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Some((header, body.trim_start_matches(LINE_ENDINGS)));
        }
        offset += line.len();
    }

    None
}

/// Set `key: value` in the header of `content`, leaving every other line
/// untouched. An existing line for `key` is replaced in place, otherwise
/// the line is added just before the closing delimiter. Returns `None`
/// when the content has no header block.
pub(crate) fn set_header_value(content: &str, key: &str, value: &str) -> Option<String> {
    let (header, _) = split_header(content)?;
    // `header` is a subslice of `content`.
    let header_start = header.as_ptr() as usize - content.as_ptr() as usize;
    let header_end = header_start + header.len();

    let line = format!("{}: {}", key, value);
    let mut replaced = false;
    let mut new_header = String::with_capacity(header.len() + line.len() + 1);
    for raw in header.split_inclusive('\n') {
        let is_key = raw
            .split_once(':')
            .is_some_and(|(k, _)| k.trim() == key && !k.starts_with(char::is_whitespace));
        if is_key && !replaced {
            new_header.push_str(&line);
            new_header.push_str(if raw.ends_with("\r\n") { "\r\n" } else { "\n" });
            replaced = true;
        } else {
            new_header.push_str(raw);
        }
    }
    if !replaced {
        if !new_header.is_empty() && !new_header.ends_with('\n') {
            new_header.push('\n');
        }
        new_header.push_str(&line);
        new_header.push('\n');
    }

    Some(format!(
        "{}{}{}",
        &content[..header_start],
        new_header,
        &content[header_end..]
    ))
}
