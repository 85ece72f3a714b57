//! Multi-line content entry
//!
//! File content is typed line by line and terminated by a line reading `END`
//! (case-insensitive, surrounding whitespace ignored). The source of lines is
//! any iterator, so the same code serves a terminal, a script file or a test.

/// Line that ends content entry
pub const END_MARKER: &str = "END";

pub fn is_end_marker(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(END_MARKER)
}

/// Consume lines up to and including the end marker
///
/// Collected lines are joined with `\n`, without a trailing newline. If the
/// source runs out first, whatever was collected is returned.
pub fn collect_content<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();

    for line in lines {
        let line = line.as_ref();
        if is_end_marker(line) {
            break;
        }

        content.push_str(line);
        content.push('\n');
    }

    // drop the separator after the last line
    if content.ends_with('\n') {
        content.pop();
    }

    content
}
