use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Number of rows `text` occupies when word-wrapped to `max_width` columns.
///
/// Words wider than the line are broken by display width. A width of zero
/// measures as zero rows. This is the content-measurement path: callers
/// feed the result back into the element tree as a fixed height.
pub fn measure_text_height(text: &str, max_width: u16) -> u16 {
    if max_width == 0 {
        return 0;
    }
    let max_width = max_width as usize;
    let mut rows: usize = 0;

    for input_line in text.split('\n') {
        if input_line.is_empty() {
            rows += 1;
            continue;
        }

        let mut current_width = 0;
        let mut line_open = false;

        for word in input_line.split_whitespace() {
            let word_width = word.width();

            if word_width > max_width {
                // Over-long word: break by character width
                if line_open {
                    rows += 1;
                    current_width = 0;
                }
                let mut chunk_width = 0;
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if ch_width == 0 {
                        continue;
                    }
                    if chunk_width + ch_width > max_width {
                        rows += 1;
                        chunk_width = 0;
                    }
                    chunk_width += ch_width;
                }
                current_width = chunk_width;
                line_open = chunk_width > 0;
                continue;
            }

            let space = if line_open { 1 } else { 0 };
            if current_width + space + word_width > max_width {
                rows += 1;
                current_width = word_width;
            } else {
                current_width += space + word_width;
            }
            line_open = true;
        }

        rows += 1;
    }

    rows.min(u16::MAX as usize) as u16
}
