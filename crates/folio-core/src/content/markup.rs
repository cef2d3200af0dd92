//! Restricted markdown-to-HTML conversion for post detail views.
//!
//! This is a fixed sequence of text passes, not a markdown parser:
//!
//! 1. escape `& < > "`
//! 2. `**x**` to `<strong>`
//! 3. `*x*` to `<em>`
//! 4. `# ` / `## ` line prefixes to `<h1>` / `<h2>`
//! 5. `- ` line prefixes to `<li>`, consecutive items wrapped in `<ul>`
//! 6. remaining blank-line separated blocks wrapped in `<p>`
//!
//! Each pass assumes the previous ones already ran. Emphasis never spans
//! lines, and nested or unbalanced markers are left as they fall.

/// Convert post source text to HTML
pub fn render_markup(source: &str) -> String {
    let escaped = escape_html(&source.replace("\r\n", "\n"));

    let lines: Vec<String> = escaped
        .split('\n')
        .map(|line| replace_pairs(&replace_pairs(line, "**", "strong"), "*", "em"))
        .map(|line| block_line(&line))
        .collect();

    let grouped = wrap_list_items(&lines);
    wrap_paragraphs(&grouped)
}

/// Escape the characters that could open markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace every `delim text delim` pair in `line` with `<tag>text</tag>`.
/// An opening delimiter without a partner is left untouched.
fn replace_pairs(line: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        let Some(end) = after.find(delim) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&after[..end]);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        rest = &after[end + delim.len()..];
    }

    out.push_str(rest);
    out
}

fn block_line(line: &str) -> String {
    if let Some(text) = line.strip_prefix("## ") {
        format!("<h2>{}</h2>", text)
    } else if let Some(text) = line.strip_prefix("# ") {
        format!("<h1>{}</h1>", text)
    } else if let Some(text) = line.strip_prefix("- ") {
        format!("<li>{}</li>", text)
    } else {
        line.to_string()
    }
}

fn wrap_list_items(lines: &[String]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut list: Option<String> = None;

    for line in lines {
        if line.starts_with("<li>") {
            list.get_or_insert_with(|| "<ul>".to_string()).push_str(line);
            continue;
        }
        if let Some(mut items) = list.take() {
            items.push_str("</ul>");
            out.push(items);
        }
        out.push(line.clone());
    }
    if let Some(mut items) = list {
        items.push_str("</ul>");
        out.push(items);
    }

    out.join("\n")
}

fn wrap_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if is_block_element(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_element(block: &str) -> bool {
    ["<h1>", "<h2>", "<ul>"].iter().any(|tag| block.starts_with(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_bold() {
        let html = render_markup("# Title\n\nSome **bold** text");
        assert_eq!(html, "<h1>Title</h1>\n<p>Some <strong>bold</strong> text</p>");
    }

    #[test]
    fn test_h2_and_italic() {
        let html = render_markup("## Methods\n\nAn *emphasized* word");
        assert_eq!(html, "<h2>Methods</h2>\n<p>An <em>emphasized</em> word</p>");
    }

    #[test]
    fn test_consecutive_list_items() {
        let html = render_markup("Intro\n\n- one\n- two\n\nOutro");
        assert_eq!(html, "<p>Intro</p>\n<ul><li>one</li><li>two</li></ul>\n<p>Outro</p>");
    }

    #[test]
    fn test_separate_lists() {
        let html = render_markup("- a\n\n- b");
        assert_eq!(html, "<ul><li>a</li></ul>\n<ul><li>b</li></ul>");
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(replace_pairs("**a** *b*", "**", "strong"), "<strong>a</strong> *b*");
        let html = render_markup("**a** and *b*");
        assert_eq!(html, "<p><strong>a</strong> and <em>b</em></p>");
    }

    #[test]
    fn test_unbalanced_marker_left_alone() {
        assert_eq!(render_markup("2 * 3 = 6"), "<p>2 * 3 = 6</p>");
    }

    #[test]
    fn test_emphasis_does_not_span_lines() {
        assert_eq!(render_markup("*a\nb*"), "<p>*a\nb*</p>");
    }

    #[test]
    fn test_markup_in_source_is_escaped() {
        let html = render_markup("<script>alert(\"x\")</script> & more");
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(render_markup("# A\r\n\r\nb"), "<h1>A</h1>\n<p>b</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markup(""), "");
        assert_eq!(render_markup("\n\n\n"), "");
    }
}
