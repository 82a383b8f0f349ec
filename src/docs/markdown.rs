//! Minimal Markdown to HTML rendering for the API documentation page.

/// Renders the subset of Markdown used by the README into HTML.
pub struct MarkdownRenderer;

/// Parsed markdown block
#[derive(Debug, Clone, PartialEq)]
pub enum MarkdownBlock {
    Heading { level: usize, text: String },
    Paragraph(String),
    CodeBlock { language: Option<String>, code: String },
    UnorderedList(Vec<String>),
    OrderedList(Vec<String>),
    Blockquote(String),
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
    HorizontalRule,
}

impl MarkdownRenderer {
    /// Render markdown content to an HTML fragment
    pub fn render(content: &str) -> String {
        Self::parse(content)
            .iter()
            .map(Self::render_block)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse markdown text into blocks
    pub fn parse(content: &str) -> Vec<MarkdownBlock> {
        let mut blocks = Vec::new();
        let mut lines = content.lines().peekable();
        let mut current_paragraph = String::new();

        while let Some(line) = lines.next() {
            // Code block
            if line.starts_with("```") {
                flush_paragraph(&mut blocks, &mut current_paragraph);

                let language = line.trim_start_matches('`').trim();
                let language = if language.is_empty() { None } else { Some(language.to_string()) };
                let mut code = String::new();

                for code_line in lines.by_ref() {
                    if code_line.starts_with("```") {
                        break;
                    }
                    if !code.is_empty() {
                        code.push('\n');
                    }
                    code.push_str(code_line);
                }

                blocks.push(MarkdownBlock::CodeBlock { language, code });
                continue;
            }

            // Headings
            if line.starts_with('#') {
                flush_paragraph(&mut blocks, &mut current_paragraph);

                let level = line.chars().take_while(|c| *c == '#').count().min(6);
                let text = line.trim_start_matches('#').trim().to_string();
                blocks.push(MarkdownBlock::Heading { level, text });
                continue;
            }

            // Horizontal rule
            if matches!(line.trim(), "---" | "***" | "___") {
                flush_paragraph(&mut blocks, &mut current_paragraph);
                blocks.push(MarkdownBlock::HorizontalRule);
                continue;
            }

            // Table: a header row followed by a |---| separator row
            if line.trim_start().starts_with('|')
                && lines.peek().is_some_and(|next| is_table_separator(next))
            {
                flush_paragraph(&mut blocks, &mut current_paragraph);

                let header = split_row(line);
                lines.next();
                let mut rows = Vec::new();
                while let Some(row) = lines.next_if(|l| l.trim_start().starts_with('|')) {
                    rows.push(split_row(row));
                }
                blocks.push(MarkdownBlock::Table { header, rows });
                continue;
            }

            // Blockquote
            if line.starts_with('>') {
                flush_paragraph(&mut blocks, &mut current_paragraph);

                let mut quote_text = line.trim_start_matches('>').trim().to_string();
                while let Some(next_line) = lines.next_if(|l| l.starts_with('>')) {
                    quote_text.push(' ');
                    quote_text.push_str(next_line.trim_start_matches('>').trim());
                }
                blocks.push(MarkdownBlock::Blockquote(quote_text));
                continue;
            }

            // Unordered list
            if is_unordered_item(line) {
                flush_paragraph(&mut blocks, &mut current_paragraph);

                let mut items = vec![line[2..].to_string()];
                while let Some(next_line) = lines.next_if(|l| is_unordered_item(l)) {
                    items.push(next_line[2..].to_string());
                }
                blocks.push(MarkdownBlock::UnorderedList(items));
                continue;
            }

            // Ordered list
            if let Some(first) = ordered_item(line) {
                flush_paragraph(&mut blocks, &mut current_paragraph);

                let mut items = vec![first.to_string()];
                while let Some(next_line) = lines.next_if(|l| ordered_item(l).is_some()) {
                    if let Some(item) = ordered_item(next_line) {
                        items.push(item.to_string());
                    }
                }
                blocks.push(MarkdownBlock::OrderedList(items));
                continue;
            }

            // Empty line = end of paragraph
            if line.trim().is_empty() {
                flush_paragraph(&mut blocks, &mut current_paragraph);
                continue;
            }

            // Regular text, accumulate into paragraph
            if !current_paragraph.is_empty() {
                current_paragraph.push(' ');
            }
            current_paragraph.push_str(line);
        }

        flush_paragraph(&mut blocks, &mut current_paragraph);
        blocks
    }

    fn render_block(block: &MarkdownBlock) -> String {
        match block {
            MarkdownBlock::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", render_inline(text))
            }
            MarkdownBlock::Paragraph(text) => format!("<p>{}</p>", render_inline(text)),
            MarkdownBlock::CodeBlock { language, code } => match language {
                Some(lang) => format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    escape_html(lang),
                    escape_html(code)
                ),
                None => format!("<pre><code>{}</code></pre>", escape_html(code)),
            },
            MarkdownBlock::UnorderedList(items) => format!("<ul>{}</ul>", list_items(items)),
            MarkdownBlock::OrderedList(items) => format!("<ol>{}</ol>", list_items(items)),
            MarkdownBlock::Blockquote(text) => {
                format!("<blockquote><p>{}</p></blockquote>", render_inline(text))
            }
            MarkdownBlock::Table { header, rows } => {
                let head = table_row(header, "th");
                let body: String = rows.iter().map(|row| table_row(row, "td")).collect();
                format!("<table><thead>{head}</thead><tbody>{body}</tbody></table>")
            }
            MarkdownBlock::HorizontalRule => "<hr>".to_string(),
        }
    }
}

fn flush_paragraph(blocks: &mut Vec<MarkdownBlock>, paragraph: &mut String) {
    if !paragraph.is_empty() {
        blocks.push(MarkdownBlock::Paragraph(paragraph.trim().to_string()));
        paragraph.clear();
    }
}

fn is_unordered_item(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ") || line.starts_with("+ ")
}

/// Text of an ordered list item like `12. text`.
fn ordered_item(line: &str) -> Option<&str> {
    let dot_pos = line.find(". ")?;
    let prefix = &line[..dot_pos];
    if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
        Some(&line[dot_pos + 2..])
    } else {
        None
    }
}

fn is_table_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|')
        && trimmed.contains('-')
        && trimmed.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", render_inline(item)))
        .collect()
}

fn table_row(cells: &[String], tag: &str) -> String {
    let cells: String = cells
        .iter()
        .map(|cell| format!("<{tag}>{}</{tag}>", render_inline(cell)))
        .collect();
    format!("<tr>{cells}</tr>")
}

/// Inline code, `**strong**` and `*emphasis*`; everything else is escaped.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some((inner, after)) = delimited(rest, "`") {
            out.push_str("<code>");
            out.push_str(&escape_html(inner));
            out.push_str("</code>");
            rest = after;
            continue;
        }
        if let Some((inner, after)) = delimited(rest, "**") {
            out.push_str("<strong>");
            out.push_str(&render_inline(inner));
            out.push_str("</strong>");
            rest = after;
            continue;
        }
        if let Some((inner, after)) = delimited(rest, "*") {
            out.push_str("<em>");
            out.push_str(&render_inline(inner));
            out.push_str("</em>");
            rest = after;
            continue;
        }

        out.push_str(&escape_html(&rest[..ch.len_utf8()]));
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Split `<marker>inner<marker>after` off the front of `text`.
fn delimited<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let body = text.strip_prefix(marker)?;
    let end = body.find(marker)?;
    if end == 0 {
        return None;
    }
    Some((&body[..end], &body[end + marker.len()..]))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
