use crate::render::RenderResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

pub fn render(result: &RenderResult, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result),
        OutputFormat::Html => render_html(result),
    }
}

pub fn render_text(result: &RenderResult) -> Vec<u8> {
    let mut out = String::new();
    match result {
        RenderResult::Error { message } => {
            out.push_str(message);
            out.push('\n');
        }
        RenderResult::Table { table, pager } => {
            let labels: Vec<&str> = table.header.iter().map(|cell| cell.label.as_str()).collect();
            out.push_str(&labels.join("\t"));
            out.push('\n');
            for row in &table.rows {
                out.push_str(&row.join("\t"));
                out.push('\n');
            }
            out.push_str(&format!(
                "-- {} item(s), {} per page, page index {}\n",
                pager.total_items, pager.page_size, pager.current_page
            ));
        }
    }
    out.into_bytes()
}

pub fn render_json(result: &RenderResult) -> Vec<u8> {
    serde_json::to_vec_pretty(result).unwrap_or_else(|_| b"{}\n".to_vec())
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_html(result: &RenderResult) -> Vec<u8> {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\"/>\n");
    out.push_str("  <title>Users Listing</title>\n");
    out.push_str("</head>\n<body>\n");
    match result {
        RenderResult::Error { message } => {
            out.push_str(&format!(
                "  <p class=\"error\">{}</p>\n",
                escape_html(message)
            ));
        }
        RenderResult::Table { table, pager } => {
            out.push_str("  <table>\n    <thead>\n      <tr>\n");
            for cell in &table.header {
                out.push_str(&format!("        <th>{}</th>\n", escape_html(&cell.label)));
            }
            out.push_str("      </tr>\n    </thead>\n    <tbody>\n");
            for row in &table.rows {
                out.push_str("      <tr>\n");
                for value in row {
                    out.push_str(&format!("        <td>{}</td>\n", escape_html(value)));
                }
                out.push_str("      </tr>\n");
            }
            out.push_str("    </tbody>\n  </table>\n");
            out.push_str(&format!(
                "  <nav class=\"pager\" data-total-items=\"{}\" data-page-size=\"{}\" data-current-page=\"{}\"></nav>\n",
                pager.total_items, pager.page_size, pager.current_page
            ));
        }
    }
    out.push_str("</body>\n</html>\n");
    out.into_bytes()
}
