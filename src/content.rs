//! Minimal line-based renderer for blog post bodies.
//!
//! Recognises `##`/`###` headings, `-`/`*` and numbered list items, `---`
//! rules and lines wrapped in `**` (rendered as a bold paragraph). Everything
//! else is paragraph text; consecutive text lines join with single spaces.
//! All text goes through [`ammonia::clean_text`], so markup in a post body is
//! shown literally and never interpreted.

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

#[derive(Default)]
struct Renderer {
    html: String,
    paragraph: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
}

impl Renderer {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.html.push_str("<p>");
        self.html.push_str(&ammonia::clean_text(&text));
        self.html.push_str("</p>\n");
    }

    fn flush_list(&mut self) {
        let Some((kind, items)) = self.list.take() else {
            return;
        };
        self.html.push_str(&format!("<{}>\n", kind.tag()));
        for item in items {
            self.html.push_str("<li>");
            self.html.push_str(&ammonia::clean_text(&item));
            self.html.push_str("</li>\n");
        }
        self.html.push_str(&format!("</{}>\n", kind.tag()));
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn block(&mut self, tag: &str, text: &str) {
        self.flush();
        self.html.push_str(&format!("<{tag}>{}</{tag}>\n", ammonia::clean_text(text)));
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        self.flush_paragraph();
        if self.list.as_ref().is_some_and(|(open, _)| *open != kind) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| (kind, Vec::new()))
            .1
            .push(text.to_string());
    }

    fn line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush();
        } else if let Some(text) = line.strip_prefix("### ") {
            self.block("h3", text.trim());
        } else if let Some(text) = line.strip_prefix("## ") {
            self.block("h2", text.trim());
        } else if line == "---" {
            self.flush();
            self.html.push_str("<hr>\n");
        } else if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            self.list_item(ListKind::Unordered, text.trim());
        } else if let Some(text) = ordered_item(line) {
            self.list_item(ListKind::Ordered, text);
        } else if has_bold_markers(line) {
            self.flush();
            self.html.push_str("<p><strong>");
            self.html.push_str(&ammonia::clean_text(line.replace("**", "").trim()));
            self.html.push_str("</strong></p>\n");
        } else {
            self.flush_list();
            self.paragraph.push(line.to_string());
        }
    }
}

/// Text after an `N. ` prefix, when the line is a numbered list item.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ").map(str::trim)
}

fn has_bold_markers(line: &str) -> bool {
    line.find("**")
        .is_some_and(|start| line[start + 2..].contains("**"))
}

/// Renders a post body into HTML.
pub fn render(body: &str) -> String {
    let mut renderer = Renderer::default();
    for line in body.lines() {
        renderer.line(line.trim());
    }
    renderer.flush();
    renderer.html
}
