//! Shared HTML rendering: the page shell with the top navigation, plus
//! escaping and number-formatting helpers used by all three pages.

use crate::config;

/// Navigation tabs; `Some(tab)` highlights the active entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    ModelInfo,
    Predict,
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an optional mean with two decimals; a dash when undefined
/// (empty filtered view).
pub fn fmt_mean(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

/// Format a probability with four decimals.
pub fn fmt_proba(value: f64) -> String {
    format!("{value:.4}")
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    if active {
        format!("<a class=\"active\" href=\"{href}\">{label}</a>")
    } else {
        format!("<a href=\"{href}\">{label}</a>")
    }
}

/// Wrap a rendered body in the shared page shell.
pub fn page(title: &str, active: Option<Nav>, body: &str) -> String {
    let nav = [
        nav_link("/", "Dashboard", active == Some(Nav::Dashboard)),
        nav_link("/model-info", "Model", active == Some(Nav::ModelInfo)),
        nav_link("/predict", "Prediksi", active == Some(Nav::Predict)),
    ]
    .join("\n      ");

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"id\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
           <title>{title} — {app}</title>\n\
           <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n\
           <header>\n\
             <span class=\"brand\">{app}</span>\n\
             <nav>\n      {nav}\n    </nav>\n\
           </header>\n\
           <main>\n{body}\n  </main>\n\
           <footer>{app} v{version}</footer>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        app = config::APP_NAME,
        version = config::APP_VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"A & B's"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("Kab/Kota biasa"), "Kab/Kota biasa");
    }

    #[test]
    fn fmt_mean_renders_dash_for_undefined() {
        assert_eq!(fmt_mean(None), "-");
        assert_eq!(fmt_mean(Some(12.345)), "12.35");
    }

    #[test]
    fn page_shell_contains_nav_and_body() {
        let html = page("Judul", Some(Nav::Predict), "<p>isi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>isi</p>"));
        assert!(html.contains("href=\"/model-info\""));
        assert!(html.contains("class=\"active\" href=\"/predict\""));
        assert!(html.contains("/static/style.css"));
    }

    #[test]
    fn page_title_is_escaped() {
        let html = page("<script>", None, "");
        assert!(!html.contains("<title><script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
