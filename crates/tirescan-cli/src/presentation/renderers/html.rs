use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::formatters::html::escape;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

const PAGE_TITLE: &str = "Tire Scanner";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
.badge { padding: 0.75rem 1rem; border-radius: 0.5rem; font-weight: bold; }
.badge.success { background: #e6f4ea; color: #1e7e34; }
.badge.info { background: #e8f0fe; color: #1a56db; }
.badge.warning { background: #fff4e5; color: #b45309; }
.badge.error { background: #fdecea; color: #b91c1c; }
.cta { display: inline-block; margin: 1rem 0 0.25rem; padding: 0.75rem 1.25rem; border-radius: 0.5rem; background: #1a56db; color: #fff; text-decoration: none; font-weight: bold; }
.url { font-family: monospace; font-size: 0.85rem; word-break: break-all; color: #555; }
details { margin-top: 1.5rem; }
pre { background: #f5f5f5; padding: 1rem; overflow-x: auto; }
";

/// Renders a standalone HTML page
pub struct HtmlRenderer;

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render<T>(&self, result: &CommandResultViewModel<T>, out: &mut dyn Write) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", PAGE_TITLE)?;
        writeln!(out, "<style>\n{}</style>", STYLE)?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{}</h1>", PAGE_TITLE)?;

        if let Some(badge) = &result.badge {
            writeln!(
                out,
                "<div class=\"badge {}\">{} {}</div>",
                badge.level.as_str(),
                badge.icon(),
                escape(&badge.label)
            )?;
        }

        write!(out, "{}", result.content.create_html())?;

        if !result.suggestions.is_empty() {
            writeln!(out, "<h2>💡 Tips</h2>")?;
            writeln!(out, "<ul>")?;
            for tip in &result.suggestions {
                match &tip.command {
                    Some(cmd) => writeln!(
                        out,
                        "<li>{}: <code>{}</code></li>",
                        escape(&tip.description),
                        escape(cmd)
                    )?,
                    None => writeln!(out, "<li>{}</li>", escape(&tip.description))?,
                }
            }
            writeln!(out, "</ul>")?;
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(())
    }
}
