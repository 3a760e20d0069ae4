use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, HtmlRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Render a view model to `--output` when given, stdout otherwise
    pub fn render<T>(&self, view_model: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                self.render_to(view_model, &mut writer, false)?;
                writer.flush()?;
                log::info!("wrote {}", path.display());
                Ok(())
            }
            None => {
                let stdout = io::stdout();
                let color = stdout.is_terminal();
                let mut lock = stdout.lock();
                self.render_to(view_model, &mut lock, color)?;
                lock.flush()?;
                Ok(())
            }
        }
    }

    pub fn render_to<T>(
        &self,
        view_model: &CommandResultViewModel<T>,
        out: &mut dyn Write,
        color: bool,
    ) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        match self.format {
            OutputFormat::Plain => ConsoleRenderer::new(false)
                .with_color(color)
                .render(view_model, out),
            OutputFormat::Json => ConsoleRenderer::new(true).render(view_model, out),
            OutputFormat::Html => HtmlRenderer::new().render(view_model, out),
        }
    }
}
