use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel,
};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn badge_label(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return badge.label.clone();
        }
        match badge.level {
            StatusLevel::Success => badge.label.green().bold().to_string(),
            StatusLevel::Info => badge.label.bold().to_string(),
            StatusLevel::Warning => badge.label.yellow().bold().to_string(),
            StatusLevel::Error => badge.label.red().bold().to_string(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: &CommandResultViewModel<T>, out: &mut dyn Write) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), self.badge_label(badge))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            let heading = "💡 Tips:";
            if self.color {
                writeln!(out, "\n{}", heading.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", heading)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
