use std::fmt;

use crate::presentation::formatters::html::escape;
use crate::presentation::formatters::text::{source_description, tire_label};
use crate::presentation::view_models::{AnalysisStatus, AnalysisViewModel};

const RAW_SUMMARY: &str = "Full technical response (JSON)";

fn missing_raw_note(status: AnalysisStatus) -> &'static str {
    match status {
        AnalysisStatus::InvalidInput => "(no request sent)",
        _ => "(no response received)",
    }
}

// --------------------------------------------------------
// Plain text
// --------------------------------------------------------

pub struct AnalysisView<'a> {
    data: &'a AnalysisViewModel,
}

impl<'a> AnalysisView<'a> {
    pub fn new(data: &'a AnalysisViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(vehicle) = &self.data.vehicle {
            writeln!(f, "Vehicle: {}", vehicle.display_name)?;
        }

        if let Some(size) = &self.data.tire_size {
            writeln!(
                f,
                "Detected size: {} ({})",
                tire_label(size),
                source_description(size.source)
            )?;

            if let Some(link) = &self.data.link {
                writeln!(f)?;
                writeln!(f, "🛒 Shop tires ({})", tire_label(size))?;
                writeln!(f, "   {}", link)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "── Raw response ──")?;
        match &self.data.raw_response {
            Some(raw) => writeln!(f, "{}", raw.pretty())?,
            None => writeln!(f, "{}", missing_raw_note(self.data.status))?,
        }

        Ok(())
    }
}

// --------------------------------------------------------
// HTML fragment
// --------------------------------------------------------

pub struct AnalysisHtmlView<'a> {
    data: &'a AnalysisViewModel,
}

impl<'a> AnalysisHtmlView<'a> {
    pub fn new(data: &'a AnalysisViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AnalysisHtmlView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(vehicle) = &self.data.vehicle {
            writeln!(
                f,
                "<p class=\"vehicle\">Vehicle: <strong>{}</strong></p>",
                escape(&vehicle.display_name)
            )?;
        }

        if let Some(size) = &self.data.tire_size {
            let label = escape(&tire_label(size));
            writeln!(
                f,
                "<p class=\"size\">Detected size: <strong>{}</strong> ({})</p>",
                label,
                source_description(size.source)
            )?;

            if let Some(link) = &self.data.link {
                let href = escape(link);
                writeln!(
                    f,
                    "<a class=\"cta\" href=\"{}\" target=\"_blank\" rel=\"noopener\">🛒 Shop tires ({})</a>",
                    href, label
                )?;
                writeln!(f, "<div class=\"url\">{}</div>", href)?;
            }
        }

        writeln!(f, "<details>")?;
        writeln!(f, "<summary>{}</summary>", RAW_SUMMARY)?;
        match &self.data.raw_response {
            Some(raw) => writeln!(f, "<pre>{}</pre>", escape(&raw.pretty()))?,
            None => writeln!(f, "<p>{}</p>", missing_raw_note(self.data.status))?,
        }
        writeln!(f, "</details>")?;

        Ok(())
    }
}
