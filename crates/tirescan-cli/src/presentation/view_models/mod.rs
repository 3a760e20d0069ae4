pub mod analysis;
pub mod common;
pub mod config;
pub mod result;

pub use analysis::*;
pub use common::*;
pub use config::*;
pub use result::CommandResultViewModel;

use std::fmt;

use crate::presentation::formatters::html::Preformatted;

/// Bridges a ViewModel to its plain-text and HTML layouts
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;

    /// HTML fragment for the page body. Defaults to the text view in a `<pre>`.
    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(Preformatted::new(self.create_view()))
    }
}
