use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub trait Renderer {
    fn render<T>(&self, result: &CommandResultViewModel<T>, out: &mut dyn Write) -> Result<()>
    where
        T: Serialize + CreateView;
}
