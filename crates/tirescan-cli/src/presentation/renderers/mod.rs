pub mod console;
pub mod html;
pub mod traits;

pub use console::ConsoleRenderer;
pub use html::HtmlRenderer;
pub use traits::Renderer;
