//! # Presentation Layer
//!
//! This module implements the **User Interface** logic for the CLI.
//! It is designed using an adaptation of the **MVVM (Model-View-ViewModel)** pattern
//! to keep outcome classification (`tirescan_runtime`) apart from output.
//!
//! ## 🏗️ Architecture & Data Flow
//!
//! The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!    (Controller)      (Converter)       (Contract)       (Driver)  ==(Text)==> View (fmt::Display)
//!                                                                   ==(HTML)==> HtmlView (fmt::Display)
//! ```
//!
//! ---
//!
//! ## 📂 Directory Guide: Where does code go?
//!
//! ### 1. `view_models/` (The Data Contract)
//! * **What:** Structs that define *what* information is available to the user.
//! * **Rule:** Pure data containers. Must implement `Serialize`. **No** calculation logic.
//! * **The JSON Test:** "If I output this struct as JSON, is it clean and machine-readable?"
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * **What:** Pure functions that convert an `Outcome` or `Config` into ViewModels.
//! * **Rule:** Decides badges and tips. Produces raw data, not formatted strings.
//!
//! ### 3. `views/` (The Layout)
//! * **What:** `fmt::Display` layouts. Every ViewModel has a plain-text view; one
//!   with its own HTML layout overrides `CreateView::create_html`, the rest are
//!   wrapped in `<pre>` by the default.
//!
//! ### 4. `renderers/` (The Output Strategy)
//! * **What:** The driver that takes a `CommandResultViewModel` and writes it out.
//! * **Components:**
//!     * `console.rs`: Plain text (optionally colored) and JSON.
//!     * `html.rs`: A standalone HTML page.
//!
//! ### 5. `formatters/` (The Utilities)
//! * **What:** Small string helpers shared by views (size labels, HTML escaping).
//!
//! ---
//!
//! ## ⚖️ Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | **`view_models/`** |
//! | Decide *when* to show a tip | **`presenters/`** |
//! | Change the wording of the size line | **`views/`** |
//! | Change the page styling | **`renderers/html.rs`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, HtmlRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
