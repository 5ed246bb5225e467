//! # Presentation Layer
//!
//! Everything a presenter shows goes through the same unidirectional flow:
//!
//! ```text
//! [ Stage ] --> [ Presenter ] --> [ ViewModel ] --> [ View ] --> [ Renderer ] --> [ Surface ]
//!  (facade)      (converter)       (contract)     (layout)      (Display)       (notebook/console)
//! ```
//!
//! ## Directory Guide
//!
//! ### 1. `view_models/`
//! * Plain data describing *what* is shown. Derive `Serialize`.
//! * Home of the [`CreateView`] trait.
//!
//! ### 2. `views/`
//! * *How* a view model looks: an HTML view for rich mode and a text view
//!   for plain mode, plus the `impl CreateView` choosing between them.
//!
//! ### 3. `presenters/`
//! * Pure functions from records and arguments to view models.
//! * Defaults for missing record fields, percentages, colour classification
//!   and log windowing happen here, never in views.
//!
//! ### 4. `renderers/`
//! * The [`Renderer`](renderers::Renderer) trait. [`Display`](crate::Display)
//!   implements it: markup goes to the surface in rich mode, text lines in
//!   plain mode.
//!
//! ### 5. `formatters/`
//! * Small string utilities shared by views: HTML escaping and truncation.
//!
//! ## Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Show a new field | **`view_models/`** |
//! | Change a threshold or default | **`presenters/`** |
//! | Change markup or text layout | **`views/`** |
//! | Escape or shorten text | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::Renderer;
pub use view_models::CreateView;
