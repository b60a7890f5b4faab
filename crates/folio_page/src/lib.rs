//! Folio Page Renderer
//!
//! Turns a [`folio_content::Profile`] plus a [`folio_motion::MotionPrefs`]
//! into one static HTML document. Three layers:
//!
//! - [`element`]: a small builder-pattern element tree with escaped
//!   serialization
//! - [`motion`]: serializes the typed variant table, stagger schedule, and
//!   reveal triggers into the document's stylesheet and observer snippet,
//!   so the page cannot drift from the tested animation constants
//! - [`sections`]: one builder per page region (header, about, skills,
//!   reliability, projects, experience, certifications, contact, footer)
//!
//! [`document::Document`] assembles the layers and writes `index.html`.

pub mod document;
pub mod element;
pub mod motion;
pub mod sections;

pub use document::{Document, RenderError};
pub use element::{el, Element};
