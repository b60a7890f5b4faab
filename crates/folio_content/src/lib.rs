//! Folio Content Model
//!
//! The static display records the page renders: identity and links, project
//! cards, info-card grids, experience entries, certifications, and contact
//! details. Records are plain immutable values defined once at startup and
//! consumed purely as render input - order is meaningful (it drives stagger
//! order) and preserved.
//!
//! Content ships built in ([`Profile::default_content`]) and can optionally
//! be loaded from a TOML file with the same shape.

pub mod error;
pub mod links;
pub mod profile;
pub mod record;

pub use error::ContentError;
pub use links::LinkTarget;
pub use profile::Profile;
pub use record::{
    Certification, Contact, ExperienceEntry, Identity, InfoCard, Link, Links, Project, SectionCopy,
};
