//! Display record types
//!
//! Plain immutable value objects with string/array fields. No identity
//! beyond position in an ordered sequence, no mutation after startup.

use serde::{Deserialize, Serialize};

/// A labeled hyperlink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Top-level external links consumed as opaque configuration strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Professional network profile URL
    pub linkedin: String,
    /// Code-hosting profile URL
    pub github: String,
    /// Fixed path to the downloadable CV document
    pub cv: String,
}

/// Header identity block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Kicker line above the name
    pub kicker: String,
    /// Display name
    pub name: String,
    /// Role line under the name
    pub role: String,
    /// Short bio paragraph
    pub bio: String,
    /// Skill badges shown in the header badge row
    pub badges: Vec<String>,
}

/// A featured project card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    pub problem: String,
    pub solution: String,
    pub impact: Vec<String>,
    pub tech: Vec<String>,
    pub note: String,
    pub links: Vec<Link>,
}

/// A heading + body card used in the about/skills/reliability grids
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    pub heading: String,
    pub body: String,
    /// Span both columns of a two-column grid
    #[serde(default)]
    pub wide: bool,
}

impl InfoCard {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            wide: false,
        }
    }

    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }
}

/// Kicker/title/description copy introducing a section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub kicker: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl SectionCopy {
    pub fn new(kicker: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kicker: kicker.into(),
            title: title.into(),
            desc: None,
        }
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// One experience snapshot entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
}

/// One certification line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
}

impl Certification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Contact details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub location: String,
    pub email: String,
}
