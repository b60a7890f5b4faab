//! Document assembly
//!
//! Builds the complete single-page HTML document from a profile and a
//! motion preference, and writes it to disk.

use std::path::{Path, PathBuf};

use folio_content::Profile;
use folio_motion::MotionPrefs;
use thiserror::Error;
use tracing::info;

use crate::element::{el, Element};
use crate::motion;
use crate::sections;

/// Errors raised while writing the rendered document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Base look of the page, independent of motion
const BASE_STYLE: &str = "\
:root { color-scheme: dark; }\n\
* { box-sizing: border-box; margin: 0; }\n\
body { background: #09090b; color: #f4f4f5; font: 16px/1.6 system-ui, sans-serif; }\n\
main { max-width: 64rem; margin: 0 auto; padding: 2.5rem 1.5rem; }\n\
header { display: flex; flex-direction: column; gap: 1.5rem; padding-bottom: 2.5rem; \
border-bottom: 1px solid rgba(255,255,255,0.1); }\n\
section { padding-top: 3rem; }\n\
h1 { font-size: 2.25rem; line-height: 1.2; }\n\
h2 { margin-top: 0.5rem; font-size: 1.5rem; }\n\
.kicker { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; \
color: rgba(255,255,255,0.5); }\n\
.muted { color: rgba(255,255,255,0.7); }\n\
.note { font-size: 0.875rem; color: rgba(255,255,255,0.6); }\n\
.strong { font-weight: 500; color: #fff; }\n\
.section-title { margin-bottom: 1.5rem; }\n\
.grid { display: grid; gap: 1.25rem; }\n\
.cols-2 { grid-template-columns: repeat(2, 1fr); }\n\
.cols-3 { grid-template-columns: repeat(3, 1fr); }\n\
.card { border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); \
border-radius: 1rem; padding: 1.25rem; }\n\
.card.wide { grid-column: span 2; }\n\
.card-heading { font-size: 0.875rem; color: rgba(255,255,255,0.6); }\n\
.facet { border: 1px solid rgba(255,255,255,0.1); background: rgba(9,9,11,0.4); \
border-radius: 0.75rem; padding: 1rem; }\n\
.badges { display: flex; flex-wrap: wrap; gap: 0.5rem; }\n\
.badge { border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); \
border-radius: 9999px; padding: 0.25rem 0.75rem; font-size: 0.75rem; \
color: rgba(255,255,255,0.8); }\n\
.actions { display: flex; flex-wrap: wrap; gap: 0.75rem; }\n\
.btn { display: inline-block; border: 1px solid rgba(255,255,255,0.15); \
background: rgba(255,255,255,0.05); border-radius: 0.75rem; padding: 0.5rem 1rem; \
font-size: 0.875rem; font-weight: 500; color: #fff; text-decoration: none; }\n\
.btn-primary { background: #fff; color: #09090b; }\n\
a { color: inherit; }\n\
ul { padding-left: 1.25rem; }\n\
footer { border-top: 1px solid rgba(255,255,255,0.1); margin-top: 3rem; \
padding-top: 1.5rem; font-size: 0.75rem; color: rgba(255,255,255,0.5); }\n";

/// The single-page portfolio document
pub struct Document {
    profile: Profile,
    prefs: MotionPrefs,
}

impl Document {
    pub fn new(profile: Profile, prefs: MotionPrefs) -> Self {
        Self { profile, prefs }
    }

    /// Largest stagger group on the page: the header's five children or the
    /// widest card grid
    fn max_stagger_group(&self) -> usize {
        [
            5,
            self.profile.about_cards.len(),
            self.profile.skill_cards.len(),
            self.profile.reliability_cards.len(),
            self.profile.projects.len(),
        ]
        .into_iter()
        .max()
        .unwrap_or(5)
    }

    fn head(&self) -> Element {
        let style = format!(
            "{BASE_STYLE}{}",
            motion::stylesheet(self.prefs, self.max_stagger_group())
        );
        el("head")
            .child(el("meta").attr("charset", "utf-8"))
            .child(
                el("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(el("title").text(format!(
                "{} — {}",
                self.profile.identity.name, self.profile.identity.role
            )))
            .child(el("style").raw(style))
    }

    fn body(&self) -> Element {
        let p = &self.profile;
        el("body")
            .child(
                el("main")
                    .child(sections::header(p))
                    .child(sections::about(p))
                    .child(sections::skills(p))
                    .child(sections::reliability(p))
                    .child(sections::projects(p))
                    .child(sections::experience(p))
                    .child(sections::certifications(p))
                    .child(sections::contact(p))
                    .child(sections::footer(p)),
            )
            .child(el("script").raw(motion::observer_script()))
    }

    /// Render the complete HTML document
    pub fn render(&self) -> String {
        let html = el("html")
            .attr("lang", "en")
            .child(self.head())
            .child(self.body());
        format!("<!doctype html>\n{}", html.render())
    }

    /// Write `index.html` into `dir`, creating it if needed
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, RenderError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join("index.html");
        std::fs::write(&path, self.render())?;
        info!(path = %path.display(), "wrote portfolio page");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_one_document() {
        let doc = Document::new(Profile::default_content(), MotionPrefs::full());
        let html = doc.render();
        assert!(html.starts_with("<!doctype html>"));
        assert_eq!(html.matches("<html").count(), 1);
        assert_eq!(html.matches("</html>").count(), 1);
        assert_eq!(html.matches("<body").count(), 1);
    }

    #[test]
    fn test_cv_referenced_by_fixed_path() {
        let doc = Document::new(Profile::default_content(), MotionPrefs::full());
        assert!(doc
            .render()
            .contains("href=\"/Emmanuel_Maduabuchi_CV.pdf\""));
    }

    #[test]
    fn test_max_stagger_group_covers_header() {
        let doc = Document::new(Profile::default_content(), MotionPrefs::full());
        assert_eq!(doc.max_stagger_group(), 5);
    }
}
