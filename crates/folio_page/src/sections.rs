//! Page sections
//!
//! One builder per page region. Every section (after the header) is a
//! visibility-triggered reveal container; card grids are nested reveal
//! containers so individual cards stagger, matching the header's cascade.

use folio_content::{InfoCard, LinkTarget, Profile, Project, SectionCopy};
use folio_motion::RevealTrigger;

use crate::element::{el, Element};
use crate::motion::{mount_reveal, visibility_reveal};

/// A pill-shaped skill/tech badge
fn badge(text: &str) -> Element {
    el("span").class("badge").text(text)
}

/// An anchor with the link-target policy applied
///
/// Absolute (http-prefixed) hrefs open in a new browsing context; in-page
/// anchors and relative paths navigate in place.
pub fn anchor(label: &str, href: &str) -> Element {
    let a = el("a").attr("href", href);
    if LinkTarget::for_href(href).opens_new_context() {
        a.attr("target", "_blank").attr("rel", "noreferrer").text(label)
    } else {
        a.text(label)
    }
}

/// Button-styled anchor with the hover-lift micro-interaction
fn action(label: &str, href: &str, primary: bool) -> Element {
    anchor(label, href).class(if primary { "btn btn-primary lift" } else { "btn lift" })
}

/// Kicker + title + optional description block
fn section_title(copy: &SectionCopy) -> Element {
    el("div")
        .class("section-title")
        .child(el("p").class("kicker").text(&copy.kicker))
        .child(el("h2").text(&copy.title))
        .child_if(copy.desc.is_some(), || {
            el("p")
                .class("muted")
                .text(copy.desc.clone().unwrap_or_default())
        })
}

/// Heading + body info card
fn info_card(card: &InfoCard) -> Element {
    el("div")
        .class(if card.wide { "card wide lift" } else { "card lift" })
        .child(el("p").class("card-heading").text(&card.heading))
        .child(el("p").text(&card.body))
}

/// A staggered grid of info cards (its own reveal container)
fn card_grid(cards: &[InfoCard], columns: u8, threshold: f32) -> Element {
    visibility_reveal(
        el("div")
            .class(format!("grid cols-{columns}"))
            .children(cards.iter().map(info_card)),
        threshold,
    )
}

/// Wrap a region in a visibility-triggered section
fn reveal_section(id: &str, threshold: f32, children: Vec<Element>) -> Element {
    visibility_reveal(el("section").id(id).children(children), threshold)
}

/// The mount-triggered header
///
/// Five staggered children in order: kicker, heading, subtext, action
/// buttons, badge row.
pub fn header(profile: &Profile) -> Element {
    let identity = &profile.identity;
    let links = &profile.links;

    mount_reveal(
        el("header")
            .child(el("p").class("kicker").text(&identity.kicker))
            .child(el("h1").text(&identity.name))
            .child(
                el("div")
                    .class("subtext")
                    .child(el("p").class("role").text(&identity.role))
                    .child(el("p").class("muted").text(&identity.bio)),
            )
            .child(
                el("div")
                    .class("actions")
                    .child(action("View Projects", "#projects", true))
                    .child(action("Download CV", &links.cv, false))
                    .child(action("LinkedIn", &links.linkedin, false))
                    .child(action("GitHub", &links.github, false)),
            )
            .child(
                el("div")
                    .class("badges")
                    .children(identity.badges.iter().map(|b| badge(b))),
            ),
    )
}

pub fn about(profile: &Profile) -> Element {
    reveal_section(
        "about",
        RevealTrigger::DEFAULT_THRESHOLD,
        vec![
            section_title(&profile.about),
            card_grid(&profile.about_cards, 3, RevealTrigger::DEFAULT_THRESHOLD),
        ],
    )
}

pub fn skills(profile: &Profile) -> Element {
    reveal_section(
        "skills",
        RevealTrigger::DEFAULT_THRESHOLD,
        vec![
            section_title(&profile.skills),
            card_grid(&profile.skill_cards, 2, RevealTrigger::DEFAULT_THRESHOLD),
        ],
    )
}

pub fn reliability(profile: &Profile) -> Element {
    reveal_section(
        "reliability",
        RevealTrigger::DEFAULT_THRESHOLD,
        vec![
            section_title(&profile.reliability),
            card_grid(
                &profile.reliability_cards,
                3,
                RevealTrigger::DEFAULT_THRESHOLD,
            ),
        ],
    )
}

/// One project card
fn project_card(project: &Project) -> Element {
    let facet = |label: &str, body: Element| {
        el("div")
            .class("facet")
            .child(el("p").class("kicker").text(label))
            .child(body)
    };

    el("article")
        .class("card project lift")
        .child(el("h3").text(&project.name))
        .child(el("p").class("muted").text(&project.summary))
        .child(
            el("div")
                .class("grid cols-3")
                .child(facet("Problem", el("p").text(&project.problem)))
                .child(facet("Solution", el("p").text(&project.solution)))
                .child(facet(
                    "Impact",
                    el("ul").children(project.impact.iter().map(|i| el("li").text(i))),
                )),
        )
        .child(
            el("div")
                .class("badges")
                .children(project.tech.iter().map(|t| badge(t))),
        )
        .child(el("p").class("note").text(&project.note))
        .child(
            el("div").class("actions").children(
                project
                    .links
                    .iter()
                    .map(|l| action(&l.label, &l.href, false)),
            ),
        )
}

/// The project list, with its deliberately lower reveal threshold: the
/// section is tall and should begin animating before fully in frame
pub fn projects(profile: &Profile) -> Element {
    reveal_section(
        "projects",
        RevealTrigger::PROJECTS_THRESHOLD,
        vec![
            section_title(&profile.projects_intro),
            visibility_reveal(
                el("div")
                    .class("grid")
                    .children(profile.projects.iter().map(project_card)),
                RevealTrigger::PROJECTS_THRESHOLD,
            ),
        ],
    )
}

pub fn experience(profile: &Profile) -> Element {
    reveal_section(
        "experience",
        RevealTrigger::DEFAULT_THRESHOLD,
        vec![
            section_title(&profile.experience),
            el("div").class("card lift").child(
                el("ul").children(profile.experience_entries.iter().map(|entry| {
                    el("li")
                        .child(el("span").class("strong").text(&entry.role))
                        .text(format!(" — {}", entry.organization))
                })),
            ),
        ],
    )
}

pub fn certifications(profile: &Profile) -> Element {
    reveal_section(
        "certifications",
        RevealTrigger::DEFAULT_THRESHOLD,
        vec![
            section_title(&profile.certifications_intro),
            el("div").class("card lift").child(
                el("ul").class("grid cols-2").children(
                    profile
                        .certifications
                        .iter()
                        .map(|c| el("li").text(&c.title)),
                ),
            ),
        ],
    )
}

pub fn contact(profile: &Profile) -> Element {
    let c = &profile.contact;
    let row = |label: &str, value: Element| {
        el("p")
            .child(el("span").class("muted").text(format!("{label}: ")))
            .child(value)
    };

    reveal_section(
        "contact",
        RevealTrigger::DEFAULT_THRESHOLD,
        vec![
            section_title(&profile.contact_intro),
            el("div")
                .class("card lift")
                .child(row("Phone", el("span").text(&c.phone)))
                .child(row("Location", el("span").text(&c.location)))
                .child(row(
                    "Email",
                    anchor(&c.email, &format!("mailto:{}", c.email)),
                ))
                .child(row("LinkedIn", anchor(&profile.links.linkedin, &profile.links.linkedin)))
                .child(row("GitHub", anchor(&profile.links.github, &profile.links.github))),
        ],
    )
}

pub fn footer(profile: &Profile) -> Element {
    el("footer").text(&profile.footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_five_staggered_children() {
        let profile = Profile::default_content();
        let header = header(&profile);
        assert_eq!(header.child_element_count(), 5);
        assert!(header.render().contains("data-reveal=\"mount\""));
    }

    #[test]
    fn test_projects_section_uses_lower_threshold() {
        let profile = Profile::default_content();
        let html = projects(&profile).render();
        assert!(html.contains("data-threshold=\"0.15\""));
        assert!(!html.contains("data-threshold=\"0.18\""));
    }

    #[test]
    fn test_anchor_policy_in_markup() {
        let external = anchor("GitHub", "https://github.com/lightwayz").render();
        assert!(external.contains("target=\"_blank\""));
        assert!(external.contains("rel=\"noreferrer\""));

        let fragment = anchor("Private demo (on request)", "#contact").render();
        assert!(!fragment.contains("target="));
        assert!(!fragment.contains("rel="));
    }

    #[test]
    fn test_sections_carry_their_anchors() {
        let profile = Profile::default_content();
        for (section, id) in [
            (about(&profile), "about"),
            (skills(&profile), "skills"),
            (projects(&profile), "projects"),
            (contact(&profile), "contact"),
        ] {
            assert!(section.render().contains(&format!("id=\"{id}\"")));
        }
    }

    #[test]
    fn test_project_cards_render_all_facets() {
        let profile = Profile::default_content();
        let html = projects(&profile).render();
        assert!(html.contains("Problem"));
        assert!(html.contains("Solution"));
        assert!(html.contains("Impact"));
        assert_eq!(html.matches("<article").count(), profile.projects.len());
    }
}
