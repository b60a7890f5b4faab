//! Profile aggregate and loading
//!
//! [`Profile`] bundles every record the page renders. The built-in content
//! is the default; the same shape can be loaded from a TOML file so the
//! page is not welded to one person's data.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ContentError;
use crate::record::{
    Certification, Contact, ExperienceEntry, Identity, InfoCard, Link, Links, Project, SectionCopy,
};

/// Everything the single-page site renders, in render order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub footer: String,
    pub identity: Identity,
    pub links: Links,
    pub about: SectionCopy,
    pub about_cards: Vec<InfoCard>,
    pub skills: SectionCopy,
    pub skill_cards: Vec<InfoCard>,
    pub reliability: SectionCopy,
    pub reliability_cards: Vec<InfoCard>,
    pub projects_intro: SectionCopy,
    pub projects: Vec<Project>,
    pub experience: SectionCopy,
    pub experience_entries: Vec<ExperienceEntry>,
    pub certifications_intro: SectionCopy,
    pub certifications: Vec<Certification>,
    pub contact_intro: SectionCopy,
    pub contact: Contact,
}

impl Profile {
    /// Parse a profile from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let profile: Profile = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading profile content");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject content the renderer cannot do anything sensible with
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.identity.name.trim().is_empty() {
            return Err(ContentError::Invalid("identity.name is empty".into()));
        }
        if self.projects.is_empty() {
            return Err(ContentError::Invalid("no projects defined".into()));
        }
        for project in &self.projects {
            for link in &project.links {
                if link.href.trim().is_empty() {
                    return Err(ContentError::Invalid(format!(
                        "project '{}' has a link with an empty href",
                        project.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// The built-in profile content
    pub fn default_content() -> Self {
        Self {
            footer: "© 2025 Emmanuel Maduabuchi • Built with Rust • Deployed as a static page"
                .into(),
            identity: Identity {
                kicker: "Failure-First • Reliability • Security • Performance".into(),
                name: "Emmanuel Maduabuchi".into(),
                role: "Full-Stack Systems Architect (High-Reliability Platforms)".into(),
                bio: "I design and build secure, failure-aware web and backend systems \
                      for fintech, enterprise, and integration-heavy platforms — with \
                      observability, auditability, and real-world performance in mind."
                    .into(),
                badges: vec![
                    "React".into(),
                    "Next.js".into(),
                    "Node.js".into(),
                    "TypeScript".into(),
                    "NestJS-style architecture".into(),
                    "Python (AI/Automation)".into(),
                    "RBAC".into(),
                    "CI/CD + DevSecOps".into(),
                    "CDN + performance".into(),
                ],
            },
            links: Links {
                linkedin: "https://linkedin.com/in/emmanuel-maduabuchi-38354315a".into(),
                github: "https://github.com/lightwayz".into(),
                cv: "/Emmanuel_Maduabuchi_CV.pdf".into(),
            },
            about: SectionCopy::new("About", "Systems thinking, not just shipping features").desc(
                "I work best in environments where downtime, security gaps, slow performance, \
                 or silent failures have real consequences. My approach is grounded in systems \
                 thinking (physics background) and reinforced by ownership of production \
                 deployments.",
            ),
            about_cards: vec![
                InfoCard::new(
                    "Focus",
                    "Reliability-first architecture, secure transaction flows, and observable \
                     systems.",
                ),
                InfoCard::new(
                    "Nigeria latency reality",
                    "CDN-first delivery, caching, and fast feedback loops to preserve user \
                     trust on unstable networks.",
                ),
                InfoCard::new(
                    "Security posture",
                    "RBAC, secrets hygiene, dependency scanning, and audit trails as defaults \
                     — not add-ons.",
                ),
            ],
            skills: SectionCopy::new("Skills & Stack", "Modern stack with reliability hooks")
                .desc("Grouped for quick recruiter scanning."),
            skill_cards: vec![
                InfoCard::new("Frontend", "React, Next.js, Flutter"),
                InfoCard::new(
                    "Backend",
                    "Node.js, TypeScript (NestJS-style modular architecture), Firebase, REST \
                     APIs, Python (AI/Automation)",
                ),
                InfoCard::new(
                    "Infrastructure",
                    "Serverless, Vercel, Cloud Functions, environments & deployments",
                ),
                InfoCard::new(
                    "Security & Reliability",
                    "RBAC, Auth Guards, Audit logging, Observability, CI/CD + DevSecOps",
                ),
                InfoCard::new(
                    "Integrations",
                    "Paystack, Termii (SMS/WhatsApp), external APIs",
                )
                .wide(),
            ],
            reliability: SectionCopy::new(
                "Reliability",
                "How I ship safely and keep systems fast",
            )
            .desc("Practical practices that improve trust on real-world networks."),
            reliability_cards: vec![
                InfoCard::new(
                    "CI/CD + DevSecOps",
                    "Automated checks, dependency scanning, secrets hygiene, and environment \
                     isolation to reduce deployment risk.",
                ),
                InfoCard::new(
                    "Observability",
                    "Structured logs, actionable errors, and audit trails to prevent silent \
                     failures and speed recovery.",
                ),
                InfoCard::new(
                    "CDN + Performance",
                    "CDN-first delivery, caching, and lightweight UIs to keep load times low \
                     under high-latency conditions.",
                ),
            ],
            projects_intro: SectionCopy::new("Portfolio", "Featured projects").desc(
                "Impact-focused summaries. Private work is available via walkthrough or \
                 temporary read-only access when appropriate.",
            ),
            projects: vec![
                Project {
                    name: "EnergyWalletNG — Transaction & Identity Platform".into(),
                    summary: "Secure, high-availability platform for payments, identity, and \
                              admin operations with traceability."
                        .into(),
                    problem: "Needed reliable transaction flows where silent failures and \
                              unclear states reduce user trust."
                        .into(),
                    solution: "Implemented verification with retries, audit logging, RBAC \
                               separation, and production observability patterns."
                        .into(),
                    impact: vec![
                        "Reduced silent failures by making error states explicit and observable"
                            .into(),
                        "Improved traceability across payment and identity workflows".into(),
                    ],
                    tech: vec![
                        "Node.js".into(),
                        "TypeScript".into(),
                        "Firebase".into(),
                        "Paystack".into(),
                        "Serverless".into(),
                        "RBAC".into(),
                    ],
                    links: vec![Link::new("Private demo (on request)", "#contact")],
                    note: "Source code is private due to production IP. Guided walkthrough or \
                           temporary read-only access available on request."
                        .into(),
                },
                Project {
                    name: "RBAC Admin & Secure Ops Console".into(),
                    summary: "Multi-role admin dashboards with strict access segregation and \
                              audit-friendly actions."
                        .into(),
                    problem: "Operational teams needed safe access control without privilege \
                              leakage across roles."
                        .into(),
                    solution: "Role-based permissions enforced at API boundaries; sensitive \
                               actions logged for accountability."
                        .into(),
                    impact: vec![
                        "Clear separation of privileges".into(),
                        "Audit-ready operational workflows".into(),
                    ],
                    tech: vec![
                        "React".into(),
                        "TypeScript".into(),
                        "RBAC".into(),
                        "Secure APIs".into(),
                    ],
                    links: vec![Link::new("Walkthrough (on request)", "#contact")],
                    note: "Screenshots/walkthrough available without sharing proprietary code."
                        .into(),
                },
                Project {
                    name: "reliability-demo-api (NestJS demo)".into(),
                    summary: "IP-safe NestJS demo showing modules, DI, guards (RBAC), \
                              failure-aware endpoints, and audit-style logging."
                        .into(),
                    problem: "Need a public proof of NestJS patterns without exposing \
                              production repos."
                        .into(),
                    solution: "Small demo API: auth, roles guard, idempotent payment intent, \
                               verify flow with explicit unknown states."
                        .into(),
                    impact: vec!["Demonstrates NestJS structure and security patterns".into()],
                    tech: vec![
                        "NestJS".into(),
                        "TypeScript".into(),
                        "JWT".into(),
                        "RBAC".into(),
                        "Testing-ready DI".into(),
                    ],
                    links: vec![Link::new(
                        "GitHub (NestJS demo repo)",
                        "https://github.com/lightwayz/nestjs-reliability-demo",
                    )],
                    note: "Demo is intentionally generic and contains no business logic, \
                           secrets, or customer data."
                        .into(),
                },
            ],
            experience: SectionCopy::new("Experience", "Snapshot")
                .desc("Full detail is available on the CV."),
            experience_entries: vec![
                ExperienceEntry {
                    role: "CTO / Full-Stack Engineer".into(),
                    organization: "EnergyWalletNG (Remote)".into(),
                },
                ExperienceEntry {
                    role: "Full-Stack Developer".into(),
                    organization: "Mrock Entertainment / ATHF Kigali (Hybrid)".into(),
                },
                ExperienceEntry {
                    role: "Fleet Analyst".into(),
                    organization: "Dangote Group Plc".into(),
                },
            ],
            certifications_intro: SectionCopy::new("Certifications", "Proof of depth"),
            certifications: vec![
                Certification::new("Certified AI Scientist — USAII (2025)"),
                Certification::new("Google Cybersecurity Certificate (2023)"),
                Certification::new("CompTIA Security+ Bootcamp (2023)"),
                Certification::new("IBM DevOps & Software Engineering (2022)"),
                Certification::new("Google IT Support Certificate (2022)"),
                Certification::new(
                    "DevOps Engineer — International DevOps Certification Academy (2022)",
                ),
            ],
            contact_intro: SectionCopy::new("Contact", "Let’s talk").desc(
                "I’m open to high-reliability roles (fintech, gov, enterprise platforms). \
                 Private work can be reviewed via guided walkthrough or temporary access \
                 when appropriate.",
            ),
            contact: Contact {
                phone: "+2347061927188".into(),
                location: "Lagos, Nigeria (Hybrid)".into(),
                email: "emmadouabs@gmail.com".into(),
            },
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::default_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        let profile = Profile::default_content();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.identity.badges.len(), 9);
        assert_eq!(profile.certifications.len(), 6);
    }

    #[test]
    fn test_toml_round_trip() {
        let profile = Profile::default_content();
        let text = toml::to_string(&profile).unwrap();
        let parsed = Profile::from_toml_str(&text).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut profile = Profile::default_content();
        profile.identity.name = "  ".into();
        assert!(matches!(
            profile.validate(),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_empty_link_href_rejected() {
        let mut profile = Profile::default_content();
        profile.projects[0].links[0].href = String::new();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            Profile::from_toml_str("not = [valid"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_card_order_preserved() {
        let profile = Profile::default_content();
        let headings: Vec<_> = profile
            .skill_cards
            .iter()
            .map(|c| c.heading.as_str())
            .collect();
        assert_eq!(
            headings,
            vec![
                "Frontend",
                "Backend",
                "Infrastructure",
                "Security & Reliability",
                "Integrations"
            ]
        );
        assert!(profile.skill_cards[4].wide);
    }
}
