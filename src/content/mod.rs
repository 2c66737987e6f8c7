//! Static, per-locale site content.
//!
//! Everything here is built from constant tables on demand and never mutated.
//! Locale-independent fields (ids, images, links) are shared; the rest comes
//! from the requested locale.

mod faq;
mod portfolio;
mod process;
mod social;

use serde::Serialize;

pub use faq::faq;
pub use portfolio::{categories, filter_by_category, find_project, portfolio, ALL_CATEGORIES};
pub use process::process;
pub use social::{stats, testimonials};

/// A portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    /// Primary (static) image, also the last-resort fallback
    pub image: &'static str,
    /// Authored gallery slides, if any
    pub gallery: Option<Vec<&'static str>>,
    /// Live site, the target of screenshot requests
    pub link: Option<&'static str>,
    pub year: &'static str,
    pub tags: Option<Vec<&'static str>>,
}

impl Project {
    /// The authored gallery, or a single slide with the primary image.
    pub fn static_gallery(&self) -> Vec<String> {
        match &self.gallery {
            Some(slides) if !slides.is_empty() => slides.iter().map(|s| s.to_string()).collect(),
            _ => vec![self.image.to_string()],
        }
    }
}

/// A step of the studio's process timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// An entry of the technology showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechItem {
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub id: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const STACK: &[TechItem] = &[
    TechItem { name: "React" },
    TechItem { name: "Next.js" },
    TechItem { name: "Three.js" },
    TechItem { name: "TypeScript" },
    TechItem { name: "Node.js" },
    TechItem { name: "Tailwind" },
    TechItem { name: "React Native" },
    TechItem { name: "WebGL" },
    TechItem { name: "AWS" },
    TechItem { name: "Docker" },
    TechItem { name: "GraphQL" },
    TechItem { name: "Figma" },
    TechItem { name: "GSAP" },
];
