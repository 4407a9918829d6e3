use std::fmt;

/// The four regions of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Contact,
    ];

    /// Category class the stylesheet keys layout on.
    pub fn category(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero-section",
            SectionKind::About => "about-section",
            SectionKind::Projects => "projects-section",
            SectionKind::Contact => "contact-section",
        }
    }

    /// Fragment id, so `/#projects` jumps to the section.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Visible,
    Blurred,
}

impl Reveal {
    pub fn as_str(self) -> &'static str {
        match self {
            Reveal::Visible => "visible",
            Reveal::Blurred => "blurred",
        }
    }
}

impl From<bool> for Reveal {
    fn from(visible: bool) -> Self {
        if visible {
            Reveal::Visible
        } else {
            Reveal::Blurred
        }
    }
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn section_class(category: &str, visible: bool) -> String {
    format!("{category} section {}", Reveal::from(visible))
}

/// Next shown state for a section given what the observer just reported.
/// With `once`, a revealed section never blurs again.
pub fn next_reveal(shown: bool, observed: bool, once: bool) -> bool {
    observed || (once && shown)
}
