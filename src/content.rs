//! Everything the page says. Edit here, not in the components.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Email,
}

impl Icon {
    /// devicon font class; `None` for icons drawn inline as SVG.
    pub fn devicon(self) -> Option<&'static str> {
        match self {
            Icon::GitHub => Some("devicon-github-plain"),
            Icon::LinkedIn => Some("devicon-linkedin-plain"),
            Icon::Email => None,
        }
    }
}

/// Where an activated link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    NewContext,
}

impl Target {
    pub fn attr(self) -> &'static str {
        match self {
            Target::NewContext => "_blank",
        }
    }

    pub fn rel(self) -> &'static str {
        match self {
            Target::NewContext => "noopener noreferrer",
        }
    }
}

/// A resolved navigation: the destination and the browsing context it opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub url: &'static str,
    pub target: Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    pub fn navigation(&self) -> Navigation {
        Navigation {
            url: self.href,
            target: Target::NewContext,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

impl Project {
    /// What clicking the card does.
    pub fn activate(&self) -> Navigation {
        Navigation {
            url: self.link,
            target: Target::NewContext,
        }
    }
}

pub const NAME: &str = "Paki";
pub const HERO_TITLE: &str = "Hey, I'm Paki";
pub const HERO_SUBTITLE: &str = "React Developer & Future Software Engineer";
pub const HERO_CTA: &str = "View my work";

pub const GITHUB_PROFILE: &str = "https://github.com/rathanpaki";
pub const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/pakirathan/";

macro_rules! email {
    () => {
        "pakipakirathan68@gmail.com"
    };
}

pub const EMAIL: &str = email!();
pub const MAILTO: &str = concat!("mailto:", email!());

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub Profile",
        href: GITHUB_PROFILE,
        icon: Icon::GitHub,
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: LINKEDIN_PROFILE,
        icon: Icon::LinkedIn,
    },
    SocialLink {
        label: EMAIL,
        href: MAILTO,
        icon: Icon::Email,
    },
];

pub const ABOUT_TITLE: &str = "About Me";
pub const ABOUT_TEXT: &str = "I'm Paki, an aspiring software engineer passionate about building digital solutions. My projects, We Care and EcoGifts, focus on tech for healthcare and sustainability. Always exploring new technologies!";

pub const PROJECTS_TITLE: &str = "My Projects";
pub const PROJECTS: [Project; 2] = [
    Project {
        title: "We Care",
        description: "A platform connecting patients with caregivers, featuring verified reviews and an intuitive UI.",
        link: "https://github.com/rathanpaki/we-_care",
    },
    Project {
        title: "EcoGifts",
        description: "Sustainable gifting platform with Web AR experiences, promoting eco-friendly products and practices.",
        link: "https://github.com/rathanpaki/eco",
    },
];

pub const CONTACT_TITLE: &str = "Let's Connect";
pub const CONTACT_TEXT: &str = "Drop me a message and let's build something awesome together!";
pub const CONTACT_CTA: &str = "Say Hi 👋";

/// The contact call-to-action; it goes to the inbox and nowhere else.
pub fn contact_action() -> Navigation {
    Navigation {
        url: MAILTO,
        target: Target::NewContext,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_cards_open_in_new_context() {
        let we_care = PROJECTS[0].activate();
        assert_eq!(PROJECTS[0].title, "We Care");
        assert_eq!(we_care.url, "https://github.com/rathanpaki/we-_care");
        assert_eq!(we_care.target.attr(), "_blank");

        let eco = PROJECTS[1].activate();
        assert_eq!(PROJECTS[1].title, "EcoGifts");
        assert_eq!(eco.url, "https://github.com/rathanpaki/eco");
        assert_eq!(eco.target, Target::NewContext);
    }

    #[test]
    fn test_contact_goes_only_to_mailto() {
        let nav = contact_action();
        assert_eq!(nav.url, "mailto:pakipakirathan68@gmail.com");
        assert_eq!(nav.url, format!("mailto:{EMAIL}"));
    }

    #[test]
    fn test_social_links() {
        let hrefs = SOCIAL_LINKS.map(|l| l.navigation().url);
        assert_eq!(
            hrefs,
            [
                "https://github.com/rathanpaki",
                "https://www.linkedin.com/in/pakirathan/",
                "mailto:pakipakirathan68@gmail.com",
            ]
        );
        assert!(SOCIAL_LINKS
            .iter()
            .all(|l| l.navigation().target.rel().contains("noopener")));
    }

    #[test]
    fn test_only_devicon_glyphs_come_from_the_font() {
        for link in SOCIAL_LINKS {
            match link.icon.devicon() {
                Some(class) => assert!(class.starts_with("devicon-"), "{class}"),
                None => assert_eq!(link.icon, Icon::Email),
            }
        }
        assert_eq!(SOCIAL_LINKS[2].label, EMAIL);
    }
}
