use std::fmt;

/// The pre-rendered sections of the site. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Visible label for navigation links.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Hem",
            Page::About => "Om oss",
            Page::Contact => "Kontakt",
        }
    }

    /// Id of the section element carrying this page's content.
    pub fn section_id(self) -> String {
        format!("page-{}", self.slug())
    }

    /// URL fragment for this page.
    pub fn hash(self) -> String {
        format!("#{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        match slug {
            "home" => Some(Page::Home),
            "about" => Some(Page::About),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    /// Parses a location hash, with or without the leading `#`. Unknown
    /// values yield `None` and the caller leaves the view as it is.
    pub fn from_hash(hash: &str) -> Option<Page> {
        Page::from_slug(hash.strip_prefix('#').unwrap_or(hash))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_parsing_accepts_known_pages() {
        assert_eq!(Page::from_hash("#about"), Some(Page::About));
        assert_eq!(Page::from_hash("contact"), Some(Page::Contact));
        assert_eq!(Page::from_hash("#home"), Some(Page::Home));
    }

    #[test]
    fn hash_parsing_rejects_unknown_values() {
        assert_eq!(Page::from_hash("#shop"), None);
        assert_eq!(Page::from_hash(""), None);
        assert_eq!(Page::from_hash("#"), None);
    }

    #[test]
    fn section_ids_follow_the_dom_contract() {
        assert_eq!(Page::About.section_id(), "page-about");
        assert_eq!(Page::Home.hash(), "#home");
    }
}
