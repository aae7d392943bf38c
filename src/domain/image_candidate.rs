const INLINE_DATA_SCHEME: &str = "data:";

/// True when the reference embeds the image bytes instead of pointing at them
pub fn is_inline_data(reference: &str) -> bool {
    reference.trim_start().starts_with(INLINE_DATA_SCHEME)
}

/// One image result scraped from a search page, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCandidate {
    /// `src` attribute
    pub primary: Option<String>,
    /// `data-src` attribute, used by lazy-loaded results
    pub secondary: Option<String>,
}

impl ImageCandidate {
    pub fn new(primary: Option<String>, secondary: Option<String>) -> Self {
        Self { primary, secondary }
    }

    /// Primary reference if it can be downloaded directly
    pub fn usable_primary(&self) -> Option<&str> {
        usable(self.primary.as_deref())
    }

    /// Secondary reference if it can be downloaded directly
    pub fn usable_secondary(&self) -> Option<&str> {
        usable(self.secondary.as_deref())
    }
}

fn usable(reference: Option<&str>) -> Option<&str> {
    reference.filter(|r| !r.trim().is_empty() && !is_inline_data(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_data_detection() {
        assert!(is_inline_data("data:image/gif;base64,R0lGODlhAQABAIAAAP"));
        assert!(!is_inline_data("https://tse1.mm.bing.net/th?id=OIP.abc"));
    }

    #[test]
    fn test_usable_references() {
        let candidate = ImageCandidate::new(
            Some("data:image/png;base64,iVBOR".to_string()),
            Some("https://example.com/burger.jpg".to_string()),
        );
        assert_eq!(candidate.usable_primary(), None);
        assert_eq!(candidate.usable_secondary(), Some("https://example.com/burger.jpg"));

        let empty = ImageCandidate::new(Some("  ".to_string()), None);
        assert_eq!(empty.usable_primary(), None);
        assert_eq!(empty.usable_secondary(), None);
    }
}
