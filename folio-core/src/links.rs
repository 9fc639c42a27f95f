//! Outbound link handling.
//!
//! Google Drive share links embed poorly; their `/view` page is swapped
//! for the `/preview` endpoint and the sharing parameter is dropped.
//! Everything else passes through untouched.

/// Rewrite a hosted-certificate link into its embeddable form. Only Drive
/// links are touched: the first `/view` segment becomes `/preview` and a
/// `?usp=sharing` parameter is removed. Other providers and other query
/// parameters (e.g. `?usp=drive_link`) are left alone.
pub fn embed_link(link: &str) -> String {
    if link.contains("drive.google.com") {
        link.replacen("/view", "/preview", 1)
            .replacen("?usp=sharing", "", 1)
    } else {
        link.to_string()
    }
}

/// Resolver URL for a DOI or registration identifier.
pub fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{doi}")
}

/// `mailto:` form of an address for the footer call-to-action.
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_view_link_rewritten() {
        assert_eq!(
            embed_link("https://drive.google.com/file/d/abc123/view"),
            "https://drive.google.com/file/d/abc123/preview"
        );
    }

    #[test]
    fn test_drive_sharing_parameter_stripped() {
        assert_eq!(
            embed_link("https://drive.google.com/file/d/abc123/view?usp=sharing"),
            "https://drive.google.com/file/d/abc123/preview"
        );
    }

    #[test]
    fn test_drive_link_parameter_kept() {
        assert_eq!(
            embed_link("https://drive.google.com/file/d/abc123/view?usp=drive_link"),
            "https://drive.google.com/file/d/abc123/preview?usp=drive_link"
        );
    }

    #[test]
    fn test_non_drive_link_passes_through() {
        assert_eq!(
            embed_link("https://example.com/cert/view?usp=sharing"),
            "https://example.com/cert/view?usp=sharing"
        );
    }

    #[test]
    fn test_doi_url() {
        assert_eq!(
            doi_url("10.5815/ijeme.2025.01.02"),
            "https://doi.org/10.5815/ijeme.2025.01.02"
        );
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("ap.spandana@gmail.com"), "mailto:ap.spandana@gmail.com");
    }
}
