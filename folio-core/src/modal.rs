//! Certificate selection state for the detail overlay.
//!
//! At most one certificate is selected at a time. Selecting renders the
//! overlay with the certificate's embeddable link; closing (backdrop or
//! close control) resets the selection. No other transitions exist.

use crate::content::ContentStore;
use crate::links::embed_link;
use crate::models::Certification;

/// Holder of the selected-certificate reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CertificateSelection {
    selected: Option<usize>,
}

impl CertificateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the certificate at `index` if it exists in the store.
    pub fn select(&mut self, index: usize, store: &ContentStore) {
        if index < store.certifications.len() {
            self.selected = Some(index);
        }
    }

    /// Close the overlay.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Index of the selected certificate, if any.
    pub fn index(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected certificate record.
    pub fn certificate<'a>(&self, store: &'a ContentStore) -> Option<&'a Certification> {
        store.certifications.get(self.selected?)
    }

    /// Embeddable link for the selected certificate (Drive share links are
    /// rewritten to their preview form).
    pub fn embed_url(&self, store: &ContentStore) -> Option<String> {
        let cert = self.certificate(store)?;
        cert.link.as_deref().map(embed_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear() {
        let store = ContentStore::builtin();
        let mut selection = CertificateSelection::new();
        assert!(!selection.is_open());

        selection.select(1, &store);
        assert!(selection.is_open());
        assert_eq!(selection.index(), Some(1));
        assert_eq!(
            selection.certificate(&store).map(|c| c.name.as_str()),
            Some("Machine Learning for Engineering and Science Applications")
        );

        selection.clear();
        assert!(!selection.is_open());
        assert_eq!(selection.certificate(&store), None);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let store = ContentStore::builtin();
        let mut selection = CertificateSelection::new();
        selection.select(999, &store);
        assert!(!selection.is_open());
    }

    #[test]
    fn test_embed_url_rewrites_drive_links() {
        let store = ContentStore::builtin();
        let mut selection = CertificateSelection::new();

        // "The Complete Prompt Engineering" cert carries a ?usp=sharing link
        selection.select(3, &store);
        let url = selection.embed_url(&store).unwrap();
        assert!(url.ends_with("/preview"));
        assert!(!url.contains("usp=sharing"));
    }
}
