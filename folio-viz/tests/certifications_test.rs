use folio_core::{
    content::ContentStore,
    modal::CertificateSelection,
    models::{presentation::PresentationMode, section_types::SectionType},
};
use folio_viz::{SectionContent, SectionEngine};

#[test]
fn test_certifications_section() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Certifications section generation...");

    let store = ContentStore::builtin();
    let engine = SectionEngine::new();

    let section =
        engine.generate_section(SectionType::Certifications, &store, PresentationMode::Gallery)?;

    match &section.content {
        SectionContent::Certifications { cards } => {
            println!("✅ Certifications content validated:");
            println!("  - Cards: {}", cards.len());

            assert_eq!(cards.len(), 6);

            // Every Drive-hosted certificate embeds through /preview
            for card in cards {
                let url = card.embed_url.as_deref().unwrap();
                println!("  - {} -> {}", card.name, url);
                assert!(url.contains("/preview"));
                assert!(!url.contains("/view"));
                assert!(!url.contains("usp=sharing"));
            }

            // The NPTEL (IITK) cert used ?usp=drive_link, which survives
            let iitk = cards
                .iter()
                .find(|c| c.issuer == "NPTEL (IITK)")
                .expect("IITK certification present");
            assert!(iitk.embed_url.as_deref().unwrap().contains("usp=drive_link"));
        }
        other => panic!("Expected Certifications content, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn test_modal_selection_round_trip() {
    let store = ContentStore::builtin();
    let mut selection = CertificateSelection::new();

    // Selecting certificate X sets the reference to X
    selection.select(3, &store);
    assert_eq!(selection.index(), Some(3));
    let cert = selection.certificate(&store).unwrap();
    assert_eq!(cert.issuer, "Udemy");

    // The modal embeds the rewritten link
    let url = selection.embed_url(&store).unwrap();
    assert!(url.ends_with("/preview"));

    // Backdrop / close resets to none
    selection.clear();
    assert_eq!(selection.index(), None);
    assert!(selection.embed_url(&store).is_none());
}

#[test]
fn test_modal_embed_matches_card_embed() -> Result<(), Box<dyn std::error::Error>> {
    // The cards and the overlay must agree on the embed rewrite
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section =
        engine.generate_section(SectionType::Certifications, &store, PresentationMode::Gallery)?;

    let SectionContent::Certifications { cards } = &section.content else {
        panic!("Expected Certifications content");
    };

    let mut selection = CertificateSelection::new();
    for (idx, card) in cards.iter().enumerate() {
        selection.select(idx, &store);
        assert_eq!(selection.embed_url(&store), card.embed_url);
    }

    Ok(())
}
