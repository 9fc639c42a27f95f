use folio_core::{
    content::ContentStore,
    models::{presentation::PresentationMode, section_types::SectionType},
};
use folio_viz::{
    Accent, CardSide, ProjectSlot, SectionContent, SectionEngine, AWARD_ACCENTS, RESEARCH_ACCENTS,
};

#[test]
fn test_projects_gallery_rhythm() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Projects section generation...");

    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section = engine.generate_section(SectionType::Projects, &store, PresentationMode::Gallery)?;

    match &section.content {
        SectionContent::Projects { cards } => {
            assert_eq!(cards.len(), 6);

            // Slots 0 and 3 are featured, everything else standard
            for (idx, card) in cards.iter().enumerate() {
                let expected = if idx == 0 || idx == 3 {
                    ProjectSlot::Featured
                } else {
                    ProjectSlot::Standard
                };
                assert_eq!(card.slot, expected, "slot mismatch at index {}", idx);
            }

            assert_eq!(cards[0].caption, "Featured Project");
            assert_eq!(cards[1].caption, "Website Template");

            // Visit falls back to the GitHub URL when no live link exists
            let verbal = cards.iter().find(|c| c.title.starts_with("Verbal")).unwrap();
            assert_eq!(verbal.visit_url, verbal.github);

            let greenloop = &cards[0];
            assert!(greenloop.visit_url.as_deref().unwrap().contains("streamlit.app"));
        }
        other => panic!("Expected Projects content, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn test_awards_accent_cycle_and_sides() -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section = engine.generate_section(SectionType::Awards, &store, PresentationMode::Gallery)?;

    match &section.content {
        SectionContent::Awards { cards } => {
            assert_eq!(cards.len(), 4);

            for (idx, card) in cards.iter().enumerate() {
                assert_eq!(card.accent, AWARD_ACCENTS[idx % AWARD_ACCENTS.len()]);
                let expected_side = if idx % 2 == 0 { CardSide::Left } else { CardSide::Right };
                assert_eq!(card.side, expected_side);
            }

            assert_eq!(cards[0].accent, Accent::Blue);
            assert_eq!(cards[3].accent, Accent::Purple);
        }
        other => panic!("Expected Awards content, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn test_research_identifiers_and_doi_urls() -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section = engine.generate_section(SectionType::Research, &store, PresentationMode::Gallery)?;

    match &section.content {
        SectionContent::Research { cards } => {
            assert_eq!(cards.len(), 6);

            for (idx, card) in cards.iter().enumerate() {
                assert_eq!(card.accent, RESEARCH_ACCENTS[idx % RESEARCH_ACCENTS.len()]);
            }

            let ijeme = cards
                .iter()
                .find(|c| c.identifier == "10.5815/ijeme.2025.01.02")
                .unwrap();
            assert_eq!(
                ijeme.doi_url.as_deref(),
                Some("https://doi.org/10.5815/ijeme.2025.01.02")
            );
        }
        other => panic!("Expected Research content, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn test_education_milestones() -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section = engine.generate_section(SectionType::Education, &store, PresentationMode::Gallery)?;

    match &section.content {
        SectionContent::Education { cards } => {
            assert_eq!(cards.len(), 3);

            // Current entry badges as NOW; older ones use the start year
            assert_eq!(cards[0].milestone, "NOW");
            assert_eq!(cards[1].milestone, "2020");
            assert_eq!(cards[2].milestone, "2008");
        }
        other => panic!("Expected Education content, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn test_footer_links() -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section = engine.generate_section(SectionType::Footer, &store, PresentationMode::Gallery)?;

    match &section.content {
        SectionContent::Footer {
            heading,
            email,
            resume,
            social,
            hire_me,
            ..
        } => {
            assert_eq!(heading, "Ready for new challenges.");
            assert_eq!(email.url, "mailto:ap.spandana@gmail.com");
            assert_eq!(resume.url, "/Spandana_AP.pdf");
            assert_eq!(social.len(), 2);
            assert!(hire_me.is_none());
        }
        other => panic!("Expected Footer content, got: {:?}", other),
    }

    Ok(())
}
