use folio_core::{
    content::ContentStore,
    models::{presentation::PresentationMode, section_types::SectionType},
    progress::is_entry_active,
};
use folio_viz::{SectionContent, SectionEngine};

#[test]
fn test_experience_section() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Experience section generation...");

    let store = ContentStore::builtin();
    let engine = SectionEngine::new();

    let section = engine.generate_section(SectionType::Experience, &store, PresentationMode::Gallery)?;
    println!("Experience section generated successfully");

    assert_eq!(section.title, "Experience");
    assert_eq!(section.anchor, "experience");

    match &section.content {
        SectionContent::Experience { cards, show_links } => {
            println!("✅ Experience content validated:");
            println!("  - Cards: {}", cards.len());
            println!("  - Show links: {}", show_links);

            assert_eq!(cards.len(), 5);
            assert!(!show_links);

            // Cards are numbered 1..=N for the giant background numbering
            for (idx, card) in cards.iter().enumerate() {
                assert_eq!(card.number, idx + 1);
                assert!(!card.bullets.is_empty());
            }

            // Thresholds form the step function i/(N-1)*100
            assert_eq!(cards[0].threshold, 0.0);
            assert_eq!(cards[2].threshold, 50.0);
            assert_eq!(cards[4].threshold, 100.0);

            // Bullets are whitespace-normalized for single-line layout math
            for card in cards {
                for bullet in &card.bullets {
                    assert!(!bullet.contains('\n'));
                    assert_eq!(bullet.trim(), bullet);
                }
            }
        }
        other => panic!("Expected Experience content, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn test_entry_activation_against_generated_thresholds() -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();
    let section = engine.generate_section(SectionType::Experience, &store, PresentationMode::Gallery)?;

    let SectionContent::Experience { cards, .. } = &section.content else {
        panic!("Expected Experience content");
    };
    let count = cards.len();

    // At 50% exactly the first three of five entries are active
    let active: Vec<bool> = (0..count).map(|i| is_entry_active(50.0, i, count)).collect();
    assert_eq!(active, vec![true, true, true, false, false]);

    // At 0% only the first entry is active; at 100% all are
    assert!(is_entry_active(0.0, 0, count));
    assert!(!is_entry_active(0.0, 1, count));
    assert!((0..count).all(|i| is_entry_active(100.0, i, count)));

    Ok(())
}

#[test]
fn test_studio_mode_shows_experience_links() -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::builtin();
    let engine = SectionEngine::new();

    let section = engine.generate_section(SectionType::Experience, &store, PresentationMode::Studio)?;
    assert_eq!(section.anchor, "work");

    match &section.content {
        SectionContent::Experience { cards, show_links } => {
            assert!(show_links);
            // The first card carries the DDPU link from the store
            assert_eq!(cards[0].link.as_deref(), Some("https://ddpusouth.co.in/"));
        }
        other => panic!("Expected Experience content, got: {:?}", other),
    }

    Ok(())
}
