//! End-to-end tests for analysis and report generation.

use chrono::{TimeZone, Utc};
use regex::Regex;

use portrait::parser::{map_to_canonical, segment, SectionSource};
use portrait::{
    analyze, generate_fallback_report, generate_report, Error, Portrait, ReportSection,
    SegmentOptions, SplitStrategy, SubjectProfile, CANONICAL_SECTIONS,
};

fn profile(name: &str) -> SubjectProfile {
    SubjectProfile::new(
        name,
        "contact@example.com",
        "Industrie",
        "Responsable de production",
        "Prendre la direction d'une usine",
    )
}

fn wall_of_text(len: usize) -> String {
    "Le marché évolue rapidement et les compétences numériques deviennent essentielles pour chacun. "
        .repeat(40)
        .chars()
        .take(len)
        .collect()
}

fn structured_bodies() -> Vec<String> {
    (1..=7)
        .map(|i| {
            format!(
                "Contenu rédigé pour la partie {} avec suffisamment de détails pour être retenu.",
                i
            )
        })
        .collect()
}

#[test]
fn test_fully_structured_input_is_kept_verbatim() {
    let bodies = structured_bodies();
    let text: String = CANONICAL_SECTIONS
        .iter()
        .zip(&bodies)
        .map(|(title, body)| format!("## {}\n{}\n\n", title, body))
        .collect();

    let detected = segment(&text);
    assert_eq!(detected.len(), 7);

    let mapped = map_to_canonical(&detected, &CANONICAL_SECTIONS);
    assert_eq!(mapped.len(), 7);
    for ((section, title), body) in mapped.iter().zip(CANONICAL_SECTIONS).zip(&bodies) {
        assert_eq!(section.title, title);
        assert_eq!(&section.content, body);
    }
}

#[test]
fn test_wall_of_text_is_forced_into_canonical_slices() {
    let text = wall_of_text(2000);
    assert_eq!(text.chars().count(), 2000);

    let seg = analyze(&text, &SegmentOptions::default()).unwrap();
    assert_eq!(seg.strategy, SplitStrategy::Forced);
    assert_eq!(seg.detected.len(), 7);
    assert_eq!(seg.coverage, 1.0);

    let lengths: Vec<usize> = seg.detected.iter().map(ReportSection::content_len).collect();
    assert_eq!(lengths.iter().sum::<usize>(), 2000);
    let (min, max) = (lengths.iter().min().unwrap(), lengths.iter().max().unwrap());
    assert!(max - min <= 7, "slices {:?}", lengths);

    let joined: String = seg.detected.iter().map(|s| s.content.as_str()).collect();
    assert_eq!(joined, text);
    assert!(!seg.body.is_single_block());
}

#[test]
fn test_degenerate_match_yields_placeholder() {
    let detected = vec![ReportSection::new("Perspectives Futures", "Un avenir prometteur.")];
    let mapped = map_to_canonical(&detected, &CANONICAL_SECTIONS);
    assert_eq!(mapped[2].title, "PRÉDICTIONS 2025-2027");
    assert!(mapped[2].content.contains("en cours de génération par l'IA"));
    assert!(mapped.iter().all(|s| !s.content.trim().is_empty()));
}

#[test]
fn test_coverage_invariant_or_fallback() {
    let inputs = [
        wall_of_text(900),
        "## RÉSUMÉ EXÉCUTIF\nCourt.\n## ANALYSE\nAussi court.".to_string(),
        format!("## Annexe\n{}\n## Glossaire\n{}", wall_of_text(300), wall_of_text(300)),
        format!(
            "1. Résumé exécutif\n{}\n2. Plan d'action\n{}",
            wall_of_text(200),
            wall_of_text(200)
        ),
        format!(
            "INTRODUCTION GÉNÉRALE\n{}\nANALYSE DU PROFIL\n{}",
            wall_of_text(150),
            wall_of_text(150)
        ),
    ];
    for input in &inputs {
        let seg = analyze(input, &SegmentOptions::default()).unwrap();
        assert!(
            seg.body.is_single_block() || seg.coverage >= 0.8,
            "{:?} kept {:.2} without falling back",
            seg.strategy,
            seg.coverage
        );
        if let Some(sections) = seg.body.sections() {
            assert_eq!(sections.len(), 7);
        }
    }
}

#[test]
fn test_numbered_headings_with_preamble() {
    let text = format!(
        "# PORTRAIT PRÉDICTIF IA - Marc\n\n1. Résumé exécutif\n{}\n\n2. Analyse profil actuel\n{}",
        wall_of_text(400),
        wall_of_text(400)
    );
    let seg = analyze(&text, &SegmentOptions::default()).unwrap();
    assert_eq!(seg.strategy, SplitStrategy::NumberedHeadings);
    assert_eq!(seg.sources[0], SectionSource::Exact(0));
    assert_eq!(seg.sources[1], SectionSource::Exact(1));
    assert_eq!(seg.sources[2], SectionSource::Placeholder);
    assert!(!seg.body.is_single_block());
}

#[test]
fn test_uppercase_headings_are_mapped() {
    let body = wall_of_text(400);
    let text = [
        "RÉSUMÉ EXÉCUTIF",
        "ANALYSE PROFIL ACTUEL",
        "RECOMMANDATIONS STRATÉGIQUES",
        "OPPORTUNITÉS DE CROISSANCE",
    ]
    .iter()
    .map(|title| format!("{}\n{}\n", title, body))
    .collect::<String>();

    let seg = analyze(&text, &SegmentOptions::default()).unwrap();
    assert_eq!(seg.strategy, SplitStrategy::UppercaseHeadings);
    assert_eq!(seg.detected.len(), 4);
    assert!(seg.coverage >= 0.8, "coverage {:.2}", seg.coverage);
    assert_eq!(
        seg.sources,
        vec![
            SectionSource::Exact(0),
            SectionSource::Exact(1),
            SectionSource::Placeholder,
            SectionSource::Exact(2),
            SectionSource::Exact(3),
            SectionSource::Placeholder,
            SectionSource::Placeholder,
        ]
    );

    let sections = seg.body.sections().unwrap();
    assert_eq!(sections[3].title, "RECOMMANDATIONS STRATÉGIQUES");
    assert_eq!(sections[3].content, body);
}

#[test]
fn test_filename_shape() {
    let report = generate_report(&wall_of_text(600), &profile("Jean Dupont!")).unwrap();
    let re = Regex::new(r"^Portrait-Predictif-JeanDupont-\d+\.pdf$").unwrap();
    assert!(re.is_match(&report.filename), "{}", report.filename);
}

#[test]
fn test_generated_pdf_page_count() {
    let report = generate_report(&wall_of_text(2000), &profile("Alice")).unwrap();
    let pdf = lopdf::Document::load_mem(&report.data).unwrap();
    assert_eq!(pdf.get_pages().len() as u32, report.page_count);
    // Cover, contents, seven sections and the closing letter
    assert_eq!(report.page_count, 10);
}

#[test]
fn test_fallback_report_is_structured() {
    let report = generate_fallback_report(&profile("Bob")).unwrap();
    assert!(!report.single_block);
    assert!(report.page_count >= 10);
}

#[test]
fn test_missing_content_is_refused() {
    let err = generate_report(" \n``` ```\n ", &profile("Eve")).unwrap_err();
    assert!(matches!(err, Error::MissingContent));
}

#[test]
fn test_single_block_when_headings_lose_content() {
    let text = format!(
        "{}\n## Annexe A\n{}\n## Annexe B\n{}",
        wall_of_text(200),
        wall_of_text(400),
        wall_of_text(400)
    );
    let result = Portrait::new().layout(&text, &profile("Zoé")).unwrap();
    assert!(result.is_single_block());
    assert_eq!(result.document.contents.len(), 1);
    assert_eq!(result.document.contents[0].title, "CONTENU COMPLET");
}

#[test]
fn test_save_report() {
    let dir = tempfile::tempdir().unwrap();
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let report = Portrait::new()
        .with_generated_at(at)
        .generate(&wall_of_text(800), &profile("Camille"))
        .unwrap();

    let path = report.save(dir.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        format!("Portrait-Predictif-Camille-{}.pdf", at.timestamp_millis())
    );
    assert_eq!(std::fs::read(&path).unwrap(), report.data);
}
