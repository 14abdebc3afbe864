// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use hr_fixtures_domain::{CultureTier, Grade};

use crate::template::Expander;
use crate::{Catalog, GenerationError, RandomStream, SKILL_CAMPAIGN_SIZE};

const NARRATIVES: &str = include_str!("../../assets/narratives.json");

#[test]
fn test_embedded_assets_parse() {
    let catalog: Catalog = Catalog::embedded().unwrap();
    let codes: HashSet<&str> = catalog
        .metrics
        .iter()
        .map(|metric| metric.metric_code.as_str())
        .collect();

    assert_eq!(codes.len(), catalog.metrics.len(), "duplicate metric codes");
    assert!(catalog.skill_codes().len() >= SKILL_CAMPAIGN_SIZE);
    assert!(!catalog.leadership_codes().is_empty());
    assert!(
        catalog
            .leadership_codes()
            .iter()
            .all(|code| code.starts_with("LEAD_"))
    );
}

#[test]
fn test_manager_comments_fall_back_to_b() {
    let catalog: Catalog = Catalog::embedded().unwrap();
    assert_eq!(
        catalog.manager_comments(Grade::D).unwrap(),
        catalog.manager_comments(Grade::B).unwrap()
    );
    assert_ne!(
        catalog.manager_comments(Grade::S).unwrap(),
        catalog.manager_comments(Grade::B).unwrap()
    );
}

#[test]
fn test_every_embedded_template_expands() {
    let catalog: Catalog = Catalog::embedded().unwrap();
    let bindings: [(&str, &str); 2] = [("primary", "보상 불만"), ("secondary", "경력 정체")];
    let expander: Expander<'_> = catalog.expander().with_bindings(&bindings);
    let narratives = &catalog.narratives;
    let mut rng: RandomStream = RandomStream::seeded(8);

    let mut templates: Vec<&String> = Vec::new();
    templates.extend(&narratives.recruitment.interviewer_comments);
    templates.extend(&narratives.projects.pm_feedback);
    templates.extend(&narratives.projects.peer_feedback);
    templates.extend(&narratives.continuous_review.self_comments);
    templates.extend(&narratives.exit_feedback);
    templates.extend(&narratives.meetings.action_items);
    for category in &narratives.goals.categories {
        templates.extend(&category.descriptions);
    }
    for grade in [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D] {
        templates.extend(catalog.performance_comments(grade).unwrap());
        templates.extend(catalog.manager_comments(grade).unwrap());
    }
    for (tier, _) in CultureTier::WEIGHTED {
        templates.extend(catalog.culture_comments(tier).unwrap());
    }

    for template in templates {
        let expanded: String = expander.expand(template, &mut rng).unwrap();
        assert!(!expanded.contains('{'), "{template} left a slot behind");
    }
}

#[test]
fn test_malformed_metrics_are_an_asset_error() {
    let result: Result<Catalog, GenerationError> = Catalog::from_json("{ not json", NARRATIVES);
    assert!(matches!(
        result,
        Err(GenerationError::Asset {
            asset: "metrics.json",
            ..
        })
    ));
}

#[test]
fn test_metrics_without_skills_are_incomplete() {
    let metrics: &str = r#"{"metrics": [{
        "metric_code": "LEAD_001",
        "metric_name": "비전 제시",
        "tool_name": "360",
        "dimension": "리더십",
        "definition": "방향을 제시한다",
        "measurement_scale": "1-5",
        "high_score_characteristics": "명확함",
        "low_score_characteristics": "모호함"
    }]}"#;
    let result: Result<Catalog, GenerationError> = Catalog::from_json(metrics, NARRATIVES);
    assert!(matches!(
        result,
        Err(GenerationError::IncompleteAsset { .. })
    ));
}
