// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::Path;

use hr_fixtures_domain::Gender;

use crate::{
    GenerationError, NameGenerator, PooledNameGenerator, RandomStream, SimpleNameGenerator,
    select_name_generator,
};

const SINGLE_NAME_POOL: &str = r#"{
    "surnames": [{ "name": "김", "weight": 1 }, { "name": "배", "weight": 0 }],
    "given_names": { "male": ["민준"], "female": ["서연"] }
}"#;

#[test]
fn test_simple_names_are_korean_syllables() {
    let mut rng: RandomStream = RandomStream::seeded(1);
    for gender in [Gender::Male, Gender::Female] {
        let name: String = SimpleNameGenerator.name(gender, &mut rng).unwrap();
        assert!(name.chars().count() >= 2);
        assert!(name.chars().all(|ch| ('가'..='힣').contains(&ch)));
    }
}

#[test]
fn test_pooled_generator_uses_gendered_lists() {
    let generator: PooledNameGenerator = PooledNameGenerator::from_json(SINGLE_NAME_POOL).unwrap();
    let mut rng: RandomStream = RandomStream::seeded(2);
    for _ in 0..20 {
        assert_eq!(generator.name(Gender::Male, &mut rng).unwrap(), "김민준");
        assert_eq!(generator.name(Gender::Female, &mut rng).unwrap(), "김서연");
    }
}

#[test]
fn test_embedded_pool_parses() {
    let generator: PooledNameGenerator = PooledNameGenerator::embedded().unwrap();
    let mut rng: RandomStream = RandomStream::seeded(3);
    let name: String = generator.name(Gender::Female, &mut rng).unwrap();
    assert!(!name.is_empty());
}

#[test]
fn test_incomplete_pool_is_rejected() {
    let json: &str = r#"{
        "surnames": [{ "name": "김", "weight": 1 }],
        "given_names": { "male": ["민준"], "female": [] }
    }"#;
    let result: Result<PooledNameGenerator, GenerationError> = PooledNameGenerator::from_json(json);
    assert!(matches!(
        result,
        Err(GenerationError::IncompleteAsset { .. })
    ));
}

#[test]
fn test_malformed_pool_is_an_asset_error() {
    let result: Result<PooledNameGenerator, GenerationError> =
        PooledNameGenerator::from_json("[]");
    assert!(matches!(result, Err(GenerationError::Asset { .. })));
}

#[test]
fn test_missing_pool_file_falls_back_to_simple_names() {
    let generator: Box<dyn NameGenerator> =
        select_name_generator(Some(Path::new("/nonexistent/names_ko.json")));
    let mut rng: RandomStream = RandomStream::seeded(4);
    let name: String = generator.name(Gender::Male, &mut rng).unwrap();
    assert!(!name.is_empty());
}
