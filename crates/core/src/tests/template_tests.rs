// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::template::Expander;
use crate::{GenerationError, RandomStream};

fn fragments() -> BTreeMap<String, Vec<String>> {
    let mut pools: BTreeMap<String, Vec<String>> = BTreeMap::new();
    pools.insert(String::from("skill"), vec![String::from("문제 해결")]);
    pools.insert(
        String::from("nested"),
        vec![String::from("{@skill} 역량 {3-3}점")],
    );
    pools.insert(String::from("loop"), vec![String::from("{@loop}")]);
    pools
}

#[test]
fn test_plain_text_is_copied() {
    let pools: BTreeMap<String, Vec<String>> = fragments();
    let mut rng: RandomStream = RandomStream::seeded(1);
    let expanded: String = Expander::new(&pools)
        .expand("변경 없음", &mut rng)
        .unwrap();
    assert_eq!(expanded, "변경 없음");
}

#[test]
fn test_alternatives_pick_one_option() {
    let pools: BTreeMap<String, Vec<String>> = fragments();
    let mut rng: RandomStream = RandomStream::seeded(2);
    for _ in 0..50 {
        let expanded: String = Expander::new(&pools)
            .expand("결과: {좋음|보통}", &mut rng)
            .unwrap();
        assert!(expanded == "결과: 좋음" || expanded == "결과: 보통");
    }
}

#[test]
fn test_numeric_range_and_nested_pools() {
    let pools: BTreeMap<String, Vec<String>> = fragments();
    let mut rng: RandomStream = RandomStream::seeded(3);
    let expanded: String = Expander::new(&pools)
        .expand("[{@nested}]", &mut rng)
        .unwrap();
    assert_eq!(expanded, "[문제 해결 역량 3점]");
}

#[test]
fn test_bindings_fill_named_slots() {
    let pools: BTreeMap<String, Vec<String>> = fragments();
    let bindings: [(&str, &str); 2] = [("primary", "연봉"), ("secondary", "이동")];
    let mut rng: RandomStream = RandomStream::seeded(4);
    let expanded: String = Expander::new(&pools)
        .with_bindings(&bindings)
        .expand("{$primary} 때문이고 {$secondary}도 있었다", &mut rng)
        .unwrap();
    assert_eq!(expanded, "연봉 때문이고 이동도 있었다");
}

#[test]
fn test_malformed_templates_are_rejected() {
    let pools: BTreeMap<String, Vec<String>> = fragments();
    let expander: Expander<'_> = Expander::new(&pools);
    let mut rng: RandomStream = RandomStream::seeded(5);

    for template in ["열린 {슬롯", "{@missing}", "{$unbound}", "{@loop}"] {
        let result: Result<String, GenerationError> = expander.expand(template, &mut rng);
        assert!(
            matches!(result, Err(GenerationError::Template { .. })),
            "{template} should be rejected"
        );
    }
}

#[test]
fn test_expand_any_requires_templates() {
    let pools: BTreeMap<String, Vec<String>> = fragments();
    let mut rng: RandomStream = RandomStream::seeded(6);
    let result: Result<String, GenerationError> =
        Expander::new(&pools).expand_any("empty", &[], &mut rng);
    assert!(matches!(result, Err(GenerationError::Domain(_))));
}
