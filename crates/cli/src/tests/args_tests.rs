// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use clap::Parser;
use hr_fixtures::GeneratorConfig;
use time::macros::date;

use crate::{Args, parse_date};

#[test]
fn test_as_of_and_output_dir_are_applied() {
    let args: Args = Args::try_parse_from([
        "hr-fixtures",
        "--output-dir",
        "out",
        "--seed",
        "7",
        "--as-of",
        "2023-06-30",
    ])
    .unwrap();
    let config: GeneratorConfig = args.config();

    assert_eq!(args.output_dir, PathBuf::from("out"));
    assert_eq!(config.seed, 7);
    assert_eq!(config.as_of, date!(2023 - 06 - 30));
    assert_eq!(config.review_start_year, GeneratorConfig::default().review_start_year);
}

#[test]
fn test_missing_as_of_keeps_default() {
    let args: Args = Args::try_parse_from(["hr-fixtures", "--seed", "3"]).unwrap();
    let config: GeneratorConfig = args.config();
    assert_eq!(config.as_of, GeneratorConfig::default().as_of);
    assert_eq!(config.name_pool, None);
}

#[test]
fn test_name_pool_path_is_passed_through() {
    let args: Args =
        Args::try_parse_from(["hr-fixtures", "--name-pool", "pool.json", "--seed", "1"]).unwrap();
    assert_eq!(args.config().name_pool, Some(PathBuf::from("pool.json")));
}

#[test]
fn test_malformed_as_of_is_rejected() {
    assert!(parse_date("2024/12/15").is_err());
    assert!(parse_date("2024-02-30").is_err());
    assert!(Args::try_parse_from(["hr-fixtures", "--as-of", "yesterday"]).is_err());
}
