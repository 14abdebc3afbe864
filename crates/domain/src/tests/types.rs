// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EmployeeId, EmploymentStatus, Grade, JobTitle};

#[test]
fn test_employee_id_numbering() {
    let id: EmployeeId = EmployeeId::numbered("TL", 3);
    assert_eq!(id.value(), "TL003");
    assert_eq!(format!("{id}"), "TL003");
}

#[test]
fn test_job_title_levels_are_strictly_increasing() {
    let levels: Vec<u8> = JobTitle::ALL.iter().map(JobTitle::level).collect();
    assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(levels.first(), Some(&1));
    assert_eq!(levels.last(), Some(&10));
}

#[test]
fn test_job_title_from_level_round_trips() {
    for title in JobTitle::ALL {
        assert_eq!(JobTitle::from_level(title.level()), Some(title));
    }
    assert_eq!(JobTitle::from_level(0), None);
    assert_eq!(JobTitle::from_level(11), None);
}

#[test]
fn test_job_title_serializes_as_korean_label() {
    let json: String = serde_json::to_string(&JobTitle::DivisionHead).unwrap();
    assert_eq!(json, "\"본부장\"");
    assert_eq!(JobTitle::DivisionHead.as_str(), "본부장");
}

#[test]
fn test_initial_title_choices_never_exceed_current_title() {
    for title in JobTitle::ALL {
        for initial in title.initial_title_choices() {
            assert!(initial.level() <= title.level(), "{initial} above {title}");
        }
    }
    assert_eq!(JobTitle::Ceo.initial_title_choices(), &[JobTitle::Ceo]);
    assert_eq!(JobTitle::SeniorStaff.initial_title_choices(), &[JobTitle::Staff]);
}

#[test]
fn test_cpi_leadership_bonus_by_title() {
    assert_eq!(JobTitle::TeamLead.cpi_leadership_bonus(), 8);
    assert_eq!(JobTitle::Ceo.cpi_leadership_bonus(), 8);
    assert_eq!(JobTitle::GeneralManager.cpi_leadership_bonus(), 5);
    assert_eq!(JobTitle::DeputyGeneralManager.cpi_leadership_bonus(), 5);
    assert_eq!(JobTitle::Director.cpi_leadership_bonus(), 0);
    assert_eq!(JobTitle::Staff.cpi_leadership_bonus(), 0);
}

#[test]
fn test_salary_bands_are_ordered() {
    for title in JobTitle::ALL {
        let (low, high): (u64, u64) = title.salary_band();
        assert!(low < high);
    }
}

#[test]
fn test_grade_scores() {
    let scores: Vec<u8> = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D]
        .iter()
        .map(Grade::score)
        .collect();
    assert_eq!(scores, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_employment_status_labels() {
    assert_eq!(EmploymentStatus::Active.as_str(), "재직");
    assert_eq!(EmploymentStatus::Separated.as_str(), "퇴사");
}
