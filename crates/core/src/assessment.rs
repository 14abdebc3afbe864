// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recruitment history and the pre-hire assessment chain.
//!
//! ## Invariants
//!
//! - `apply < interview < offer < hire` for every recruitment row
//! - `aptitude < cpi < mmpi < hire` for every employee
//! - Test rows carry the recruitment id when a recruitment row exists

use std::collections::HashMap;

use hr_fixtures_domain::serde_formats::iso_date;
use hr_fixtures_domain::{
    ClinicalScales, Employee, EmployeeId, EmploymentStatus, Grade, JobTitle, LifestyleType,
    OverallAdjustment, PassFail, RiskLevel, ValidityStatus, aptitude_grade,
};
use serde::Serialize;
use time::Date;
use tracing::{debug, info};

use crate::career::Careers;
use crate::catalog::Catalog;
use crate::error::GenerationError;
use crate::numbers::{mean, round1, whole};
use crate::random::RandomStream;
use crate::roster::Roster;
use crate::table::Record;

const SEPARATED_RECRUITMENT_SHARE: f64 = 0.7;
const INVALID_PROFILE_SHARE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecruitmentRecord {
    pub recruitment_id: String,
    pub employee_id: EmployeeId,
    pub position_title: JobTitle,
    #[serde(serialize_with = "iso_date::serialize")]
    pub apply_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub interview_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub offer_date: Date,
    #[serde(serialize_with = "iso_date::serialize")]
    pub hire_date: Date,
    pub recruitment_channel: String,
    pub interviewer_comment: String,
}

impl Record for RecruitmentRecord {
    const TABLE: &'static str = "06_recruitment_history";
    const COLUMNS: &'static [&'static str] = &[
        "recruitment_id",
        "employee_id",
        "position_title",
        "apply_date",
        "interview_date",
        "offer_date",
        "hire_date",
        "recruitment_channel",
        "interviewer_comment",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AptitudeResult {
    pub test_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub test_date: Date,
    pub recruitment_id: Option<String>,
    pub verbal_total: f64,
    pub verbal_vocab: i32,
    pub verbal_composition: i32,
    pub verbal_decoding: i32,
    pub verbal_english: i32,
    pub numerical_total: f64,
    pub numerical_quantity: i32,
    pub numerical_statistics: i32,
    pub numerical_logic: i32,
    pub situational_judgment: i32,
    pub social_knowledge: i32,
    pub interpersonal_skills: i32,
    pub overall_aptitude_score: f64,
    pub aptitude_grade: Grade,
    pub pass_fail_status: PassFail,
}

impl Record for AptitudeResult {
    const TABLE: &'static str = "07_recruitment_aptitude_results";
    const COLUMNS: &'static [&'static str] = &[
        "test_id",
        "employee_id",
        "test_date",
        "recruitment_id",
        "verbal_total",
        "verbal_vocab",
        "verbal_composition",
        "verbal_decoding",
        "verbal_english",
        "numerical_total",
        "numerical_quantity",
        "numerical_statistics",
        "numerical_logic",
        "situational_judgment",
        "social_knowledge",
        "interpersonal_skills",
        "overall_aptitude_score",
        "aptitude_grade",
        "pass_fail_status",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpiResult {
    pub test_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub test_date: Date,
    pub recruitment_id: Option<String>,
    pub dominance_do: i32,
    pub capacity_status_cs: i32,
    pub sociability_sy: i32,
    pub social_presence_sp: i32,
    pub self_acceptance_sa: i32,
    pub independence_in: i32,
    pub empathy_em: i32,
    pub responsibility_re: i32,
    pub socialization_so: i32,
    pub self_control_sc: i32,
    pub good_impression_gi: i32,
    pub communality_cm: i32,
    pub well_being_wb: i32,
    pub tolerance_to: i32,
    pub achievement_conformance_ac: i32,
    pub achievement_independence_ai: i32,
    pub intellectual_efficiency_ie: i32,
    pub psychological_mindedness_py: i32,
    pub flexibility_fx: i32,
    pub femininity_masculinity_fm: i32,
    pub vector_v1_extraversion: i32,
    pub vector_v2_norm_orientation: i32,
    pub vector_v3_self_realization: i32,
    pub lifestyle_type: LifestyleType,
    pub overall_cpi_score: f64,
}

impl Record for CpiResult {
    const TABLE: &'static str = "08_recruitment_cpi_results";
    const COLUMNS: &'static [&'static str] = &[
        "test_id",
        "employee_id",
        "test_date",
        "recruitment_id",
        "dominance_do",
        "capacity_status_cs",
        "sociability_sy",
        "social_presence_sp",
        "self_acceptance_sa",
        "independence_in",
        "empathy_em",
        "responsibility_re",
        "socialization_so",
        "self_control_sc",
        "good_impression_gi",
        "communality_cm",
        "well_being_wb",
        "tolerance_to",
        "achievement_conformance_ac",
        "achievement_independence_ai",
        "intellectual_efficiency_ie",
        "psychological_mindedness_py",
        "flexibility_fx",
        "femininity_masculinity_fm",
        "vector_v1_extraversion",
        "vector_v2_norm_orientation",
        "vector_v3_self_realization",
        "lifestyle_type",
        "overall_cpi_score",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MmpiResult {
    pub test_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub test_date: Date,
    pub recruitment_id: Option<String>,
    pub lie_scale_l: i32,
    pub frequency_scale_f: i32,
    pub correction_scale_k: i32,
    pub validity_status: ValidityStatus,
    pub hypochondriasis_hs: i32,
    pub depression_d: i32,
    pub hysteria_hy: i32,
    pub psychopathic_deviate_pd: i32,
    pub masculinity_femininity_mf: i32,
    pub paranoia_pa: i32,
    pub psychasthenia_pt: i32,
    pub schizophrenia_sc: i32,
    pub hypomania_ma: i32,
    pub social_introversion_si: i32,
    pub clinical_elevation_count: usize,
    pub risk_level: RiskLevel,
    pub overall_adjustment: OverallAdjustment,
}

impl Record for MmpiResult {
    const TABLE: &'static str = "09_recruitment_mmpi_results";
    const COLUMNS: &'static [&'static str] = &[
        "test_id",
        "employee_id",
        "test_date",
        "recruitment_id",
        "lie_scale_l",
        "frequency_scale_f",
        "correction_scale_k",
        "validity_status",
        "hypochondriasis_hs",
        "depression_d",
        "hysteria_hy",
        "psychopathic_deviate_pd",
        "masculinity_femininity_mf",
        "paranoia_pa",
        "psychasthenia_pt",
        "schizophrenia_sc",
        "hypomania_ma",
        "social_introversion_si",
        "clinical_elevation_count",
        "risk_level",
        "overall_adjustment",
    ];
}

/// Big-5 assessment taken shortly after hire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalTraits {
    pub trait_id: String,
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "iso_date::serialize")]
    pub assessment_date: Date,
    pub tool_name: &'static str,
    pub openness: i32,
    pub conscientiousness: i32,
    pub extraversion: i32,
    pub agreeableness: i32,
    pub neuroticism: i32,
    pub primary_strength: String,
    pub motivation_driver: String,
}

impl Record for PersonalTraits {
    const TABLE: &'static str = "05_personal_traits";
    const COLUMNS: &'static [&'static str] = &[
        "trait_id",
        "employee_id",
        "assessment_date",
        "tool_name",
        "openness",
        "conscientiousness",
        "extraversion",
        "agreeableness",
        "neuroticism",
        "primary_strength",
        "motivation_driver",
    ];
}

/// Output of the assessment stage.
#[derive(Debug, Clone, Default)]
pub struct Assessments {
    pub recruitment: Vec<RecruitmentRecord>,
    pub aptitude: Vec<AptitudeResult>,
    pub cpi: Vec<CpiResult>,
    pub mmpi: Vec<MmpiResult>,
    pub traits: Vec<PersonalTraits>,
}

/// Runs the recruitment, aptitude, CPI, MMPI and Big-5 generators in order.
///
/// # Errors
///
/// Returns an error if a draw or date computation fails.
pub fn run_assessments(
    roster: &Roster,
    careers: &Careers,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Assessments, GenerationError> {
    let recruitment: Vec<RecruitmentRecord> = build_recruitment(roster, careers, catalog, rng)?;
    let aptitude: Vec<AptitudeResult> = build_aptitude(roster, &recruitment, rng)?;
    let cpi: Vec<CpiResult> = build_cpi(roster, &aptitude, rng)?;
    let mmpi: Vec<MmpiResult> = build_mmpi(roster, &cpi, rng)?;
    let traits: Vec<PersonalTraits> = build_traits(roster, catalog, as_of, rng)?;

    info!(
        recruitment = recruitment.len(),
        aptitude = aptitude.len(),
        cpi = cpi.len(),
        mmpi = mmpi.len(),
        traits = traits.len(),
        "Built assessment chain"
    );
    Ok(Assessments {
        recruitment,
        aptitude,
        cpi,
        mmpi,
        traits,
    })
}

fn build_recruitment(
    roster: &Roster,
    careers: &Careers,
    catalog: &Catalog,
    rng: &mut RandomStream,
) -> Result<Vec<RecruitmentRecord>, GenerationError> {
    let narratives = &catalog.narratives.recruitment;
    let mut rows: Vec<RecruitmentRecord> = Vec::with_capacity(roster.len());

    for employee in roster.employees() {
        if !employee.is_active() && !rng.chance(SEPARATED_RECRUITMENT_SHARE) {
            continue;
        }
        let apply_date: Date = rng.date_after(employee.hire_date, -150, -60)?;
        let interview_date: Date = rng.date_after(apply_date, 14, 35)?;
        let offer_date: Date = rng.date_after(interview_date, 7, 21)?;
        let channels: &[String] = if employee.job_title.is_executive_hire() {
            &narratives.executive_channels
        } else {
            &narratives.channels
        };
        let recruitment_channel: String = rng.pick("recruitment_channels", channels)?.clone();
        let interviewer_comment: String = rng
            .pick("interviewer_comments", &narratives.interviewer_comments)?
            .clone();

        rows.push(RecruitmentRecord {
            recruitment_id: format!("REC{:04}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            position_title: careers.title_at(employee, employee.hire_date),
            apply_date,
            interview_date,
            offer_date,
            hire_date: employee.hire_date,
            recruitment_channel,
            interviewer_comment,
        });
    }
    Ok(rows)
}

/// Mean shifts by division for the verbal, numerical and situational factors.
fn division_emphasis(division_name: &str) -> (f64, f64, f64) {
    match division_name {
        "기술본부" => (0.0, 5.0, 3.0),
        "경영지원본부" => (5.0, 2.0, 5.0),
        "비즈니스본부" => (3.0, 0.0, 5.0),
        _ => (0.0, 0.0, 0.0),
    }
}

fn aptitude_score(rng: &mut RandomStream, mean: f64) -> i32 {
    whole(rng.clipped_normal(mean, 12.0, 30.0, 100.0))
}

fn t_score(rng: &mut RandomStream, mean: f64) -> i32 {
    whole(rng.clipped_normal(mean, 10.0, 20.0, 80.0))
}

fn average(scores: &[i32]) -> f64 {
    let values: Vec<f64> = scores.iter().copied().map(f64::from).collect();
    round1(mean(&values).unwrap_or_default())
}

fn build_aptitude(
    roster: &Roster,
    recruitment: &[RecruitmentRecord],
    rng: &mut RandomStream,
) -> Result<Vec<AptitudeResult>, GenerationError> {
    let by_employee: HashMap<&EmployeeId, &RecruitmentRecord> = recruitment
        .iter()
        .map(|row| (&row.employee_id, row))
        .collect();
    let mut rows: Vec<AptitudeResult> = Vec::with_capacity(roster.len());

    for employee in roster.employees() {
        let recruitment_row: Option<&&RecruitmentRecord> = by_employee.get(&employee.employee_id);
        let test_date: Date = match recruitment_row {
            Some(row) => rng.date_after(row.apply_date, 7, 14)?,
            None => {
                debug!(
                    employee_id = %employee.employee_id,
                    "No recruitment row, dating aptitude test from hire date"
                );
                rng.date_after(employee.hire_date, -60, -30)?
            }
        };

        let (verbal, numerical, situational) = division_emphasis(&employee.division_name);
        let shift: f64 = if employee.is_active() { 0.0 } else { -8.0 };

        let verbal_vocab: i32 = aptitude_score(rng, 75.0 + verbal + shift);
        let verbal_composition: i32 = aptitude_score(rng, 75.0 + verbal + shift);
        let verbal_decoding: i32 = aptitude_score(rng, 75.0 + verbal + shift);
        let verbal_english: i32 = aptitude_score(rng, 70.0 + verbal + shift);
        let numerical_quantity: i32 = aptitude_score(rng, 75.0 + numerical + shift);
        let numerical_statistics: i32 = aptitude_score(rng, 75.0 + numerical + shift);
        let numerical_logic: i32 = aptitude_score(rng, 75.0 + numerical + shift);
        let situational_judgment: i32 = aptitude_score(rng, 75.0 + situational + shift);
        let social_knowledge: i32 = aptitude_score(rng, 75.0 + shift);
        let interpersonal_skills: i32 = aptitude_score(rng, 75.0 + shift);

        let verbal_total: f64 = average(&[
            verbal_vocab,
            verbal_composition,
            verbal_decoding,
            verbal_english,
        ]);
        let numerical_total: f64 =
            average(&[numerical_quantity, numerical_statistics, numerical_logic]);
        let overall_aptitude_score: f64 = round1(
            (verbal_total
                + numerical_total
                + f64::from(situational_judgment)
                + f64::from(social_knowledge)
                + f64::from(interpersonal_skills))
                / 5.0,
        );
        let grade: Grade = aptitude_grade(overall_aptitude_score);

        rows.push(AptitudeResult {
            test_id: format!("APT{:04}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            test_date,
            recruitment_id: recruitment_row.map(|row| row.recruitment_id.clone()),
            verbal_total,
            verbal_vocab,
            verbal_composition,
            verbal_decoding,
            verbal_english,
            numerical_total,
            numerical_quantity,
            numerical_statistics,
            numerical_logic,
            situational_judgment,
            social_knowledge,
            interpersonal_skills,
            overall_aptitude_score,
            aptitude_grade: grade,
            pass_fail_status: PassFail::from_grade(grade),
        });
    }
    Ok(rows)
}

/// Test date and recruitment id carried forward from the previous test.
fn follow_up(
    employee: &Employee,
    previous: Option<(Date, Option<String>)>,
    after: (i64, i64),
    fallback_before_hire: (i64, i64),
    test: &str,
    rng: &mut RandomStream,
) -> Result<(Date, Option<String>), GenerationError> {
    if let Some((date, recruitment_id)) = previous {
        return Ok((rng.date_after(date, after.0, after.1)?, recruitment_id));
    }
    debug!(
        employee_id = %employee.employee_id,
        test,
        "No prior test row, dating from hire date"
    );
    let date: Date = rng.date_after(
        employee.hire_date,
        -fallback_before_hire.1,
        -fallback_before_hire.0,
    )?;
    Ok((date, None))
}

fn build_cpi(
    roster: &Roster,
    aptitude: &[AptitudeResult],
    rng: &mut RandomStream,
) -> Result<Vec<CpiResult>, GenerationError> {
    let by_employee: HashMap<&EmployeeId, &AptitudeResult> = aptitude
        .iter()
        .map(|row| (&row.employee_id, row))
        .collect();
    let mut rows: Vec<CpiResult> = Vec::with_capacity(roster.len());

    for employee in roster.employees() {
        let previous = by_employee
            .get(&employee.employee_id)
            .map(|row| (row.test_date, row.recruitment_id.clone()));
        let (test_date, recruitment_id) =
            follow_up(employee, previous, (3, 7), (20, 40), "cpi", rng)?;

        let separated: bool = employee.status == EmploymentStatus::Separated;
        let base: f64 = if separated { 45.0 } else { 50.0 };
        let well_being_shift: f64 = if separated { -10.0 } else { 0.0 };
        let responsibility_shift: f64 = if separated { -8.0 } else { 0.0 };
        let bonus: i32 = employee.job_title.cpi_leadership_bonus();
        let full_bonus: f64 = f64::from(bonus);
        let half_bonus: f64 = f64::from(bonus / 2);

        let dominance_do: i32 = t_score(rng, base + full_bonus);
        let capacity_status_cs: i32 = t_score(rng, base + full_bonus);
        let sociability_sy: i32 = t_score(rng, base);
        let social_presence_sp: i32 = t_score(rng, base + half_bonus);
        let self_acceptance_sa: i32 = t_score(rng, base);
        let independence_in: i32 = t_score(rng, base);
        let empathy_em: i32 = t_score(rng, base);
        let responsibility_re: i32 = t_score(rng, base + responsibility_shift);
        let socialization_so: i32 = t_score(rng, base);
        let self_control_sc: i32 = t_score(rng, base);
        let good_impression_gi: i32 = t_score(rng, base);
        let communality_cm: i32 = t_score(rng, base);
        let well_being_wb: i32 = t_score(rng, base + well_being_shift);
        let tolerance_to: i32 = t_score(rng, base);
        let achievement_conformance_ac: i32 = t_score(rng, base);
        let achievement_independence_ai: i32 = t_score(rng, base + half_bonus);
        let intellectual_efficiency_ie: i32 = t_score(rng, base);
        let psychological_mindedness_py: i32 = t_score(rng, base);
        let flexibility_fx: i32 = t_score(rng, base);
        let femininity_masculinity_fm: i32 = t_score(rng, base);
        let vector_v1_extraversion: i32 = t_score(rng, base);
        let vector_v2_norm_orientation: i32 = t_score(rng, base);
        let vector_v3_self_realization: i32 = t_score(rng, base);

        let overall_cpi_score: f64 = average(&[
            dominance_do,
            capacity_status_cs,
            sociability_sy,
            responsibility_re,
            socialization_so,
            self_control_sc,
            achievement_conformance_ac,
            achievement_independence_ai,
            intellectual_efficiency_ie,
        ]);

        rows.push(CpiResult {
            test_id: format!("CPI{:04}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            test_date,
            recruitment_id,
            dominance_do,
            capacity_status_cs,
            sociability_sy,
            social_presence_sp,
            self_acceptance_sa,
            independence_in,
            empathy_em,
            responsibility_re,
            socialization_so,
            self_control_sc,
            good_impression_gi,
            communality_cm,
            well_being_wb,
            tolerance_to,
            achievement_conformance_ac,
            achievement_independence_ai,
            intellectual_efficiency_ie,
            psychological_mindedness_py,
            flexibility_fx,
            femininity_masculinity_fm,
            vector_v1_extraversion,
            vector_v2_norm_orientation,
            vector_v3_self_realization,
            lifestyle_type: LifestyleType::from_vectors(
                vector_v1_extraversion,
                vector_v2_norm_orientation,
            ),
            overall_cpi_score,
        });
    }
    Ok(rows)
}

fn build_mmpi(
    roster: &Roster,
    cpi: &[CpiResult],
    rng: &mut RandomStream,
) -> Result<Vec<MmpiResult>, GenerationError> {
    let by_employee: HashMap<&EmployeeId, &CpiResult> =
        cpi.iter().map(|row| (&row.employee_id, row)).collect();
    let mut rows: Vec<MmpiResult> = Vec::with_capacity(roster.len());

    for employee in roster.employees() {
        let previous = by_employee
            .get(&employee.employee_id)
            .map(|row| (row.test_date, row.recruitment_id.clone()));
        let (test_date, recruitment_id) =
            follow_up(employee, previous, (1, 3), (15, 30), "mmpi", rng)?;

        let separated: bool = employee.status == EmploymentStatus::Separated;
        let strain: f64 = if separated { 5.0 } else { 0.0 };
        let depression: f64 = if separated { 10.0 } else { 0.0 };
        let anxiety: f64 = if separated { 8.0 } else { 0.0 };

        let lie_scale_l: i32 = whole(rng.clipped_normal(45.0, 8.0, 30.0, 70.0));
        let mut frequency_scale_f: i32 = whole(rng.clipped_normal(45.0, 8.0, 30.0, 75.0));
        let correction_scale_k: i32 = whole(rng.clipped_normal(50.0, 8.0, 35.0, 70.0));
        let validity_status: ValidityStatus = if rng.chance(INVALID_PROFILE_SHARE) {
            frequency_scale_f = whole(rng.clipped_normal(75.0, 10.0, 70.0, 90.0));
            ValidityStatus::Invalid
        } else {
            ValidityStatus::Valid
        };

        let scales: ClinicalScales = ClinicalScales {
            hs: t_score(rng, 50.0 + strain),
            d: t_score(rng, 50.0 + depression + strain),
            hy: t_score(rng, 50.0 + strain),
            pd: t_score(rng, 50.0 + strain),
            mf: t_score(rng, 50.0),
            pa: t_score(rng, 50.0 + anxiety + strain),
            pt: t_score(rng, 50.0 + anxiety + strain),
            sc: t_score(rng, 50.0 + strain),
            ma: t_score(rng, 50.0),
            si: t_score(rng, 50.0 + strain),
        };
        let risk_level: RiskLevel = scales.risk_level();

        rows.push(MmpiResult {
            test_id: format!("MMPI{:04}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            test_date,
            recruitment_id,
            lie_scale_l,
            frequency_scale_f,
            correction_scale_k,
            validity_status,
            hypochondriasis_hs: scales.hs,
            depression_d: scales.d,
            hysteria_hy: scales.hy,
            psychopathic_deviate_pd: scales.pd,
            masculinity_femininity_mf: scales.mf,
            paranoia_pa: scales.pa,
            psychasthenia_pt: scales.pt,
            schizophrenia_sc: scales.sc,
            hypomania_ma: scales.ma,
            social_introversion_si: scales.si,
            clinical_elevation_count: scales.elevation_count(),
            risk_level,
            overall_adjustment: OverallAdjustment::from_profile(risk_level, validity_status),
        });
    }
    Ok(rows)
}

/// Describes the strongest of the four positive Big-5 traits.
pub(crate) fn primary_strength(traits: [(&str, i32); 4]) -> String {
    let (name, score) = traits
        .into_iter()
        .fold(("", i32::MIN), |best, candidate| {
            if candidate.1 > best.1 { candidate } else { best }
        });
    match score {
        80.. => format!("매우 높은 {name}"),
        70..=79 => format!("높은 {name}"),
        _ => format!("{name} 우세"),
    }
}

fn build_traits(
    roster: &Roster,
    catalog: &Catalog,
    as_of: Date,
    rng: &mut RandomStream,
) -> Result<Vec<PersonalTraits>, GenerationError> {
    let mut rows: Vec<PersonalTraits> = Vec::new();

    for employee in roster.active() {
        let assessment_date: Date = rng.date_after(employee.hire_date, 30, 120)?;
        if assessment_date > as_of {
            continue;
        }
        let openness: i32 = whole(rng.clipped_normal(65.0, 15.0, 30.0, 100.0));
        let conscientiousness: i32 = whole(rng.clipped_normal(70.0, 12.0, 40.0, 100.0));
        let extraversion: i32 = whole(rng.clipped_normal(60.0, 18.0, 20.0, 100.0));
        let agreeableness: i32 = whole(rng.clipped_normal(68.0, 14.0, 35.0, 100.0));
        let neuroticism: i32 = whole(rng.clipped_normal(45.0, 16.0, 10.0, 90.0));
        let motivation_driver: String = rng
            .pick("motivation_drivers", &catalog.narratives.motivation_drivers)?
            .clone();

        rows.push(PersonalTraits {
            trait_id: format!("TRAIT{:03}", rows.len() + 1),
            employee_id: employee.employee_id.clone(),
            assessment_date,
            tool_name: "Big-5 성격검사",
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
            primary_strength: primary_strength([
                ("개방성", openness),
                ("성실성", conscientiousness),
                ("외향성", extraversion),
                ("친화성", agreeableness),
            ]),
            motivation_driver,
        });
    }
    Ok(rows)
}
