// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exit-reason taxonomy used by exit interviews.

use serde::Serialize;

/// Primary category of a resignation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExitReasonCategory {
    #[serde(rename = "더 나은 기회")]
    BetterOpportunity,
    #[serde(rename = "보상 불만")]
    Compensation,
    #[serde(rename = "업무 불만")]
    Workload,
    #[serde(rename = "상사/관계")]
    Relationships,
    #[serde(rename = "성장 정체")]
    Stagnation,
    #[serde(rename = "워라밸")]
    WorkLifeBalance,
    #[serde(rename = "개인 사유")]
    Personal,
}

impl ExitReasonCategory {
    /// Every category in taxonomy order.
    pub const ALL: [Self; 7] = [
        Self::BetterOpportunity,
        Self::Compensation,
        Self::Workload,
        Self::Relationships,
        Self::Stagnation,
        Self::WorkLifeBalance,
        Self::Personal,
    ];

    /// Returns the category label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BetterOpportunity => "더 나은 기회",
            Self::Compensation => "보상 불만",
            Self::Workload => "업무 불만",
            Self::Relationships => "상사/관계",
            Self::Stagnation => "성장 정체",
            Self::WorkLifeBalance => "워라밸",
            Self::Personal => "개인 사유",
        }
    }

    /// Concrete reasons filed under the category.
    #[must_use]
    pub const fn details(&self) -> &'static [&'static str] {
        match self {
            Self::BetterOpportunity => &[
                "더 좋은 연봉 제안",
                "커리어 성장 기회",
                "원하는 직무로 이직",
                "더 큰 회사로 이직",
            ],
            Self::Compensation => &[
                "낮은 연봉",
                "승진 누락",
                "동종 업계 대비 낮은 처우",
                "성과 대비 보상 불균형",
            ],
            Self::Workload => &[
                "과도한 업무량",
                "업무 내용 불만족",
                "비효율적인 프로세스",
                "의미 없는 업무",
            ],
            Self::Relationships => &[
                "상사와의 갈등",
                "팀 내 갈등",
                "조직 문화 부적응",
                "커뮤니케이션 문제",
            ],
            Self::Stagnation => &[
                "경력 개발 기회 부족",
                "교육 기회 제한",
                "기술 발전 기회 없음",
                "역량 활용 불가",
            ],
            Self::WorkLifeBalance => &["과도한 야근", "휴가 사용 제한", "유연근무 불가", "번아웃"],
            Self::Personal => &["학업", "건강", "가족", "창업"],
        }
    }

    /// What the company could change to prevent this kind of exit.
    #[must_use]
    pub const fn improvement_suggestion(&self) -> &'static str {
        match self {
            Self::BetterOpportunity => "경력 개발 경로 명확화, 내부 이동 기회 확대",
            Self::Compensation => "시장 경쟁력 있는 보상 체계 수립, 투명한 보상 정책",
            Self::Workload => "업무 프로세스 개선, 불필요한 업무 제거",
            Self::Relationships => "리더십 교육 강화, 조직 문화 개선, 갈등 해결 메커니즘 구축",
            Self::Stagnation => "교육 예산 확대, 외부 컨퍼런스 참여 지원, 사내 스터디 활성화",
            Self::WorkLifeBalance => "유연근무제 확대, 불필요한 야근 문화 개선, 휴가 사용 장려",
            Self::Personal => "해당 없음",
        }
    }

    /// How favourably someone leaving for this reason speaks of the company.
    #[must_use]
    pub const fn recommendation_bucket(&self) -> RecommendationBucket {
        match self {
            Self::BetterOpportunity | Self::Personal => RecommendationBucket::Favorable,
            Self::Compensation | Self::Stagnation => RecommendationBucket::Neutral,
            Self::Workload | Self::Relationships | Self::WorkLifeBalance => {
                RecommendationBucket::Adverse
            }
        }
    }
}

impl std::fmt::Display for ExitReasonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range of the "would recommend the company" score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationBucket {
    Favorable,
    Neutral,
    Adverse,
}

impl RecommendationBucket {
    /// Inclusive score bounds on the 1-5 scale.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        match self {
            Self::Favorable => (3.5, 5.0),
            Self::Neutral => (2.5, 4.0),
            Self::Adverse => (1.5, 3.5),
        }
    }
}
