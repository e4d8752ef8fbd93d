//! Static reference data behind every report the bot can produce.
//!
//! All amounts are monthly spending per student in units of 만원.

use serde::Serialize;

/// National per-student monthly average used as the regional baseline
pub const NATIONAL_AVERAGE: f64 = 47.4;

/// Values used for any region id that is not in [`REGIONS`]
pub const REGION_FALLBACK: [f64; 3] = [42.1, 46.2, 48.3];

/// Column labels for the per-level region vectors
pub const LEVEL_COLUMNS: [&str; 3] = ["초등", "중등", "고등"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchoolLevel {
    Elementary,
    Middle,
    High,
}

impl SchoolLevel {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "elementary" => Some(Self::Elementary),
            "middle" => Some(Self::Middle),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Elementary => "초등학교",
            Self::Middle => "중학교",
            Self::High => "고등학교",
        }
    }

    pub fn stats(&self) -> &'static LevelStats {
        match self {
            Self::Elementary => &ELEMENTARY_STATS,
            Self::Middle => &MIDDLE_STATS,
            Self::High => &HIGH_STATS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Math,
    English,
    Korean,
    SocialScience,
    ArtHobby,
}

impl Subject {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "math" => Some(Self::Math),
            "english" => Some(Self::English),
            "korean" => Some(Self::Korean),
            "social-science" => Some(Self::SocialScience),
            "art-hobby" => Some(Self::ArtHobby),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Math => "수학",
            Self::English => "영어",
            Self::Korean => "국어",
            Self::SocialScience => "사회·과학",
            Self::ArtHobby => "예체능·취미",
        }
    }
}

/// Per school level statistics with a per-grade breakdown
#[derive(Debug)]
pub struct LevelStats {
    pub average: f64,
    pub participation: f64,
    pub weekly_hours: f64,
    pub grades: &'static [&'static str],
    pub values: &'static [f64],
}

const ELEMENTARY_STATS: LevelStats = LevelStats {
    average: 39.8,
    participation: 86.0,
    weekly_hours: 7.3,
    grades: &["초1", "초2", "초3", "초4", "초5", "초6"],
    values: &[34.2, 37.0, 39.5, 41.3, 42.6, 44.2],
};

const MIDDLE_STATS: LevelStats = LevelStats {
    average: 49.0,
    participation: 75.4,
    weekly_hours: 7.0,
    grades: &["중1", "중2", "중3"],
    values: &[46.1, 49.2, 51.7],
};

const HIGH_STATS: LevelStats = LevelStats {
    average: 52.5,
    participation: 66.4,
    weekly_hours: 5.4,
    grades: &["고1", "고2", "고3"],
    values: &[55.3, 53.0, 49.2],
};

/// National averages per level, in [`LEVEL_COLUMNS`] order
pub const NATIONAL_BY_LEVEL: [f64; 3] = [
    ELEMENTARY_STATS.average,
    MIDDLE_STATS.average,
    HIGH_STATS.average,
];

#[derive(Debug)]
pub struct RegionEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub values: [f64; 3],
}

pub const REGIONS: &[RegionEntry] = &[
    RegionEntry { id: "gyeonggi", name: "경기", values: [50.3, 55.8, 58.2] },
    RegionEntry { id: "incheon", name: "인천", values: [41.2, 47.5, 50.1] },
    RegionEntry { id: "busan", name: "부산", values: [40.3, 45.9, 49.8] },
    RegionEntry { id: "daegu", name: "대구", values: [43.7, 50.2, 53.6] },
    RegionEntry { id: "gwangju", name: "광주", values: [36.5, 44.8, 47.3] },
    RegionEntry { id: "daejeon", name: "대전", values: [41.8, 49.6, 52.0] },
    RegionEntry { id: "jeju", name: "제주", values: [35.2, 41.0, 44.7] },
];

pub fn find_region(id: &str) -> Option<&'static RegionEntry> {
    REGIONS.iter().find(|r| r.id == id)
}

/// Per-level values for a region, falling back to [`REGION_FALLBACK`]
pub fn region_values(id: &str) -> [f64; 3] {
    find_region(id)
        .map(|r| r.values)
        .unwrap_or(REGION_FALLBACK)
}

pub const SEOUL_VALUES: [f64; 3] = [55.1, 67.0, 74.3];

pub const SEOUL_REPORT: &str = "서울은 전국에서 사교육비가 가장 높은 지역입니다.\n\
• 초등학생 월평균 55.1만원 (전국 39.8만원)\n\
• 중학생 월평균 67.0만원 (전국 49.0만원)\n\
• 고등학생 월평균 74.3만원 (전국 52.5만원)\n\
모든 학교급에서 전국 평균을 크게 웃돌며, 고등학교에서 격차가 가장 큽니다.";

/// A complete per-grade dataset for one subject at one level
#[derive(Debug)]
pub struct SubjectDataset {
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
    pub average: f64,
    pub participation: f64,
    pub note: &'static str,
}

/// Level-independent averages for subjects without a detailed breakdown
#[derive(Debug)]
pub struct SubjectAverage {
    pub average: f64,
    pub participation: f64,
}

const DETAILED: &[((Subject, SchoolLevel), SubjectDataset)] = &[
    (
        (Subject::Math, SchoolLevel::Elementary),
        SubjectDataset {
            labels: &["초1", "초2", "초3", "초4", "초5", "초6"],
            values: &[11.2, 12.5, 13.8, 14.9, 15.6, 16.4],
            average: 13.5,
            participation: 49.1,
            note: "고학년으로 갈수록 선행학습 수요가 늘어납니다.",
        },
    ),
    (
        (Subject::Math, SchoolLevel::Middle),
        SubjectDataset {
            labels: &["중1", "중2", "중3"],
            values: &[17.3, 18.8, 19.4],
            average: 18.5,
            participation: 56.2,
            note: "학년이 오를수록 꾸준히 증가합니다.",
        },
    ),
    (
        (Subject::Math, SchoolLevel::High),
        SubjectDataset {
            labels: &["고1", "고2", "고3"],
            values: &[21.5, 22.8, 20.1],
            average: 21.5,
            participation: 47.6,
            note: "고3에서는 수능 대비 방식이 바뀌며 소폭 감소합니다.",
        },
    ),
];

// Same figures at every level; no per-level breakdown exists for these.
const GENERIC: &[(Subject, SubjectAverage)] = &[
    (Subject::English, SubjectAverage { average: 22.9, participation: 55.2 }),
    (Subject::Korean, SubjectAverage { average: 9.6, participation: 24.1 }),
    (Subject::SocialScience, SubjectAverage { average: 9.2, participation: 14.5 }),
    (Subject::ArtHobby, SubjectAverage { average: 12.3, participation: 41.8 }),
];

/// What the table knows about a (subject, level) pair
#[derive(Debug)]
pub enum SubjectData {
    Detailed(&'static SubjectDataset),
    Generic(&'static SubjectAverage),
}

pub fn subject_data(subject: Subject, level: SchoolLevel) -> Option<SubjectData> {
    if let Some((_, dataset)) = DETAILED.iter().find(|(key, _)| *key == (subject, level)) {
        return Some(SubjectData::Detailed(dataset));
    }
    GENERIC
        .iter()
        .find(|(s, _)| *s == subject)
        .map(|(_, avg)| SubjectData::Generic(avg))
}

pub const OVERVIEW_REPORT: &str = "2023년 초·중·고 사교육비 현황입니다.\n\
• 학생 1인당 월평균 사교육비: 47.4만원\n\
• 사교육 참여율: 78.5%\n\
• 주당 참여시간: 7.3시간\n\
과목별 지출 비중은 영어와 수학이 전체의 절반 이상을 차지합니다.";

pub const OVERVIEW_SHARE_LABELS: &[&str] = &["영어", "수학", "국어", "사회·과학", "예체능·취미", "기타"];
pub const OVERVIEW_SHARES: &[f64] = &[33.5, 30.2, 8.1, 6.4, 18.9, 2.9];

pub const YEAR_REPORT: &str = "최근 5년간 학생 1인당 월평균 사교육비 추이입니다.\n\
2020년 원격수업 기간에 일시적으로 감소했으나, 이후 매년 증가해 2023년 47.4만원으로 최고치를 기록했습니다.";

pub const YEARS: &[&str] = &["2019", "2020", "2021", "2022", "2023"];
pub const YEAR_ALL_STUDENTS: &[f64] = &[39.2, 36.8, 41.8, 44.6, 47.4];
pub const YEAR_PARTICIPANTS: &[f64] = &[52.7, 50.4, 56.5, 60.3, 63.1];
