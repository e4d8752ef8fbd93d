use super::catalog::{self, Button};
use super::message::{ChartKind, ChartSpec, Message};
use super::tables::{self, SchoolLevel, Subject, SubjectData};

const GREETING: &str = "안녕하세요! 사교육비 통계 도우미입니다.\n궁금한 통계를 아래 메뉴에서 골라 주세요.";

/// Turn a text report plus optional chart into the one or two messages the bot emits.
/// Buttons always ride on the last message.
fn emit(text: String, chart: Option<(String, ChartSpec)>, buttons: &[Button]) -> Vec<Message> {
    match chart {
        Some((caption, chart)) => vec![
            Message::bot(text),
            Message::bot(caption).with_chart(chart).with_buttons(buttons),
        ],
        None => vec![Message::bot(text).with_buttons(buttons)],
    }
}

pub fn greeting() -> Message {
    Message::bot(GREETING).with_buttons(catalog::MAIN_MENU_BUTTONS)
}

pub fn school_level_prompt() -> Message {
    Message::bot("어느 학교급의 통계를 볼까요?").with_buttons(catalog::SCHOOL_LEVEL_BUTTONS)
}

pub fn region_prompt() -> Message {
    Message::bot("어느 지역의 통계를 볼까요?").with_buttons(catalog::REGION_BUTTONS)
}

pub fn subject_prompt() -> Message {
    Message::bot("어느 과목의 통계를 볼까요?").with_buttons(catalog::SUBJECT_BUTTONS)
}

pub fn subject_level_prompt(subject: Subject) -> Message {
    Message::bot(format!("{} 통계를 볼 학교급을 선택해 주세요.", subject.name()))
        .with_buttons(catalog::SCHOOL_LEVEL_BUTTONS)
}

pub fn overview() -> Vec<Message> {
    let chart = ChartSpec::new(ChartKind::Pie, "과목별 지출 비중 (%)", tables::OVERVIEW_SHARE_LABELS)
        .with_series("비중", tables::OVERVIEW_SHARES);
    emit(
        tables::OVERVIEW_REPORT.to_string(),
        Some(("과목별 사교육비 비중".to_string(), chart)),
        &[catalog::MAIN_MENU],
    )
}

pub fn year_comparison() -> Vec<Message> {
    let chart = ChartSpec::new(ChartKind::Line, "월평균 사교육비 추이 (만원)", tables::YEARS)
        .with_series("전체 학생", tables::YEAR_ALL_STUDENTS)
        .with_series("참여 학생", tables::YEAR_PARTICIPANTS);
    emit(
        tables::YEAR_REPORT.to_string(),
        Some(("연도별 사교육비 변화".to_string(), chart)),
        &[catalog::MAIN_MENU],
    )
}

pub fn school_level_report(level: SchoolLevel) -> Vec<Message> {
    let stats = level.stats();
    let text = format!(
        "{} 사교육 통계입니다.\n• 월평균 사교육비: {:.1}만원\n• 참여율: {:.1}%\n• 주당 참여시간: {:.1}시간",
        level.name(),
        stats.average,
        stats.participation,
        stats.weekly_hours,
    );
    let chart = ChartSpec::new(ChartKind::Bar, format!("{} 학년별 월평균 (만원)", level.name()), stats.grades)
        .with_series(level.name(), stats.values);
    emit(
        text,
        Some((format!("{} 학년별 사교육비", level.name()), chart)),
        &[catalog::OTHER_SCHOOL_LEVELS, catalog::MAIN_MENU],
    )
}

/// How a region's mean compares with [`tables::NATIONAL_AVERAGE`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionDelta {
    pub mean: f64,
    pub diff: f64,
}

impl RegionDelta {
    pub fn of(values: &[f64]) -> Self {
        let mean = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };
        Self {
            mean,
            diff: mean - tables::NATIONAL_AVERAGE,
        }
    }

    pub fn is_above(&self) -> bool {
        self.mean > tables::NATIONAL_AVERAGE
    }

    /// e.g. `+7.4만원 높은 수준`
    pub fn describe(&self) -> String {
        let direction = if self.is_above() { "높은" } else { "낮은" };
        format!("{:+.1}만원 {} 수준", self.diff, direction)
    }
}

fn region_buttons() -> [Button; 2] {
    [catalog::OTHER_REGIONS, catalog::MAIN_MENU]
}

pub fn seoul_report() -> Vec<Message> {
    let chart = ChartSpec::new(ChartKind::Bar, "서울 vs 전국 (만원)", &tables::LEVEL_COLUMNS)
        .with_series("서울", &tables::SEOUL_VALUES)
        .with_series("전국", &tables::NATIONAL_BY_LEVEL);
    emit(
        tables::SEOUL_REPORT.to_string(),
        Some(("서울과 전국 평균 비교".to_string(), chart)),
        &region_buttons(),
    )
}

pub fn region_report(id: &str) -> Vec<Message> {
    let name = tables::find_region(id).map(|r| r.name).unwrap_or(id);
    let values = tables::region_values(id);
    let delta = RegionDelta::of(&values);
    let text = format!(
        "{} 지역 학교급별 월평균 사교육비입니다.\n• 초등 {:.1}만원 • 중등 {:.1}만원 • 고등 {:.1}만원\n\
         평균 {:.1}만원으로 전국 평균({:.1}만원) 대비 {}입니다.",
        name,
        values[0],
        values[1],
        values[2],
        delta.mean,
        tables::NATIONAL_AVERAGE,
        delta.describe(),
    );
    let baseline = [tables::NATIONAL_AVERAGE; 3];
    let chart = ChartSpec::new(ChartKind::Bar, format!("{} vs 전국 평균 (만원)", name), &tables::LEVEL_COLUMNS)
        .with_series(name, &values)
        .with_series("전국 평균", &baseline);
    emit(
        text,
        Some((format!("{} 학교급별 사교육비", name), chart)),
        &region_buttons(),
    )
}

/// Single formatter for every (subject, level) pair
pub fn subject_report(subject: Subject, level: SchoolLevel) -> Option<Vec<Message>> {
    let buttons = [catalog::OTHER_SUBJECTS, catalog::MAIN_MENU];
    let messages = match tables::subject_data(subject, level)? {
        SubjectData::Detailed(ds) => {
            let text = format!(
                "{} {} 사교육 통계입니다.\n• 월평균 {:.1}만원 • 참여율 {:.1}%\n{}",
                level.name(),
                subject.name(),
                ds.average,
                ds.participation,
                ds.note,
            );
            let chart = ChartSpec::new(
                ChartKind::Bar,
                format!("{} {} 학년별 월평균 (만원)", level.name(), subject.name()),
                ds.labels,
            )
            .with_series(subject.name(), ds.values);
            emit(
                text,
                Some((format!("{} {} 학년별 사교육비", level.name(), subject.name()), chart)),
                &buttons,
            )
        }
        SubjectData::Generic(avg) => emit(
            format!(
                "{} {} 사교육비는 학생 1인당 월평균 {:.1}만원이며, 참여율은 {:.1}%입니다.",
                level.name(),
                subject.name(),
                avg.average,
                avg.participation,
            ),
            None,
            &buttons,
        ),
    };
    Some(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_delta_gyeonggi() {
        let delta = RegionDelta::of(&[50.3, 55.8, 58.2]);
        assert!((delta.mean - 54.766).abs() < 0.01);
        assert!(delta.is_above());
        assert_eq!(delta.describe(), "+7.4만원 높은 수준");
    }

    #[test]
    fn test_region_delta_below() {
        let delta = RegionDelta::of(&tables::REGION_FALLBACK);
        assert!(!delta.is_above());
        assert_eq!(delta.describe(), "-1.9만원 낮은 수준");
    }

    #[test]
    fn test_unknown_region_uses_id_as_name() {
        let messages = region_report("unknown-x");
        assert_eq!(messages.len(), 2);
        assert!(messages[0].text.starts_with("unknown-x 지역"));
        let chart = messages[1].chart.as_ref().unwrap();
        assert_eq!(chart.series[0].values, vec![42.1, 46.2, 48.3]);
    }

    #[test]
    fn test_generic_subject_has_no_chart() {
        let messages = subject_report(Subject::English, SchoolLevel::High).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].text.contains("고등학교 영어"));
        assert!(messages[0].text.contains("22.9만원"));
        assert_eq!(messages[0].buttons, vec![catalog::OTHER_SUBJECTS, catalog::MAIN_MENU]);
    }
}
