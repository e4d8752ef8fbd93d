use serde::Serialize;

/// A clickable option attached to a bot message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Button {
    pub id: &'static str,
    pub label: &'static str,
}

impl Button {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

// Global navigation
pub const MAIN_MENU: Button = Button::new("main-menu", "처음으로");
pub const OTHER_SCHOOL_LEVELS: Button = Button::new("other-school-levels", "다른 학교급 보기");
pub const OTHER_REGIONS: Button = Button::new("other-regions", "다른 지역 보기");
pub const OTHER_SUBJECTS: Button = Button::new("other-subjects", "다른 과목 보기");

// Main menu
pub const OVERVIEW: Button = Button::new("overview", "전체 현황");
pub const BY_SCHOOL_LEVEL: Button = Button::new("school-level", "학교급별 통계");
pub const BY_REGION: Button = Button::new("region", "지역별 통계");
pub const BY_SUBJECT: Button = Button::new("subject", "과목별 통계");
pub const YEAR_COMPARISON: Button = Button::new("year-comparison", "연도별 비교");

// School levels
pub const ELEMENTARY: Button = Button::new("elementary", "초등학교");
pub const MIDDLE: Button = Button::new("middle", "중학교");
pub const HIGH: Button = Button::new("high", "고등학교");

// Regions
pub const SEOUL: Button = Button::new("seoul", "서울");
pub const GYEONGGI: Button = Button::new("gyeonggi", "경기");
pub const INCHEON: Button = Button::new("incheon", "인천");
pub const BUSAN: Button = Button::new("busan", "부산");
pub const DAEGU: Button = Button::new("daegu", "대구");
pub const GWANGJU: Button = Button::new("gwangju", "광주");
pub const DAEJEON: Button = Button::new("daejeon", "대전");
pub const JEJU: Button = Button::new("jeju", "제주");

// Subjects
pub const MATH: Button = Button::new("math", "수학");
pub const ENGLISH: Button = Button::new("english", "영어");
pub const KOREAN: Button = Button::new("korean", "국어");
pub const SOCIAL_SCIENCE: Button = Button::new("social-science", "사회·과학");
pub const ART_HOBBY: Button = Button::new("art-hobby", "예체능·취미");

pub const MAIN_MENU_BUTTONS: &[Button] = &[
    OVERVIEW,
    BY_SCHOOL_LEVEL,
    BY_REGION,
    BY_SUBJECT,
    YEAR_COMPARISON,
];

pub const SCHOOL_LEVEL_BUTTONS: &[Button] = &[ELEMENTARY, MIDDLE, HIGH];

pub const REGION_BUTTONS: &[Button] = &[
    SEOUL, GYEONGGI, INCHEON, BUSAN, DAEGU, GWANGJU, DAEJEON, JEJU,
];

pub const SUBJECT_BUTTONS: &[Button] = &[MATH, ENGLISH, KOREAN, SOCIAL_SCIENCE, ART_HOBBY];

pub const GLOBAL_BUTTONS: &[Button] = &[MAIN_MENU, OTHER_SCHOOL_LEVELS, OTHER_REGIONS, OTHER_SUBJECTS];

/// Every group in display order, used for lookups and the `catalog` command
pub const GROUPS: &[(&str, &[Button])] = &[
    ("navigation", GLOBAL_BUTTONS),
    ("main menu", MAIN_MENU_BUTTONS),
    ("school level", SCHOOL_LEVEL_BUTTONS),
    ("region", REGION_BUTTONS),
    ("subject", SUBJECT_BUTTONS),
];

/// Resolve a button by id
pub fn find(id: &str) -> Option<&'static Button> {
    GROUPS
        .iter()
        .flat_map(|(_, buttons)| buttons.iter())
        .find(|b| b.id == id)
}

/// Iterate over the whole catalog
pub fn all() -> impl Iterator<Item = &'static Button> {
    GROUPS.iter().flat_map(|(_, buttons)| buttons.iter())
}

/// True for ids that belong to the main menu, level or subject groups
pub fn is_menu_choice(id: &str) -> bool {
    [MAIN_MENU_BUTTONS, SCHOOL_LEVEL_BUTTONS, SUBJECT_BUTTONS]
        .iter()
        .any(|group| group.iter().any(|b| b.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for button in all() {
            assert!(seen.insert(button.id), "duplicate id {}", button.id);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("gyeonggi"), Some(&GYEONGGI));
        assert_eq!(find("main-menu").map(|b| b.label), Some("처음으로"));
        assert_eq!(find("unknown-x"), None);
    }

    #[test]
    fn test_is_menu_choice() {
        assert!(is_menu_choice("school-level"));
        assert!(is_menu_choice("middle"));
        assert!(is_menu_choice("math"));
        assert!(!is_menu_choice("gyeonggi"));
        assert!(!is_menu_choice("main-menu"));
        assert!(!is_menu_choice("unknown-x"));
    }
}
