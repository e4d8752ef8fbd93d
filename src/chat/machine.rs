use serde::Serialize;
use tracing::{debug, trace};

use super::catalog;
use super::message::Message;
use super::report;
use super::tables::{SchoolLevel, Subject};

/// Where the conversation currently is in the menu tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationState {
    #[default]
    Initial,
    MainMenu,
    SchoolLevel,
    Region,
    Subject,
    SubjectSchool,
}

impl ConversationState {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Initial => "시작 전",
            Self::MainMenu => "메인 메뉴",
            Self::SchoolLevel => "학교급별",
            Self::Region => "지역별",
            Self::Subject => "과목 선택",
            Self::SubjectSchool => "과목별 학교급 선택",
        }
    }
}

/// Navigation shortcuts honored in every state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalCommand {
    MainMenu,
    OtherSchoolLevels,
    OtherRegions,
    OtherSubjects,
}

impl GlobalCommand {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            id if id == catalog::MAIN_MENU.id => Some(Self::MainMenu),
            id if id == catalog::OTHER_SCHOOL_LEVELS.id => Some(Self::OtherSchoolLevels),
            id if id == catalog::OTHER_REGIONS.id => Some(Self::OtherRegions),
            id if id == catalog::OTHER_SUBJECTS.id => Some(Self::OtherSubjects),
            _ => None,
        }
    }

    fn apply(self, selection: Option<Subject>) -> Transition {
        match self {
            Self::MainMenu => Transition::new(ConversationState::MainMenu, None, vec![report::greeting()]),
            Self::OtherSchoolLevels => Transition::new(
                ConversationState::SchoolLevel,
                selection,
                vec![report::school_level_prompt()],
            ),
            Self::OtherRegions => {
                Transition::new(ConversationState::Region, selection, vec![report::region_prompt()])
            }
            Self::OtherSubjects => {
                Transition::new(ConversationState::Subject, selection, vec![report::subject_prompt()])
            }
        }
    }
}

/// Items offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenuItem {
    Overview,
    SchoolLevel,
    Region,
    Subject,
    YearComparison,
}

impl MainMenuItem {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            id if id == catalog::OVERVIEW.id => Some(Self::Overview),
            id if id == catalog::BY_SCHOOL_LEVEL.id => Some(Self::SchoolLevel),
            id if id == catalog::BY_REGION.id => Some(Self::Region),
            id if id == catalog::BY_SUBJECT.id => Some(Self::Subject),
            id if id == catalog::YEAR_COMPARISON.id => Some(Self::YearComparison),
            _ => None,
        }
    }
}

/// Result of an accepted input: the next state, the remembered subject and
/// the messages to append to the log
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ConversationState,
    pub selection: Option<Subject>,
    pub messages: Vec<Message>,
}

impl Transition {
    fn new(state: ConversationState, selection: Option<Subject>, messages: Vec<Message>) -> Self {
        Self {
            state,
            selection,
            messages,
        }
    }
}

/// Greeting emitted when a session opens
pub fn open() -> Transition {
    GlobalCommand::MainMenu.apply(None)
}

/// Map (state, selection, button id) to the next transition.
///
/// Returns `None` when the current state does not accept `button_id`; the
/// caller must then leave everything untouched.
pub fn transition(
    state: ConversationState,
    selection: Option<Subject>,
    button_id: &str,
) -> Option<Transition> {
    let next = match GlobalCommand::from_id(button_id) {
        Some(command) => Some(command.apply(selection)),
        None => state_transition(state, selection, button_id),
    };

    match &next {
        Some(t) => debug!(
            from = ?state,
            to = ?t.state,
            button = button_id,
            emitted = t.messages.len(),
            "transition"
        ),
        None => trace!(state = ?state, button = button_id, "ignored input"),
    }
    next
}

fn state_transition(
    state: ConversationState,
    selection: Option<Subject>,
    id: &str,
) -> Option<Transition> {
    match state {
        // Only the session opening (or a global command) leaves Initial.
        ConversationState::Initial => None,
        ConversationState::MainMenu => {
            let item = MainMenuItem::from_id(id)?;
            let t = match item {
                MainMenuItem::Overview => Transition::new(state, selection, report::overview()),
                MainMenuItem::YearComparison => {
                    Transition::new(state, selection, report::year_comparison())
                }
                MainMenuItem::SchoolLevel => Transition::new(
                    ConversationState::SchoolLevel,
                    selection,
                    vec![report::school_level_prompt()],
                ),
                MainMenuItem::Region => Transition::new(
                    ConversationState::Region,
                    selection,
                    vec![report::region_prompt()],
                ),
                MainMenuItem::Subject => Transition::new(
                    ConversationState::Subject,
                    selection,
                    vec![report::subject_prompt()],
                ),
            };
            Some(t)
        }
        ConversationState::SchoolLevel => {
            let level = SchoolLevel::from_id(id)?;
            Some(Transition::new(state, selection, report::school_level_report(level)))
        }
        ConversationState::Region => {
            // Menu, level and subject ids are never read as region names
            if catalog::is_menu_choice(id) {
                return None;
            }
            let messages = if id == catalog::SEOUL.id {
                report::seoul_report()
            } else {
                report::region_report(id)
            };
            Some(Transition::new(state, selection, messages))
        }
        ConversationState::Subject => {
            let subject = Subject::from_id(id)?;
            Some(Transition::new(
                ConversationState::SubjectSchool,
                Some(subject),
                vec![report::subject_level_prompt(subject)],
            ))
        }
        ConversationState::SubjectSchool => {
            let level = SchoolLevel::from_id(id)?;
            let subject = selection?;
            let messages = report::subject_report(subject, level)?;
            Some(Transition::new(state, selection, messages))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::catalog::{self, Button};
    use pretty_assertions::assert_eq;

    const ALL_STATES: [ConversationState; 6] = [
        ConversationState::Initial,
        ConversationState::MainMenu,
        ConversationState::SchoolLevel,
        ConversationState::Region,
        ConversationState::Subject,
        ConversationState::SubjectSchool,
    ];

    fn button_ids(msg: &Message) -> Vec<&'static str> {
        msg.buttons.iter().map(|b: &Button| b.id).collect()
    }

    #[test]
    fn test_open_greets_with_main_menu() {
        let t = open();
        assert_eq!(t.state, ConversationState::MainMenu);
        assert_eq!(t.messages.len(), 1);
        assert_eq!(
            button_ids(&t.messages[0]),
            vec!["overview", "school-level", "region", "subject", "year-comparison"]
        );
    }

    #[test]
    fn test_main_menu_from_every_state() {
        for state in ALL_STATES {
            let t = transition(state, Some(Subject::Math), "main-menu").unwrap();
            assert_eq!(t.state, ConversationState::MainMenu);
            assert_eq!(t.selection, None);
            assert_eq!(t.messages.last(), Some(&report::greeting()));
        }
    }

    #[test]
    fn test_listing_overrides_from_every_state() {
        let cases = [
            ("other-school-levels", ConversationState::SchoolLevel),
            ("other-regions", ConversationState::Region),
            ("other-subjects", ConversationState::Subject),
        ];
        for state in ALL_STATES {
            for (id, expected) in cases {
                let t = transition(state, None, id).unwrap();
                assert_eq!(t.state, expected, "{} from {:?}", id, state);
                assert_eq!(t.messages.len(), 1);
            }
        }
    }

    #[test]
    fn test_unrecognized_input_is_ignored() {
        assert_eq!(transition(ConversationState::Initial, None, "overview"), None);
        assert_eq!(transition(ConversationState::MainMenu, None, "elementary"), None);
        assert_eq!(transition(ConversationState::SchoolLevel, None, "math"), None);
        assert_eq!(transition(ConversationState::Subject, None, "high"), None);
        assert_eq!(transition(ConversationState::SubjectSchool, Some(Subject::Math), "math"), None);
    }

    #[test]
    fn test_subject_school_without_selection_is_ignored() {
        assert_eq!(transition(ConversationState::SubjectSchool, None, "middle"), None);
    }

    #[test]
    fn test_terminal_reports_offer_only_main_menu() {
        for id in ["overview", "year-comparison"] {
            let t = transition(ConversationState::MainMenu, None, id).unwrap();
            assert_eq!(t.state, ConversationState::MainMenu);
            assert_eq!(t.messages.len(), 2);
            assert!(t.messages[0].buttons.is_empty());
            assert_eq!(button_ids(&t.messages[1]), vec!["main-menu"]);
        }
    }

    #[test]
    fn test_school_level_report() {
        let t = transition(ConversationState::SchoolLevel, None, "high").unwrap();
        assert_eq!(t.state, ConversationState::SchoolLevel);
        assert_eq!(t.messages.len(), 2);
        let chart = t.messages[1].chart.as_ref().unwrap();
        assert_eq!(chart.labels, vec!["고1", "고2", "고3"]);
        assert_eq!(button_ids(&t.messages[1]), vec!["other-school-levels", "main-menu"]);
    }

    #[test]
    fn test_region_gyeonggi() {
        let t = transition(ConversationState::Region, None, "gyeonggi").unwrap();
        assert!(t.messages[0].text.contains("+7.4만원 높은 수준"));
        let chart = t.messages[1].chart.as_ref().unwrap();
        assert_eq!(chart.series[0].values, vec![50.3, 55.8, 58.2]);
    }

    #[test]
    fn test_region_unknown_falls_back() {
        let t = transition(ConversationState::Region, None, "unknown-x").unwrap();
        let chart = t.messages[1].chart.as_ref().unwrap();
        assert_eq!(chart.series[0].values, vec![42.1, 46.2, 48.3]);
        assert!(t.messages[0].text.contains("낮은 수준"));
    }

    #[test]
    fn test_region_ignores_other_menu_ids() {
        for id in ["school-level", "overview", "middle", "math", "art-hobby"] {
            assert!(
                transition(ConversationState::Region, None, id).is_none(),
                "{} was read as a region",
                id
            );
        }
        assert!(transition(ConversationState::Region, None, "unknown-x").is_some());
    }

    #[test]
    fn test_region_seoul_is_hardcoded() {
        let t = transition(ConversationState::Region, None, "seoul").unwrap();
        assert!(t.messages[0].text.starts_with("서울은"));
        assert_eq!(t.messages[1].chart.as_ref().unwrap().series.len(), 2);
    }

    #[test]
    fn test_math_middle() {
        let t = transition(ConversationState::Subject, None, "math").unwrap();
        assert_eq!(t.state, ConversationState::SubjectSchool);
        assert_eq!(t.selection, Some(Subject::Math));

        let t = transition(t.state, t.selection, "middle").unwrap();
        let chart = t.messages[1].chart.as_ref().unwrap();
        assert_eq!(chart.labels, vec!["중1", "중2", "중3"]);
        assert_eq!(chart.series[0].values, vec![17.3, 18.8, 19.4]);
    }

    #[test]
    fn test_buttons_come_from_catalog() {
        let mut pending = vec![(ConversationState::Initial, None::<Subject>)];
        let mut seen = std::collections::HashSet::new();
        let mut transitions = vec![open()];
        while let Some((state, selection)) = pending.pop() {
            if !seen.insert((state, selection)) {
                continue;
            }
            for button in catalog::all() {
                if let Some(t) = transition(state, selection, button.id) {
                    pending.push((t.state, t.selection));
                    transitions.push(t);
                }
            }
        }
        for t in transitions {
            for msg in &t.messages {
                for button in &msg.buttons {
                    assert_eq!(catalog::find(button.id), Some(button));
                }
            }
        }
    }
}
