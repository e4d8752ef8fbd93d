use serde::Serialize;
use std::fmt::Write as _;
use std::time::Instant;
use tracing::{info, warn};

use crate::{
    app::Config,
    chat::{ChartSpec, ConversationState, Message, Role, Session},
    cli::OutputFormat,
    utils::StatbotError,
};

/// Result of a scripted run
#[derive(Debug, Serialize)]
pub struct ScriptResult {
    /// Button ids in the order they were pressed
    pub presses: Vec<String>,
    /// Ids the conversation did not accept at the time they were pressed
    pub ignored: Vec<String>,
    /// State after the last press
    pub final_state: ConversationState,
    /// The whole message log, greeting included
    pub messages: Vec<Message>,
    /// Metadata about the execution
    pub metadata: ExecutionMetadata,
}

#[derive(Debug, Serialize)]
pub struct ExecutionMetadata {
    /// When the run finished
    pub generated_at: chrono::DateTime<chrono::Local>,
    /// Number of messages in the log
    pub message_count: usize,
    /// Execution time in milliseconds
    pub duration_ms: u128,
}

/// Replays a fixed list of button presses against a fresh session
pub struct ScriptRunner {
    echo_selections: bool,
}

impl ScriptRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            echo_selections: config.chat.echo_selections,
        }
    }

    /// Open a session, press every id in order and collect the transcript
    pub fn execute(&self, presses: &[String]) -> ScriptResult {
        let start_time = Instant::now();
        let mut session = Session::new().with_echo(self.echo_selections);
        session.open();

        let mut ignored = Vec::new();
        for id in presses {
            if session.press(id) == 0 {
                warn!(button = %id, state = ?session.state(), "press ignored");
                ignored.push(id.clone());
            }
        }

        let messages = session.messages().to_vec();
        info!(presses = presses.len(), ignored = ignored.len(), "script finished");

        ScriptResult {
            presses: presses.to_vec(),
            ignored,
            final_state: session.state(),
            metadata: ExecutionMetadata {
                generated_at: chrono::Local::now(),
                message_count: messages.len(),
                duration_ms: start_time.elapsed().as_millis(),
            },
            messages,
        }
    }

    /// Format the result according to the output format
    pub fn format_result(
        &self,
        result: &ScriptResult,
        format: OutputFormat,
    ) -> Result<String, StatbotError> {
        let output = match format {
            OutputFormat::Json => serde_json::to_string_pretty(result)?,
            OutputFormat::Text => format_text(result),
            OutputFormat::Markdown => format_markdown(result),
        };
        Ok(output)
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Bot => "Statbot",
        Role::User => "You",
    }
}

fn format_text(result: &ScriptResult) -> String {
    let mut output = String::new();

    for msg in &result.messages {
        let _ = writeln!(output, "[{}]", role_name(msg.role));
        let _ = writeln!(output, "{}", msg.text);
        if let Some(chart) = &msg.chart {
            output.push_str(&chart_table(chart, "  "));
        }
        if msg.has_buttons() {
            let buttons: Vec<String> = msg
                .buttons
                .iter()
                .map(|b| format!("[{}] {}", b.id, b.label))
                .collect();
            let _ = writeln!(output, "  -> {}", buttons.join("  "));
        }
        output.push('\n');
    }

    if !result.ignored.is_empty() {
        output.push_str("--- Ignored ---\n");
        for id in &result.ignored {
            let _ = writeln!(output, "• {}", id);
        }
    }

    output
}

fn format_markdown(result: &ScriptResult) -> String {
    let mut output = String::new();

    output.push_str("## Conversation\n\n");
    for msg in &result.messages {
        let _ = writeln!(output, "**{}**\n", role_name(msg.role));
        for line in msg.text.lines() {
            let _ = writeln!(output, "> {}", line);
        }
        output.push('\n');

        if let Some(chart) = &msg.chart {
            output.push_str(&chart_markdown(chart));
            output.push('\n');
        }
        if msg.has_buttons() {
            let buttons: Vec<String> = msg
                .buttons
                .iter()
                .map(|b| format!("`{}` {}", b.id, b.label))
                .collect();
            let _ = writeln!(output, "Options: {}\n", buttons.join(" · "));
        }
    }

    if !result.ignored.is_empty() {
        output.push_str("## Ignored presses\n\n");
        for id in &result.ignored {
            let _ = writeln!(output, "- `{}`", id);
        }
        output.push('\n');
    }

    output.push_str("---\n");
    let _ = writeln!(
        output,
        "*State: {} | Messages: {} | Generated: {}*",
        result.final_state.display_name(),
        result.metadata.message_count,
        result.metadata.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    output
}

/// Chart as aligned text rows: one row per label, one column per series
fn chart_table(chart: &ChartSpec, indent: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}{} ({:?})", indent, chart.title, chart.kind);
    let header: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    let _ = writeln!(output, "{}{:<8} {}", indent, "", header.join(" | "));
    for (i, label) in chart.labels.iter().enumerate() {
        let cells: Vec<String> = chart
            .series
            .iter()
            .map(|s| s.values.get(i).map(|v| format!("{:.1}", v)).unwrap_or_default())
            .collect();
        let _ = writeln!(output, "{}{:<8} {}", indent, label, cells.join(" | "));
    }
    output
}

fn chart_markdown(chart: &ChartSpec) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "*{}*\n", chart.title);

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    let _ = writeln!(output, "| | {} |", names.join(" | "));
    let _ = writeln!(output, "|---|{}", "---|".repeat(names.len()));
    for (i, label) in chart.labels.iter().enumerate() {
        let cells: Vec<String> = chart
            .series
            .iter()
            .map(|s| s.values.get(i).map(|v| format!("{:.1}", v)).unwrap_or_default())
            .collect();
        let _ = writeln!(output, "| {} | {} |", label, cells.join(" | "));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(ids: &[&str]) -> (ScriptRunner, ScriptResult) {
        let runner = ScriptRunner::new(&Config::default());
        let presses: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        let result = runner.execute(&presses);
        (runner, result)
    }

    #[test]
    fn test_execute_records_ignored() {
        let (_, result) = run(&["elementary", "school-level", "elementary", "math"]);
        assert_eq!(result.ignored, vec!["elementary", "math"]);
        assert_eq!(result.final_state, ConversationState::SchoolLevel);
        // greeting + prompt + report + chart
        assert_eq!(result.metadata.message_count, 4);
    }

    #[test]
    fn test_json_output() {
        let (runner, result) = run(&["region", "gyeonggi"]);
        let json = runner.format_result(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_state"], "region");
        let chart = &value["messages"][3]["chart"];
        assert_eq!(chart["kind"], "bar");
        assert_eq!(chart["series"][0]["values"], serde_json::json!([50.3, 55.8, 58.2]));
    }

    #[test]
    fn test_text_output() {
        let (runner, result) = run(&["subject", "math", "middle"]);
        let text = runner.format_result(&result, OutputFormat::Text).unwrap();
        assert!(text
            .lines()
            .any(|l| l.trim_start().starts_with("중2") && l.ends_with("18.8")));
        assert!(text.contains("[main-menu] 처음으로"));
        assert!(!text.contains("--- Ignored ---"));
    }

    #[test]
    fn test_markdown_output() {
        let (runner, result) = run(&["overview", "bogus"]);
        let md = runner.format_result(&result, OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("## Conversation"));
        assert!(md.contains("| 영어 | 33.5 |"));
        assert!(md.contains("- `bogus`"));
    }
}
