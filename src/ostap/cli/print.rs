use colored::*;
use ostap::commands::{CmdMessage, HelpEntry, MessageLevel};
use unicode_width::UnicodeWidthStr;

pub const PAGER_PROMPT: &str = "Press 'q' to quit. Press Enter to see the next page: ";

const COLUMN_GAP: usize = 3;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.normal(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// Two columns: phrases padded to the widest one, then the description.
pub fn render_help(entries: &[HelpEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.phrases.width())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|e| {
            let padding = width - e.phrases.width() + COLUMN_GAP;
            format!(
                "{}{}{}\n",
                e.phrases.bold(),
                " ".repeat(padding),
                e.description.dimmed()
            )
        })
        .collect()
}

/// One page of a listing with a `page i of n` footer.
pub fn render_page(lines: &[String], index: usize, count: usize) -> String {
    let mut out: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    if count > 1 {
        out.push_str(&format!("{}\n", format!("-- page {} of {} --", index + 1, count).dimmed()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_one_per_line() {
        let out = render_messages(&[
            CmdMessage::success("saved"),
            CmdMessage::error("broken"),
        ]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("saved"));
        assert!(out.contains("broken"));
    }

    #[test]
    fn help_columns_line_up() {
        colored::control::set_override(false);
        let out = render_help(&[
            HelpEntry {
                phrases: "help".into(),
                description: "Show help.".into(),
            },
            HelpEntry {
                phrases: "exit, quit".into(),
                description: "Leave.".into(),
            },
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "help         Show help.");
        assert_eq!(lines[1], "exit, quit   Leave.");
    }

    #[test]
    fn single_page_has_no_footer() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_page(&lines, 0, 1).lines().count(), 2);
        assert!(render_page(&lines, 1, 3).contains("page 2 of 3"));
    }
}
