//! Terminal rendering helpers for the interactive shell.

use console::style;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Summarize,
    Export,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Summarize => "Summarize text",
            MenuAction::Export => "Export summary as PDF",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Menu entries; export is offered only once a summary exists.
pub fn menu_actions(has_summary: bool) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Summarize];
    if has_summary {
        actions.push(MenuAction::Export);
    }
    actions.push(MenuAction::Quit);
    actions
}

pub fn status_line(configured: bool) -> String {
    if configured {
        format!("{} Gemini configured", style("●").green())
    } else {
        format!("{} Set GEMINI_API_KEY in .env", style("●").yellow())
    }
}

pub fn banner(configured: bool) -> String {
    format!(
        "{}\n{}\n{}",
        style("AI Text Summarizer").bold().cyan(),
        style("Summarize long text with Gemini and export it as a PDF.").dim(),
        status_line(configured)
    )
}

/// Draws `text` inside a left-ruled frame with a heading.
pub fn frame_summary(text: &str, word_count: usize) -> String {
    let rule = "─".repeat(60);
    let mut out = format!("┌{}\n│ {}\n├{}\n", rule, style("Summary").bold(), rule);
    for line in text.lines() {
        out.push_str("│ ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("└{} {} words", rule, word_count));
    out
}

pub fn error_line(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), message)
}

pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_is_hidden_until_a_summary_exists() {
        assert_eq!(
            menu_actions(false),
            vec![MenuAction::Summarize, MenuAction::Quit]
        );
        assert_eq!(
            menu_actions(true),
            vec![MenuAction::Summarize, MenuAction::Export, MenuAction::Quit]
        );
    }

    #[test]
    fn status_reflects_configuration() {
        console::set_colors_enabled(false);
        assert_eq!(status_line(true), "● Gemini configured");
        assert_eq!(status_line(false), "● Set GEMINI_API_KEY in .env");
    }

    #[test]
    fn frame_prefixes_every_summary_line() {
        console::set_colors_enabled(false);
        let framed = frame_summary("- one\n- two", 4);
        assert!(framed.contains("│ - one\n│ - two\n"));
        assert!(framed.ends_with("4 words"));
    }
}
