//! Interactive terminal front-end.
//!
//! A menu loop over the two actions. Every action error is printed and the
//! loop continues; only terminal I/O failures end the session.

mod display;
mod input;

pub use display::{frame_summary, menu_actions, MenuAction};
pub use input::{read_text_block, END_MARKER};

use std::io;
use std::time::Duration;

use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::{
    ExportSummaryHandler, SummarizeTextCommand, SummarizeTextHandler, SummarySession,
};

/// Owns the handlers and the session's last summary.
pub struct Shell {
    summarize: SummarizeTextHandler,
    export: ExportSummaryHandler,
    session: SummarySession,
    term: Term,
}

impl Shell {
    pub fn new(summarize: SummarizeTextHandler, export: ExportSummaryHandler) -> Self {
        Self {
            summarize,
            export,
            session: SummarySession::new(),
            term: Term::stdout(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.term
            .write_line(&display::banner(self.summarize.is_configured()))?;

        loop {
            let actions = menu_actions(self.session.has_summary());
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

            self.term.write_line("")?;
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("What would you like to do?")
                .default(0)
                .items(&labels)
                .interact_on(&self.term)?;

            match actions[choice] {
                MenuAction::Summarize => self.summarize_flow().await?,
                MenuAction::Export => self.export_flow().await?,
                MenuAction::Quit => break,
            }
        }

        Ok(())
    }

    async fn summarize_flow(&mut self) -> Result<()> {
        self.term.write_line(&format!(
            "Paste the text to summarize. End with a line containing only {}",
            style(END_MARKER).bold()
        ))?;
        let text = read_text_block(io::stdin().lock())?;

        let spinner = spinner("Summarizing with Gemini...")?;
        let outcome = self.summarize.handle(SummarizeTextCommand::new(text)).await;
        spinner.finish_and_clear();

        match self.session.record(outcome) {
            Ok(summary) => {
                let framed = frame_summary(summary.as_str(), summary.word_count());
                self.term.write_line(&framed)?;
            }
            Err(err) => self.term.write_line(&display::error_line(&err.to_string()))?,
        }
        Ok(())
    }

    async fn export_flow(&mut self) -> Result<()> {
        match self.export.export_last(&self.session).await {
            Ok(exported) => {
                let message = format!(
                    "Saved {} ({} bytes, {} page{})",
                    exported.path.display(),
                    exported.size_bytes,
                    exported.page_count,
                    if exported.page_count == 1 { "" } else { "s" }
                );
                self.term.write_line(&display::success_line(&message))?;
            }
            Err(err) => self.term.write_line(&display::error_line(&err.to_string()))?,
        }
        Ok(())
    }
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    Ok(bar)
}
