use super::print::{render_help, render_messages, render_page, PAGER_PROMPT};
use console::{style, Term};
use ostap::api::Assistant;
use ostap::commands::{ArgSource, CmdResult, Control, Listing};
use ostap::error::Result;
use ostap::store::{DataStore, DEFAULT_PAGE_SIZE};
use std::io::{BufRead, Write};

const COMMAND_PROMPT: &str = "Enter command: ";
const FAREWELL: &str = "Good bye!";

/// The read-eval-print loop over any line source and sink.
///
/// `interactive` decides whether the screen is really cleared; piped sessions
/// get a blank line instead so their output stays readable.
pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Runs until an exit command or end of input.
    pub fn run<S: DataStore>(&mut self, assistant: &mut Assistant<S>) -> Result<()> {
        let page_size = match assistant.config().page_size {
            0 => DEFAULT_PAGE_SIZE,
            n => n,
        };

        while let Some(line) = self.read_line(COMMAND_PROMPT)? {
            let result = assistant.run_line(&line, self);
            self.render(&result, page_size)?;
            match result.control {
                Control::Continue => {}
                Control::ClearScreen => self.clear()?,
                Control::Exit => return Ok(()),
            }
        }

        log::debug!("input closed");
        writeln!(self.output, "{}", FAREWELL)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", style(prompt).bold())?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        // Bytes that are not UTF-8 become U+FFFD instead of ending the session.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn clear(&mut self) -> Result<()> {
        if self.interactive {
            Term::stdout().clear_screen()?;
        } else {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn render(&mut self, result: &CmdResult, page_size: usize) -> Result<()> {
        write!(self.output, "{}", render_messages(&result.messages))?;
        if !result.help.is_empty() {
            write!(self.output, "{}", render_help(&result.help))?;
        }
        if let Some(listing) = &result.listing {
            self.page_through(listing, page_size)?;
        }
        Ok(())
    }

    /// Shows one page at a time until the listing ends or the user presses `q`.
    fn page_through(&mut self, listing: &Listing, page_size: usize) -> Result<()> {
        let count = listing.page_count(page_size);
        for index in 0..count {
            let Some(lines) = listing.page_lines(index, page_size) else {
                break;
            };
            write!(self.output, "{}", render_page(&lines, index, count))?;

            if index + 1 == count {
                break;
            }
            match self.read_line(PAGER_PROMPT)? {
                Some(answer) if !answer.trim().eq_ignore_ascii_case("q") => self.clear()?,
                _ => break,
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> ArgSource for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }
}
