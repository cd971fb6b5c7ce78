//! Interactive terminal session.
//!
//! Asks for the group size and each participant's start station and tag,
//! then prints the fair meeting point and the ranked attractions a page at
//! a time. Input and output are generic so the session can be driven from
//! tests.

mod table;

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::dataset::Dataset;
use crate::domain::PreferenceTag;
use crate::planner::{
    Participant, PlanError, PlannerConfig, RecommendRequest, Recommendation, Recommender,
    ScoredAttraction, check_participant_count,
};
use crate::present::pages;

pub use table::render_table;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the request was complete")]
    InputClosed,

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// A single question-and-answer session.
pub struct Session<'a, R, W> {
    dataset: &'a Dataset,
    config: &'a PlannerConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(dataset: &'a Dataset, config: &'a PlannerConfig, input: R, output: W) -> Self {
        Self {
            dataset,
            config,
            input,
            output,
        }
    }

    /// Run the session to completion.
    pub fn run(mut self) -> Result<(), CliError> {
        writeln!(self.output, "Meetup planner: find a fair place to meet.")?;

        let count = self.ask_count()?;
        let mut participants = Vec::with_capacity(count);
        for number in 1..=count {
            participants.push(self.ask_participant(number)?);
        }

        let request = RecommendRequest::new(participants, self.config).map_err(PlanError::from)?;
        let recommendation = Recommender::new(self.dataset, self.config).recommend(&request)?;

        match recommendation {
            Recommendation::NoFairStation => {
                writeln!(
                    self.output,
                    "No station can be reached by everyone. Try different start stations."
                )?;
            }
            Recommendation::NoCandidates { fair } => {
                writeln!(
                    self.output,
                    "Fairest meeting point: {} (at most {} min for anyone), \
                     but there are no attractions nearby.",
                    fair.joined(", "),
                    fair.bound_mins
                )?;
            }
            Recommendation::Ranked { fair, attractions } => {
                writeln!(
                    self.output,
                    "Fairest meeting point: {} (at most {} min for anyone)",
                    fair.joined(", "),
                    fair.bound_mins
                )?;
                self.show_pages(&attractions)?;
            }
        }

        Ok(())
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_count(&mut self) -> Result<usize, CliError> {
        let prompt = format!(
            "How many people are meeting? ({}-{}): ",
            self.config.min_participants, self.config.max_participants
        );
        loop {
            let line = self.read_line(&prompt)?.ok_or(CliError::InputClosed)?;
            let Ok(count) = line.parse::<usize>() else {
                writeln!(self.output, "Please enter a whole number.")?;
                continue;
            };
            match check_participant_count(count, self.config) {
                Ok(count) => return Ok(count),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn ask_participant(&mut self, number: usize) -> Result<Participant, CliError> {
        writeln!(self.output, "--- Participant {number} ---")?;
        writeln!(self.output, "Stations: {}", self.station_list())?;
        writeln!(self.output, "Tags: {}", tag_list())?;

        loop {
            let line = self
                .read_line("Start station and tag (e.g. 台北車站 cafe): ")?
                .ok_or(CliError::InputClosed)?;

            // The tag is the last word; everything before it names the station.
            let Some((station, tag)) = line.rsplit_once(char::is_whitespace) else {
                writeln!(self.output, "Please enter a station and a tag separated by a space.")?;
                continue;
            };

            match Participant::parse(station.trim(), tag, &self.dataset.travel_times) {
                Ok(participant) => {
                    debug!(number, station = %participant.start, tag = %participant.tag, "participant");
                    return Ok(participant);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn station_list(&self) -> String {
        self.dataset
            .stations()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn show_pages(&mut self, attractions: &[ScoredAttraction]) -> Result<(), CliError> {
        for page in pages(attractions, self.config.page_size) {
            writeln!(self.output, "{}", render_table(page.items))?;
            if !page.has_more {
                writeln!(self.output, "All recommendations shown.")?;
                return Ok(());
            }

            loop {
                match self.read_line("Enter 1 for more, q to quit: ")?.as_deref() {
                    Some("1") => break,
                    Some("q") | Some("Q") | None => return Ok(()),
                    Some(_) => writeln!(self.output, "Please enter 1 or q.")?,
                }
            }
        }

        Ok(())
    }
}

fn tag_list() -> String {
    PreferenceTag::ALL
        .iter()
        .map(|tag| format!("{} ({})", tag.slug(), tag.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run a session over stdin and stdout.
pub fn run_interactive(dataset: &Dataset, config: &PlannerConfig) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(dataset, config, stdin.lock(), stdout.lock()).run()
}
