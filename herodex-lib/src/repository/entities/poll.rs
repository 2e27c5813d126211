use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Running tally of the site poll. Lives in its own record file so votes
/// survive restarts; there is no in-process counter to lose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResult {
    pub yes_votes: u32,
    pub no_votes: u32,
}

impl PollResult {
    pub fn total(&self) -> u32 {
        self.yes_votes + self.no_votes
    }

    pub(crate) fn record(&mut self, choice: PollChoice) {
        match choice {
            PollChoice::Yes => self.yes_votes += 1,
            PollChoice::No => self.no_votes += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PollChoice {
    Yes,
    No,
}
