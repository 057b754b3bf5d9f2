use frontline_core::ScoreboardColumn;

/// Scoreboard layout pushed to the host in a single configuration call.
/// The host accepts between one and five columns; [`crate::Game::configure_scoreboard`]
/// reports an out-of-range count to the error sink and drops the call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreboardConfig {
    header: String,
    columns: Vec<ScoreboardColumn>,
}

impl ScoreboardConfig {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, label: &str, width: u16) -> Self {
        self.columns.push(ScoreboardColumn::new(label, width));
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn columns(&self) -> &[ScoreboardColumn] {
        &self.columns
    }
}
