use crate::application::driver::Action;
use crate::error::{Result, VendingError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ActionType {
    Select,
    Price,
    Insert,
    Purchase,
    Refund,
    Reset,
}

/// A raw script row, before its target is checked against the catalog.
#[derive(Debug, Deserialize)]
struct ScriptRow {
    action: ActionType,
    target: Option<String>,
}

impl TryFrom<ScriptRow> for Action {
    type Error = VendingError;

    fn try_from(row: ScriptRow) -> Result<Self> {
        let target = || {
            row.target.as_deref().ok_or_else(|| {
                VendingError::ValidationError(format!("{:?} requires a target", row.action))
            })
        };

        Ok(match row.action {
            ActionType::Select => Action::Select(target()?.parse()?),
            ActionType::Price => Action::Price(target()?.parse()?),
            ActionType::Insert => Action::Insert(target()?.parse()?),
            ActionType::Purchase => Action::Purchase,
            ActionType::Refund => Action::Refund,
            ActionType::Reset => Action::Reset,
        })
    }
}

/// Reads a vending script from a CSV source with an `action, target` header.
///
/// Whitespace is trimmed and rows may omit the target column entirely.
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScriptReader<R> {
    /// Creates a new `ScriptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one action per row; bad rows come back as errors.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader
            .into_deserialize::<ScriptRow>()
            .map(|result| result.map_err(VendingError::from).and_then(Action::try_from))
    }
}
