use qwixx_core::{Number, Row, score::PENALTY_COUNT};
use qwixx_game::{RowParts, RowState, ScoreSheet, SheetError};
use serde::{Deserialize, Serialize};

/// Serialized form of one row.
///
/// `crossed` lists the numbers in the row's direction (ascending for red and
/// yellow, descending for green and blue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RowDto {
    pub(crate) crossed: Vec<u8>,
    pub(crate) locked: bool,
}

/// Serialized form of a [`ScoreSheet`]. Contains no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ScoreSheetDto {
    pub(crate) red: RowDto,
    pub(crate) yellow: RowDto,
    pub(crate) green: RowDto,
    pub(crate) blue: RowDto,
    pub(crate) penalties: [bool; PENALTY_COUNT],
}

/// Everything stored under the storage key: the current sheet and, beside it,
/// the undo snapshots (oldest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PersistedStateDto {
    pub(crate) sheet: ScoreSheetDto,
    #[serde(default)]
    pub(crate) history: Vec<ScoreSheetDto>,
}

impl From<&RowState> for RowDto {
    fn from(state: &RowState) -> Self {
        Self {
            crossed: state.crossed_in_order().map(Number::get).collect(),
            locked: state.is_locked(),
        }
    }
}

impl From<&ScoreSheet> for ScoreSheetDto {
    fn from(sheet: &ScoreSheet) -> Self {
        Self {
            red: sheet.row(Row::Red).into(),
            yellow: sheet.row(Row::Yellow).into(),
            green: sheet.row(Row::Green).into(),
            blue: sheet.row(Row::Blue).into(),
            penalties: sheet.penalties().flags(),
        }
    }
}

impl TryFrom<&ScoreSheetDto> for ScoreSheet {
    type Error = SheetError;

    fn try_from(dto: &ScoreSheetDto) -> Result<Self, Self::Error> {
        fn parts(row: &RowDto) -> RowParts<'_> {
            RowParts {
                crossed: &row.crossed,
                locked: row.locked,
            }
        }

        ScoreSheet::from_parts(
            [
                parts(&dto.red),
                parts(&dto.yellow),
                parts(&dto.green),
                parts(&dto.blue),
            ],
            dto.penalties,
        )
    }
}

#[cfg(test)]
mod tests {
    use qwixx_core::{Number, Row};
    use qwixx_game::{ScoreSheet, SheetError};

    use super::{RowDto, ScoreSheetDto};

    fn n(value: u8) -> Number {
        Number::new(value).unwrap()
    }

    fn empty_row() -> RowDto {
        RowDto {
            crossed: vec![],
            locked: false,
        }
    }

    #[test]
    fn crossed_lists_follow_row_direction() {
        let mut sheet = ScoreSheet::new();
        for value in [3, 7, 11] {
            sheet.cross_number(Row::Yellow, n(value)).unwrap();
        }
        for value in [11, 7, 3] {
            sheet.cross_number(Row::Blue, n(value)).unwrap();
        }
        sheet.toggle_penalty(1).unwrap();

        let dto = ScoreSheetDto::from(&sheet);
        assert_eq!(dto.yellow.crossed, [3, 7, 11]);
        assert_eq!(dto.blue.crossed, [11, 7, 3]);
        assert_eq!(dto.penalties, [false, true, false, false]);
        assert_eq!(ScoreSheet::try_from(&dto), Ok(sheet));
    }

    #[test]
    fn invalid_dto_is_rejected() {
        let dto = ScoreSheetDto {
            red: RowDto {
                crossed: vec![2, 5, 7, 9, 11],
                locked: true,
            },
            yellow: empty_row(),
            green: empty_row(),
            blue: empty_row(),
            penalties: [false; 4],
        };
        assert_eq!(
            ScoreSheet::try_from(&dto),
            Err(SheetError::IneligibleLock { row: Row::Red })
        );
    }
}
