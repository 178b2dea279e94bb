use crate::modules::timesheets::core::layout::SheetRange;

pub type CellValues = Vec<Vec<String>>;

/// Instruction for the spreadsheet client; the engine never performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowWrite {
    /// Values land after the last occupied row of `range`.
    Append { range: SheetRange, values: CellValues },
    /// Values overwrite `range` starting at its top-left cell.
    Update { range: SheetRange, values: CellValues },
}

impl RowWrite {
    pub fn range(&self) -> &SheetRange {
        match self {
            RowWrite::Append { range, .. } | RowWrite::Update { range, .. } => range,
        }
    }

    pub fn values(&self) -> &CellValues {
        match self {
            RowWrite::Append { values, .. } | RowWrite::Update { values, .. } => values,
        }
    }
}

/// One positional data row of the timesheet (columns A-E).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub row: u32,
    pub date: String,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub total_formula: String,
}

impl SheetRow {
    pub fn to_values(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.in_time.clone().unwrap_or_default(),
            self.out_time.clone().unwrap_or_default(),
            String::new(),
            self.total_formula.clone(),
        ]
    }
}

/// Full replacement of the data rows. `clear` must be executed before `write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub clear: SheetRange,
    pub rows: Vec<SheetRow>,
}

impl ExportPlan {
    pub fn write(&self) -> RowWrite {
        RowWrite::Update {
            range: self.clear.clone(),
            values: self.rows.iter().map(SheetRow::to_values).collect(),
        }
    }
}

/// Content written once into a freshly created document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInit {
    pub header: RowWrite,
    pub metadata: RowWrite,
}
