// Reconciliation of clock events with spreadsheet rows.
//
// Pure and stateless: every operation maps inputs to write instructions and
// never touches the network. The row a clock-out updates is derived from a
// row count the caller has just read from the document; two clock-outs racing
// on the same document can compute the same row.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::modules::timesheets::core::formulas::{TOTAL_TIME_FORMULA, duration_formula};
use crate::modules::timesheets::core::layout::{
    FIRST_DATA_ROW, HEADER, clock_in_range, clock_out_range, data_range, header_range,
    metadata_range,
};
use crate::modules::timesheets::core::render::{render_calendar_date, render_date, render_time};
use crate::modules::timesheets::core::row_write::{DocumentInit, ExportPlan, RowWrite, SheetRow};
use crate::modules::timesheets::core::shift::Shift;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciliationEngine {
    timezone: Tz,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl ReconciliationEngine {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Calendar date of `now` in the timesheet's zone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.timezone).date_naive()
    }

    /// Row a clock-out lands on when `current_row_count` data rows exist.
    pub fn clock_out_row(current_row_count: usize) -> u32 {
        let count = u32::try_from(current_row_count).unwrap_or(u32::MAX - FIRST_DATA_ROW);
        count.saturating_add(FIRST_DATA_ROW)
    }

    pub fn plan_clock_in(&self, timestamp: DateTime<Utc>) -> RowWrite {
        RowWrite::Append {
            range: clock_in_range(),
            values: vec![vec![
                render_date(timestamp, self.timezone),
                render_time(timestamp, self.timezone),
            ]],
        }
    }

    /// Does not check that the target row holds a clock-in; with no rows the
    /// update still goes to row 2.
    pub fn plan_clock_out(&self, timestamp: DateTime<Utc>, current_row_count: usize) -> RowWrite {
        let row = Self::clock_out_row(current_row_count);
        RowWrite::Update {
            range: clock_out_range(row),
            values: vec![vec![
                render_time(timestamp, self.timezone),
                String::new(),
                duration_formula(row),
            ]],
        }
    }

    /// Shifts keep their input order: `shifts[i]` becomes sheet row `i + 2`.
    pub fn plan_export(&self, shifts: &[Shift]) -> ExportPlan {
        let rows = shifts
            .iter()
            .zip(FIRST_DATA_ROW..)
            .map(|(shift, row)| SheetRow {
                row,
                date: render_date(shift.clock_in, self.timezone),
                in_time: Some(render_time(shift.clock_in, self.timezone)),
                out_time: shift
                    .clock_out
                    .map(|clock_out| render_time(clock_out, self.timezone)),
                total_formula: duration_formula(row),
            })
            .collect();
        ExportPlan {
            clear: data_range(),
            rows,
        }
    }

    pub fn plan_document_init(&self, today: NaiveDate) -> DocumentInit {
        let today = render_calendar_date(today);
        DocumentInit {
            header: RowWrite::Append {
                range: header_range(),
                values: vec![
                    HEADER
                        .into_iter()
                        .map(String::from)
                        .collect(),
                ],
            },
            metadata: RowWrite::Append {
                range: metadata_range(),
                values: vec![
                    vec!["Start Date:".to_string(), today.clone()],
                    vec!["End Date:".to_string(), today],
                    vec!["Total Time:".to_string(), TOTAL_TIME_FORMULA.to_string()],
                ],
            },
        }
    }
}
