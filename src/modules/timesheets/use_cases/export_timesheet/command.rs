use crate::modules::timesheets::core::shift::Shift;

/// Replace every data row of the document with `shifts`, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTimesheet {
    pub document_id: String,
    pub shifts: Vec<Shift>,
}
