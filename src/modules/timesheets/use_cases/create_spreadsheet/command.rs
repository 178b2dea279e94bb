/// `document_id` is either an existing spreadsheet or the "create new" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpreadsheet {
    pub document_id: String,
}
