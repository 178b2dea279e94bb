use serde::Serialize;

/// Success body shared by every timesheet operation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub message: String,
    pub doc_id: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>, doc_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            doc_id: doc_id.into(),
        }
    }
}
