use crate::modules::timesheets::core::shift::ShiftEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPunch {
    pub document_id: String,
    pub event: ShiftEvent,
}
