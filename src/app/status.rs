use crate::form::MAX_ENTRIES;

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to create the request.";

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, position: usize) {
        self.message = format!("Editing URL {position}");
    }

    pub fn entry_added(&mut self, count: usize) {
        self.message = format!("Added URL field {count} of {MAX_ENTRIES}");
    }

    pub fn entry_removed(&mut self, count: usize) {
        self.message = format!("Removed URL field, {count} remaining");
    }

    pub fn list_full(&mut self) {
        self.message = format!("A request holds at most {MAX_ENTRIES} URLs");
    }

    pub fn last_entry(&mut self) {
        self.message = "At least one URL field is required".to_string();
    }

    pub fn blocked(&mut self, blocking: usize) {
        self.message = format!("{blocking} URL(s) missing or invalid");
    }

    pub fn submitted(&mut self) {
        self.message = "Request created".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Discard this request? Press Ctrl+Q again to quit.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
