#![deny(rust_2018_idioms)]

mod app;
mod form;
mod io;
mod submit;
mod ui;
mod validate;


pub use app::{LinkForm, UiOptions};
pub use form::{Entry, EntryId, EntryList, FormState, ListAction, MAX_ENTRIES, PendingFocus, apply};
pub use io::{DocumentFormat, OutputDestination, OutputOptions, emit};
pub use submit::{DRIVE_PREFIX, PayloadEntry, RequestPayload, build_payload, extracted_value};
pub use validate::{INVALID_URL_MESSAGE, Verdict, verdict};

pub mod prelude {
    pub use super::{LinkForm, OutputOptions, RequestPayload, UiOptions};
}
