mod actions;
mod entry;
mod focus;
mod list;
mod reducers;
mod state;

pub use actions::ListAction;
pub use entry::{Entry, EntryId};
pub use focus::PendingFocus;
pub use list::{EntryList, MAX_ENTRIES};
pub use reducers::apply;
pub use state::FormState;

pub(crate) use entry::IdAllocator;
