// Roadmaps: checklist sections built from a learning path, plus the toggle
// state machine and the in-memory store that holds them between requests.

pub mod handlers;
pub mod state;
pub mod store;
pub mod transformer;
