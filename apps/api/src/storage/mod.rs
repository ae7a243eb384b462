// Persistence for the last resume, the in-progress draft, user preferences and
// feedback. Backed by Redis when configured; degrades to failure flags otherwise.

pub mod handlers;
pub mod manager;
pub mod store;
