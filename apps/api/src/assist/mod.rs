// AI assistance: the dispatcher, its strategies and transport, and the HTTP
// entry points the UI calls. Remote failures never reach the caller; the
// local heuristics in `analysis` answer instead.

pub mod dispatcher;
pub mod handlers;
pub mod strategy;
pub mod transport;
