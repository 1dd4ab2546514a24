//! `eticket-app` — the route table and the wiring that puts the session
//! store, navigation shell and route guard behind it.

pub mod router;
pub mod screen;

pub use router::{default_routes, Resolution, Route, Router, ScreenMatch};
pub use screen::Screen;
