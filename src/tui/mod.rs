//! Terminal front-end: [`app`] holds state and input handling, [`ui`] draws
//! it, [`controller`] runs the event loop.

pub mod app;
pub mod controller;
pub mod ui;
