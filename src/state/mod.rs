/// State management module
///
/// This module handles all page state, including:
/// - Fixed page content (data.rs)
/// - The tab / slideshow state machine (page.rs)
/// - The slideshow timer (timer.rs)

pub mod data;
pub mod page;
pub mod timer;
