/// User interface module
///
/// - `hero.rs` - page heading
/// - `presenter.rs` - carousel / slideshow
/// - `tabs.rs` - tab triggers and panels
/// - `breeds.rs` - breed cards and badge row
/// - `stars.rs` - star rating canvas
/// - `transition.rs` - enter animations
/// - `style.rs` - palette and widget styles

pub mod breeds;
pub mod hero;
pub mod presenter;
pub mod stars;
pub mod style;
pub mod tabs;
pub mod transition;
