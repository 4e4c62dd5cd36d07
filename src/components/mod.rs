//! UI Components
//!
//! One Leptos component per page section.

mod navbar;
mod hero;
mod features;
mod stats;
mod waste_grid;
mod steps;
mod faq;
mod contact;
mod footer;

pub use navbar::Navbar;
pub use hero::Hero;
pub use features::Features;
pub use stats::StatsBand;
pub use waste_grid::WasteGuide;
pub use steps::HowItWorks;
pub use faq::FaqSection;
pub use contact::ContactSection;
pub use footer::Footer;

/// Content blocks fade in once at least this fraction is visible
pub(crate) const REVEAL_THRESHOLD: f64 = 0.1;
