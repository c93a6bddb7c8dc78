pub mod content;
pub mod html;
pub mod state;
pub mod tracker;
pub mod views;

pub use content::{ContentError, Portfolio, load_portfolio};
pub use state::{ContactForm, PageEvent, PageState, ScrollGate, apply, reduce};
pub use tracker::{ActiveSectionTracker, ScrollSubscription, resolve_active};
