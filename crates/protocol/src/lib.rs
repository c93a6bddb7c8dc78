pub mod commands;
pub mod icon;
pub mod section;
pub mod theme;

pub use commands::{
    Action, ButtonStyle, ContactField, HeadingLevel, LinkTarget, PageCommand, RowAlign, TextSize,
};
pub use icon::Icon;
pub use section::{SectionId, SectionLayout, SectionLayouts, Viewport};
pub use theme::{ThemeMode, ThemeToken};
