mod error;
mod launcher;
mod store;
mod widget;

pub use error::{Result, StoreError};
pub use launcher::LauncherEntry;
pub use store::WidgetStore;
pub use widget::{Orientation, Widget, WidgetAppearance, WidgetProperty, WidgetTheme, WidgetType};
