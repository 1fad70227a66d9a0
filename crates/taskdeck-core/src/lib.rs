//! State machines and static content behind the Taskdeck dashboard.
//!
//! Nothing in this crate touches the browser. The UI crate wraps these
//! types in Yew reducers and feeds them clicks, locations, timer ticks and
//! `localStorage`.

pub mod catalog;
pub mod config;
pub mod modal;
pub mod navigation;
pub mod picker;
pub mod route;
pub mod storage;
pub mod style;
pub mod theme;
pub mod typewriter;

pub use catalog::Catalog;
pub use config::DashboardConfig;
pub use modal::{
  ModalKind,
  ModalOverlay
};
pub use navigation::{
  NavAction,
  NavigationRequest,
  NavigationState,
  Transition
};
pub use picker::{
  ProjectKind,
  ProjectTypePicker
};
pub use route::{
  MenuGroup,
  Route
};
pub use storage::PreferenceStore;
pub use theme::{
  Theme,
  ThemeStore
};
pub use typewriter::{
  Generation,
  TickOutcome,
  TimerHandle,
  TypewriterTask
};
