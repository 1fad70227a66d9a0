mod add_project_card;
mod calendar_view;
mod dashboard_view;
mod filters_bar;
mod header;
mod last_projects;
mod modal_host;
mod placeholder_panel;
mod sidebar;
mod team_insights;
mod template_gallery;
mod theme_toggle;
mod timeline_view;
mod typewriter;

pub use add_project_card::AddProjectCard;
pub use calendar_view::CalendarView;
pub use dashboard_view::{
  DashboardView,
  RecentActivity
};
pub use filters_bar::FiltersBar;
pub use header::Header;
pub use last_projects::LastProjects;
pub use modal_host::ModalHost;
pub use placeholder_panel::PlaceholderPanel;
pub use sidebar::Sidebar;
pub use team_insights::TeamInsightsCard;
pub use template_gallery::TemplateGallery;
pub use theme_toggle::ThemeToggle;
pub use timeline_view::TimelineView;
pub use typewriter::Typewriter;
use taskdeck_core::Theme;
use yew::{
  hook,
  use_context
};

/// The resolved theme. Components only render after hydration, so the
/// light fallback is never observed in practice.
#[hook]
pub fn use_theme() -> Theme {
  use_context::<Theme>()
    .unwrap_or(Theme::Light)
}

