use serde::{
  Deserialize,
  Serialize
};

use crate::route::Route;

/// Things the "Add Project" card can create.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
  Project,
  TaskBoard,
  Template
}

impl ProjectKind {
  pub fn all() -> &'static [ProjectKind] {
    &[
      ProjectKind::Project,
      ProjectKind::TaskBoard,
      ProjectKind::Template
    ]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Project => "New Project",
      | Self::TaskBoard => {
        "New Task Board"
      }
      | Self::Template => "From Template"
    }
  }

  /// Section that hosts the newly created item.
  pub fn destination(self) -> Route {
    match self {
      | Self::Project => {
        Route::ProjectBoard
      }
      | Self::TaskBoard => {
        Route::TaskBoard
      }
      | Self::Template => Route::Template
    }
  }
}

/// What the add-project slot currently shows. The call-to-action card and
/// the option list never render together.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum ProjectTypePicker {
  #[default]
  CallToAction,
  Options
}

impl ProjectTypePicker {
  pub fn is_listing(self) -> bool {
    matches!(self, Self::Options)
  }
}
