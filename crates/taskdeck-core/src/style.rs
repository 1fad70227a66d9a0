//! The one place theme-dependent class names are chosen. Components ask for
//! a token and never branch on the theme themselves.

use crate::theme::Theme;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum StyleToken {
  Shell,
  Sidebar,
  Content,
  Card,
  Border,
  TextStrong,
  TextMuted,
  Hover,
  Input,
  Badge,
  WarnBadge,
  Divider,
  Toggle,
  ToggleActive
}

impl StyleToken {
  pub fn all() -> &'static [StyleToken] {
    &[
      StyleToken::Shell,
      StyleToken::Sidebar,
      StyleToken::Content,
      StyleToken::Card,
      StyleToken::Border,
      StyleToken::TextStrong,
      StyleToken::TextMuted,
      StyleToken::Hover,
      StyleToken::Input,
      StyleToken::Badge,
      StyleToken::WarnBadge,
      StyleToken::Divider,
      StyleToken::Toggle,
      StyleToken::ToggleActive
    ]
  }
}

pub fn resolve(
  theme: Theme,
  token: StyleToken
) -> &'static str {
  use StyleToken::*;

  match (theme, token) {
    | (Theme::Light, Shell) => {
      "shell shell-light"
    }
    | (Theme::Dark, Shell) => {
      "shell shell-dark"
    }
    | (Theme::Light, Sidebar) => {
      "sidebar-surface rose-50"
    }
    | (Theme::Dark, Sidebar) => {
      "sidebar-surface ink-950"
    }
    | (Theme::Light, Content) => {
      "content teal-50"
    }
    | (Theme::Dark, Content) => {
      "content slate-950"
    }
    | (Theme::Light, Card) => {
      "card card-light"
    }
    | (Theme::Dark, Card) => {
      "card card-dark"
    }
    | (Theme::Light, Border) => {
      "border-rose"
    }
    | (Theme::Dark, Border) => {
      "border-gray"
    }
    | (Theme::Light, TextStrong) => {
      "text-ink"
    }
    | (Theme::Dark, TextStrong) => {
      "text-white"
    }
    | (Theme::Light, TextMuted) => {
      "text-gray-600"
    }
    | (Theme::Dark, TextMuted) => {
      "text-gray-400"
    }
    | (Theme::Light, Hover) => {
      "hover-rose"
    }
    | (Theme::Dark, Hover) => {
      "hover-glass"
    }
    | (Theme::Light, Input) => {
      "input input-light"
    }
    | (Theme::Dark, Input) => {
      "input input-dark"
    }
    | (Theme::Light, Badge) => {
      "badge badge-red-light"
    }
    | (Theme::Dark, Badge) => {
      "badge badge-red-dark"
    }
    | (Theme::Light, WarnBadge) => {
      "badge badge-amber-light"
    }
    | (Theme::Dark, WarnBadge) => {
      "badge badge-amber-dark"
    }
    | (Theme::Light, Divider) => {
      "divider divider-light"
    }
    | (Theme::Dark, Divider) => {
      "divider divider-dark"
    }
    | (Theme::Light, Toggle) => {
      "theme-toggle toggle-light"
    }
    | (Theme::Dark, Toggle) => {
      "theme-toggle toggle-dark"
    }
    | (Theme::Light, ToggleActive) => {
      "toggle-on toggle-on-light"
    }
    | (Theme::Dark, ToggleActive) => {
      "toggle-on toggle-on-dark"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_token_differs_between_themes() {
    for token in StyleToken::all() {
      assert_ne!(
        resolve(Theme::Light, *token),
        resolve(Theme::Dark, *token),
        "{token:?}"
      );
    }
  }
}
