use serde::{
  Deserialize,
  Serialize
};

/// Auxiliary panels the sidebar can raise above the dashboard.
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
pub enum ModalKind {
  Invite,
  Settings,
  Wallet,
  SyncStatus,
  Bookmarks,
  Notes
}

impl ModalKind {
  pub fn default_title(
    self
  ) -> &'static str {
    match self {
      | Self::Invite => "Invite teammates",
      | Self::Settings => "Settings",
      | Self::Wallet => "Wallet",
      | Self::SyncStatus => "Sync status",
      | Self::Bookmarks => "Bookmarks",
      | Self::Notes => "Notes"
    }
  }

  pub fn default_body(
    self
  ) -> &'static str {
    match self {
      | Self::Invite => {
        "Share the invite link to add \
         people to Team Project."
      }
      | Self::Settings => {
        "Workspace preferences live \
         here."
      }
      | Self::Wallet => {
        "Billing is managed by the \
         workspace owner."
      }
      | Self::SyncStatus => {
        "Everything is up to date."
      }
      | Self::Bookmarks => {
        "Nothing bookmarked yet."
      }
      | Self::Notes => {
        "Jot down ideas for the next \
         sprint."
      }
    }
  }
}

/// The single overlay shown above all other content.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct ModalOverlay {
  pub kind:  ModalKind,
  pub title: String,
  pub body:  String
}

impl ModalOverlay {
  pub fn new(kind: ModalKind) -> Self {
    Self {
      kind,
      title: kind
        .default_title()
        .to_string(),
      body: kind
        .default_body()
        .to_string()
    }
  }

  pub fn custom(
    kind: ModalKind,
    title: impl Into<String>,
    body: impl Into<String>
  ) -> Self {
    Self {
      kind,
      title: title.into(),
      body: body.into()
    }
  }
}

/// Holds at most one overlay. Showing a new overlay replaces the current one.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ModalSlot {
  current: Option<ModalOverlay>
}

impl ModalSlot {
  /// Returns true when the visible overlay changed.
  pub fn show(
    &mut self,
    overlay: ModalOverlay
  ) -> bool {
    if self.current.as_ref()
      == Some(&overlay)
    {
      return false;
    }
    if let Some(previous) = &self.current
    {
      tracing::debug!(
        replaced = ?previous.kind,
        kind = ?overlay.kind,
        "replacing open modal"
      );
    } else {
      tracing::debug!(
        kind = ?overlay.kind,
        "opening modal"
      );
    }
    self.current = Some(overlay);
    true
  }

  pub fn hide(&mut self) -> bool {
    match self.current.take() {
      | Some(closed) => {
        tracing::debug!(
          kind = ?closed.kind,
          "closed modal"
        );
        true
      }
      | None => false
    }
  }

  pub fn current(
    &self
  ) -> Option<&ModalOverlay> {
    self.current.as_ref()
  }

  pub fn is_open(&self) -> bool {
    self.current.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn showing_a_second_modal_replaces_the_first(
  ) {
    let mut slot = ModalSlot::default();
    assert!(slot.show(ModalOverlay::new(
      ModalKind::Invite
    )));
    assert!(slot.show(
      ModalOverlay::custom(
        ModalKind::Wallet,
        "B",
        "second"
      )
    ));

    let visible = slot
      .current()
      .expect("modal visible");
    assert_eq!(
      visible.kind,
      ModalKind::Wallet
    );
    assert_eq!(visible.title, "B");
    assert_eq!(visible.body, "second");
  }

  #[test]
  fn hide_is_a_no_op_when_nothing_is_open(
  ) {
    let mut slot = ModalSlot::default();
    assert!(!slot.hide());
    slot.show(ModalOverlay::new(
      ModalKind::Settings
    ));
    assert!(slot.hide());
    assert!(!slot.is_open());
  }

  #[test]
  fn reopening_the_same_modal_reports_no_change(
  ) {
    let mut slot = ModalSlot::default();
    let overlay =
      ModalOverlay::new(ModalKind::Notes);
    assert!(slot.show(overlay.clone()));
    assert!(!slot.show(overlay));
  }
}
