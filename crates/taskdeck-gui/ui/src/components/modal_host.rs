use taskdeck_core::style::{
  StyleToken,
  resolve
};
use taskdeck_core::{
  ModalKind,
  ModalOverlay
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
  pub overlay:          Option<ModalOverlay>,
  pub on_close:         Callback<()>,
  pub on_follow_system: Callback<()>
}

/// Renders the single open overlay above everything else. Escape is handled
/// by the shell; the backdrop and the close button land here.
#[function_component(ModalHost)]
pub fn modal_host(
  props: &ModalHostProps
) -> Html {
  let theme = use_theme();
  let Some(overlay) = &props.overlay
  else {
    return html! {};
  };

  let close = {
    let on_close = props.on_close.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_close.emit(())
      }
    )
  };

  let extra = match overlay.kind {
    | ModalKind::Settings => {
      let on_follow_system =
        props.on_follow_system.clone();
      html! {
          <div class="footer">
              <button type="button" class="btn" onclick={move |_| on_follow_system.emit(())}>
                  { "Follow system theme" }
              </button>
          </div>
      }
    }
    | ModalKind::Invite => html! {
        <div class="field">
            <input
                class={resolve(theme, StyleToken::Input)}
                readonly=true
                value="https://taskdeck.app/invite/team-project"
            />
        </div>
    },
    | _ => html! {}
  };

  html! {
      <div class="modal-backdrop" onclick={close.clone()}>
          <div
              class={classes!("modal", resolve(theme, StyleToken::Card))}
              role="dialog"
              aria-modal="true"
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              <div class="header">
                  <span class={resolve(theme, StyleToken::TextStrong)}>{ overlay.title.clone() }</span>
                  <button type="button" class="btn icon" aria-label="Close" onclick={close}>{ "×" }</button>
              </div>
              <div class="content">
                  <p class={resolve(theme, StyleToken::TextMuted)}>{ overlay.body.clone() }</p>
                  { extra }
              </div>
          </div>
      </div>
  }
}
