use std::rc::Rc;

use taskdeck_core::catalog::{
  TemplateEntry,
  TemplateKind
};
use taskdeck_core::style::{
  StyleToken,
  resolve
};
use taskdeck_core::{
  Catalog,
  Theme
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct TemplateGalleryProps {
  pub catalog: Rc<Catalog>
}

#[function_component(TemplateGallery)]
pub fn template_gallery(
  props: &TemplateGalleryProps
) -> Html {
  let theme = use_theme();
  let query = use_state(String::new);
  let matches = props
    .catalog
    .templates_matching(&query);

  let on_input = {
    let query = query.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        query.set(input.value());
      }
    )
  };

  html! {
      <section class="template-library">
          <h1 class={resolve(theme, StyleToken::TextStrong)}>{ "Template Library" }</h1>
          <div class={classes!("template-search", resolve(theme, StyleToken::Card))}>
              <input
                  class={resolve(theme, StyleToken::Input)}
                  type="search"
                  placeholder="Search project or task templates..."
                  value={(*query).clone()}
                  oninput={on_input}
              />
              <button type="button" class="btn primary">{ "Create Custom" }</button>
          </div>
          {
              if matches.is_empty() {
                  html! {
                      <p class={resolve(theme, StyleToken::TextMuted)}>
                          { format!("No templates match \"{}\".", query.trim()) }
                      </p>
                  }
              } else {
                  html! {
                      <div class="template-grid">
                          { for matches.into_iter().map(|entry| template_card(theme, entry)) }
                      </div>
                  }
              }
          }
      </section>
  }
}

fn template_card(
  theme: Theme,
  entry: &TemplateEntry
) -> Html {
  let icon = match entry.kind {
    | TemplateKind::Project => "▦",
    | TemplateKind::Task => "☰"
  };

  html! {
      <article key={entry.id} class={classes!("template-card", resolve(theme, StyleToken::Card))}>
          <div class={format!("template-icon accent-{}", entry.accent)} title={entry.kind.label()}>
              { icon }
          </div>
          <h4 class={resolve(theme, StyleToken::TextStrong)}>{ entry.name.clone() }</h4>
          <p class={resolve(theme, StyleToken::TextMuted)}>{ entry.description.clone() }</p>
          <div class="template-meta">
              <span class={format!("used accent-text-{}", entry.accent)}>
                  { format!("{} Used", entry.users) }
              </span>
              <span class="rating">{ format!("★ {:.1}", entry.rating) }</span>
              <button type="button" class={format!("btn pill accent-{}", entry.accent)}>{ "Use" }</button>
          </div>
      </article>
  }
}
