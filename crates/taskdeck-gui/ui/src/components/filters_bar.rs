use taskdeck_core::catalog::FiltersMock;
use taskdeck_core::style::{
  StyleToken,
  resolve
};
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct FiltersBarProps {
  pub filters: FiltersMock
}

#[function_component(FiltersBar)]
pub fn filters_bar(
  props: &FiltersBarProps
) -> Html {
  let theme = use_theme();
  let filters = &props.filters;

  html! {
      <div class={classes!("filters-bar", resolve(theme, StyleToken::Card))}>
          <span class={resolve(theme, StyleToken::TextStrong)}>
              { format!("Filters ({})", filters.active) }
          </span>
          <div class="swatches">
              {
                  for filters.colors.iter().map(|color| html! {
                      <span class={format!("swatch accent-{color}")} title={color.clone()}></span>
                  })
              }
          </div>
          <span class={classes!("deleted", resolve(theme, StyleToken::TextMuted))}>
              { format!("Deleted ({})", filters.deleted) }
          </span>
      </div>
  }
}
