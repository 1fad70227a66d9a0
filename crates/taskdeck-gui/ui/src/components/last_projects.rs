use taskdeck_core::catalog::LastProject;
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
pub struct LastProjectsProps {
  pub project: LastProject
}

#[function_component(LastProjects)]
pub fn last_projects(
  props: &LastProjectsProps
) -> Html {
  let theme = use_theme();
  let project = &props.project;

  html! {
      <section class={classes!("last-project", resolve(theme, StyleToken::Card))}>
          <div class="card-head">
              <h3 class={resolve(theme, StyleToken::TextStrong)}>{ "Last Projects" }</h3>
              <span class={resolve(theme, StyleToken::TextMuted)}>
                  { format!("{} members", project.members) }
              </span>
          </div>
          <div class="flow-canvas">
              {
                  for project.flow_nodes.iter().map(|node| html! {
                      <span class={classes!("flow-node", resolve(theme, StyleToken::Border))}>{ node.clone() }</span>
                  })
              }
              {
                  for project.cursors.iter().enumerate().map(|(index, name)| html! {
                      <span class={format!("cursor cursor-{}", index % 3)}>{ name.clone() }</span>
                  })
              }
          </div>
          <div class="card-foot">
              <span class={resolve(theme, StyleToken::TextStrong)}>{ project.name.clone() }</span>
              <button type="button" class={classes!("btn", resolve(theme, StyleToken::Hover))}>
                  { project.figma_label.clone() }
              </button>
          </div>
      </section>
  }
}
