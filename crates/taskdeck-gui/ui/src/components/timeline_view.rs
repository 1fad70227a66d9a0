use taskdeck_core::catalog::{
  TagTone,
  TimelineMock,
  TimelineTask
};
use taskdeck_core::Theme;
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
pub struct TimelineViewProps {
  pub timeline: TimelineMock
}

#[function_component(TimelineView)]
pub fn timeline_view(
  props: &TimelineViewProps
) -> Html {
  let theme = use_theme();
  let timeline = &props.timeline;
  let template = format!(
    "grid-template-columns:repeat({}, \
     1fr);grid-template-rows:auto \
     repeat({}, minmax(96px, auto))",
    timeline.days.len(),
    timeline.row_count()
  );

  html! {
      <section class={classes!("timeline", resolve(theme, StyleToken::Card))}>
          <div class="timeline-grid" style={template}>
              {
                  for timeline.days.iter().map(|day| html! {
                      <div class={classes!("day-head", resolve(theme, StyleToken::Border))}>
                          <span class={resolve(theme, StyleToken::TextMuted)}>{ day.name.clone() }</span>
                          <strong class={resolve(theme, StyleToken::TextStrong)}>{ day.date.clone() }</strong>
                      </div>
                  })
              }
              { for timeline.tasks.iter().map(|task| task_card(theme, task)) }
          </div>
      </section>
  }
}

fn tone_class(tone: TagTone) -> &'static str {
  match tone {
    | TagTone::Default => "tag",
    | TagTone::Green => "tag tag-green",
    | TagTone::Yellow => "tag tag-yellow",
    | TagTone::Pink => "tag tag-pink"
  }
}

fn task_card(
  theme: Theme,
  task: &TimelineTask
) -> Html {
  html! {
      <div
          key={task.id.clone()}
          class={classes!("timeline-task", resolve(theme, StyleToken::Card))}
          style={format!("grid-column:{};grid-row:{}", task.column + 1, task.row + 2)}
      >
          <div class={resolve(theme, StyleToken::TextStrong)}>{ task.title.clone() }</div>
          <div class={classes!("task-date", resolve(theme, StyleToken::TextMuted))}>{ task.date.clone() }</div>
          <div class="task-tags">
              {
                  for task.tags.iter().map(|tag| html! {
                      <span class={tone_class(tag.tone)}>{ tag.label.clone() }</span>
                  })
              }
          </div>
          <div class={classes!("task-time", resolve(theme, StyleToken::TextMuted))}>
              { format!("{} - {}", task.start, task.end) }
          </div>
      </div>
  }
}
