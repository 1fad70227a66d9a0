use taskdeck_core::Theme;
use taskdeck_core::catalog::{
  CalendarEvent,
  CalendarMock
};
use taskdeck_core::style::{
  StyleToken,
  resolve
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::use_theme;

#[derive(Properties, PartialEq)]
pub struct CalendarViewProps {
  pub calendar: CalendarMock
}

/// Week planner with a Card/Blocks/Table switch. The switch is local to
/// the panel and resets when the section changes.
#[function_component(CalendarView)]
pub fn calendar_view(
  props: &CalendarViewProps
) -> Html {
  let theme = use_theme();
  let selected = use_state(|| 0_usize);
  let calendar = &props.calendar;
  let view = calendar
    .views
    .get(*selected)
    .map(String::as_str)
    .unwrap_or("Card");

  let body = match view {
    | "Blocks" => blocks(theme, calendar),
    | "Table" => table(theme, calendar),
    | _ => card_grid(theme, calendar)
  };

  html! {
      <section class={classes!("calendar", resolve(theme, StyleToken::Card))}>
          <div class="calendar-toolbar">
              <div>
                  <h2 class={resolve(theme, StyleToken::TextStrong)}>{ calendar.month.clone() }</h2>
                  <span class={resolve(theme, StyleToken::TextMuted)}>{ calendar.range.clone() }</span>
              </div>
              <div class="view-switch" role="tablist">
                  {
                      for calendar.views.iter().enumerate().map(|(index, label)| {
                          let active = index == *selected;
                          let selected = selected.clone();
                          let onclick = Callback::from(move |_: MouseEvent| selected.set(index));
                          html! {
                              <button
                                  type="button"
                                  role="tab"
                                  aria-selected={active.to_string()}
                                  class={classes!("view-option", resolve(theme, StyleToken::Hover), active.then(|| resolve(theme, StyleToken::ToggleActive)))}
                                  {onclick}
                              >
                                  { label.clone() }
                              </button>
                          }
                      })
                  }
              </div>
              <span class={classes!("edited", resolve(theme, StyleToken::TextMuted))}>
                  { format!("Edited {} by {}", calendar.edited_ago, calendar.edited_by) }
              </span>
          </div>
          { body }
      </section>
  }
}

fn event_chip(
  theme: Theme,
  event: &CalendarEvent
) -> Html {
  html! {
      <div class={format!("event accent-{}", event.accent)}>
          <span class={resolve(theme, StyleToken::TextStrong)}>{ event.title.clone() }</span>
          {
              match event.progress {
                  | Some(progress) => html! {
                      <div class="progress">
                          <div class="progress-fill" style={format!("width:{progress}%")}></div>
                      </div>
                  },
                  | None => html! {}
              }
          }
      </div>
  }
}

fn card_grid(
  theme: Theme,
  calendar: &CalendarMock
) -> Html {
  let columns = calendar.days.len();
  let template = format!(
    "grid-template-columns:64px \
     repeat({columns}, 1fr)"
  );

  html! {
      <div class="calendar-grid" style={template}>
          <div></div>
          {
              for calendar.days.iter().map(|day| html! {
                  <div class={classes!("day-head", resolve(theme, StyleToken::TextMuted))}>
                      <span>{ day.name.clone() }</span>
                      <strong class={resolve(theme, StyleToken::TextStrong)}>{ day.date.clone() }</strong>
                  </div>
              })
          }
          {
              for calendar.time_slots.iter().enumerate().map(|(slot, time)| html! {
                  <div
                      class={classes!("slot-label", resolve(theme, StyleToken::TextMuted))}
                      style={format!("grid-row:{}", slot + 2)}
                  >
                      { time.clone() }
                  </div>
              })
          }
          {
              for calendar.events.iter().map(|event| html! {
                  <div
                      class="event-cell"
                      style={format!(
                          "grid-column:{};grid-row:{} / span {}",
                          event.day + 2,
                          event.slot + 2,
                          event.span.max(1)
                      )}
                  >
                      { event_chip(theme, event) }
                  </div>
              })
          }
      </div>
  }
}

fn blocks(
  theme: Theme,
  calendar: &CalendarMock
) -> Html {
  html! {
      <div class="calendar-blocks">
          {
              for calendar.days.iter().enumerate().map(|(index, day)| html! {
                  <div class={classes!("block-column", resolve(theme, StyleToken::Border))}>
                      <div class={resolve(theme, StyleToken::TextStrong)}>{ day.full.clone() }</div>
                      { for calendar.events_on(index).map(|event| event_chip(theme, event)) }
                  </div>
              })
          }
      </div>
  }
}

fn table(
  theme: Theme,
  calendar: &CalendarMock
) -> Html {
  html! {
      <table class="calendar-table">
          <thead class={resolve(theme, StyleToken::TextMuted)}>
              <tr>
                  <th>{ "Day" }</th>
                  <th>{ "Starts" }</th>
                  <th>{ "Event" }</th>
                  <th>{ "Progress" }</th>
              </tr>
          </thead>
          <tbody>
              {
                  for calendar.events.iter().map(|event| {
                      let day = calendar
                          .days
                          .get(event.day)
                          .map(|day| day.full.clone())
                          .unwrap_or_default();
                      let starts = calendar
                          .time_slots
                          .get(event.slot)
                          .cloned()
                          .unwrap_or_default();
                      let progress = event
                          .progress
                          .map(|progress| format!("{progress}%"))
                          .unwrap_or_else(|| "-".to_string());
                      html! {
                          <tr class={resolve(theme, StyleToken::Divider)}>
                              <td>{ day }</td>
                              <td>{ starts }</td>
                              <td class={resolve(theme, StyleToken::TextStrong)}>{ event.title.clone() }</td>
                              <td>{ progress }</td>
                          </tr>
                      }
                  })
              }
          </tbody>
      </table>
  }
}
