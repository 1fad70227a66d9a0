use std::rc::Rc;

use taskdeck_core::{
  Catalog,
  Theme
};
use taskdeck_core::catalog::{
  ActivityRow,
  ActivityStatus,
  StatCard,
  Trend,
  WeeklyBar
};
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
pub struct DashboardViewProps {
  pub catalog: Rc<Catalog>
}

#[function_component(DashboardView)]
pub fn dashboard_view(
  props: &DashboardViewProps
) -> Html {
  let theme = use_theme();

  html! {
      <section class="dashboard">
          <div class="stat-grid">
              { for props.catalog.stats.iter().map(|stat| stat_card(theme, stat)) }
          </div>
          <div class="panel-grid">
              <div class={classes!("weekly", resolve(theme, StyleToken::Card))}>
                  <h3 class={resolve(theme, StyleToken::TextStrong)}>{ "Weekly Activity" }</h3>
                  <div class="weekly-bars">
                      { for props.catalog.weekly_activity.iter().map(weekly_bar) }
                  </div>
              </div>
              <RecentActivity rows={props.catalog.recent_activity.clone()} />
          </div>
      </section>
  }
}

fn stat_card(
  theme: Theme,
  stat: &StatCard
) -> Html {
  let trend = match stat.trend {
    | Trend::Up => "trend up",
    | Trend::Down => "trend down"
  };

  html! {
      <div class={classes!("stat", resolve(theme, StyleToken::Card))}>
          <span class={format!("stat-accent accent-{}", stat.accent)}></span>
          <div class={resolve(theme, StyleToken::TextMuted)}>{ stat.label.clone() }</div>
          <div class={classes!("stat-value", resolve(theme, StyleToken::TextStrong))}>{ stat.value.clone() }</div>
          <div class={trend}>{ stat.change.clone() }</div>
      </div>
  }
}

fn weekly_bar(bar: &WeeklyBar) -> Html {
  html! {
      <div class="weekly-bar">
          <div class="bar-track">
              <div class="bar-fill" style={format!("height:{}%", bar.percent)}></div>
          </div>
          <span>{ bar.day.clone() }</span>
      </div>
  }
}

fn status_class(
  status: ActivityStatus
) -> &'static str {
  match status {
    | ActivityStatus::InProgress => {
      "status in-progress"
    }
    | ActivityStatus::Completed => {
      "status completed"
    }
    | ActivityStatus::Delayed => {
      "status delayed"
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct RecentActivityProps {
  pub rows: Vec<ActivityRow>
}

#[function_component(RecentActivity)]
pub fn recent_activity(
  props: &RecentActivityProps
) -> Html {
  let theme = use_theme();

  html! {
      <div class={classes!("recent-activity", resolve(theme, StyleToken::Card))}>
          <h3 class={resolve(theme, StyleToken::TextStrong)}>{ "Recent Activity" }</h3>
          <table>
              <thead class={resolve(theme, StyleToken::TextMuted)}>
                  <tr>
                      <th>{ "Project" }</th>
                      <th>{ "Task" }</th>
                      <th>{ "Status" }</th>
                      <th>{ "Time" }</th>
                      <th>{ "User" }</th>
                  </tr>
              </thead>
              <tbody>
                  {
                      for props.rows.iter().map(|row| html! {
                          <tr class={resolve(theme, StyleToken::Divider)}>
                              <td class={resolve(theme, StyleToken::TextStrong)}>{ row.project.clone() }</td>
                              <td>{ row.task.clone() }</td>
                              <td><span class={status_class(row.status)}>{ row.status.label() }</span></td>
                              <td>{ row.time.clone() }</td>
                              <td>{ row.user.clone() }</td>
                          </tr>
                      })
                  }
              </tbody>
          </table>
      </div>
  }
}
