use taskdeck_core::Theme;
use taskdeck_core::catalog::TeamInsights;
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
pub struct TeamInsightsProps {
  pub insights: TeamInsights
}

#[function_component(TeamInsightsCard)]
pub fn team_insights(
  props: &TeamInsightsProps
) -> Html {
  let theme = use_theme();
  let insights = &props.insights;
  let total = insights.legend_total();

  html! {
      <section class={classes!("team-insights", resolve(theme, StyleToken::Card))}>
          <div class="card-head">
              <h3 class={resolve(theme, StyleToken::TextStrong)}>{ "Team Insights" }</h3>
              <span class="trend up">{ insights.trend.clone() }</span>
          </div>
          <div class="insight-rows">
              { meter(theme, "Time spent", &insights.time_spent, insights.time_share) }
              { meter(theme, "Tasks", &insights.tasks.to_string(), insights.task_share) }
              { meter(theme, "Completion", &format!("{}%", insights.completion), insights.completion) }
          </div>
          <div class="legend">
              {
                  for insights.legend.iter().map(|entry| {
                      let share = if total == 0 {
                          0
                      } else {
                          entry.count * 100 / total
                      };
                      html! {
                          <div class="legend-entry" style={format!("flex-grow:{share}")}>
                              <span class={format!("dot accent-{}", entry.accent)}></span>
                              <span class={resolve(theme, StyleToken::TextMuted)}>
                                  { format!("{} ({})", entry.label, entry.count) }
                              </span>
                          </div>
                      }
                  })
              }
          </div>
      </section>
  }
}

fn meter(
  theme: Theme,
  label: &str,
  value: &str,
  percent: u8
) -> Html {
  html! {
      <div class="meter">
          <div class="meter-head">
              <span class={resolve(theme, StyleToken::TextMuted)}>{ label.to_string() }</span>
              <strong class={resolve(theme, StyleToken::TextStrong)}>{ value.to_string() }</strong>
          </div>
          <div class="progress">
              <div class="progress-fill" style={format!("width:{}%", percent.min(100))}></div>
          </div>
      </div>
  }
}
