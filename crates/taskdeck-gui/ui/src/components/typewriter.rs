use std::rc::Rc;

use gloo::timers::callback::Interval;
use taskdeck_core::{
  TickOutcome,
  TimerHandle,
  TypewriterTask
};
use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

/// Browser interval driving one typewriter run.
struct IntervalTimer(Interval);

impl TimerHandle for IntervalTimer {
  fn cancel(self) {
    // May run inside this interval's own callback; dropping it there would
    // free the closure mid-call.
    wasm_bindgen_futures::spawn_local(
      async move { drop(self.0) }
    );
  }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
  pub text:     AttrValue,
  pub speed_ms: u32,
  #[prop_or_default]
  pub class:    AttrValue
}

#[function_component(Typewriter)]
pub fn typewriter(
  props: &TypewriterProps
) -> Html {
  let task = use_mut_ref(
    TypewriterTask::<IntervalTimer>::new
  );
  let displayed = use_state(String::new);

  {
    let task = task.clone();
    let displayed = displayed.clone();
    use_effect_with(
      (props.text.clone(), props.speed_ms),
      move |(text, speed_ms)| {
        displayed.set(String::new());
        let ticker = Rc::downgrade(&task);
        task.borrow_mut().start(
          text,
          *speed_ms,
          move |generation, period_ms| {
            IntervalTimer(Interval::new(
              period_ms,
              move || {
                let Some(task) =
                  ticker.upgrade()
                else {
                  return;
                };
                let mut task =
                  task.borrow_mut();
                if task.tick(generation)
                  != TickOutcome::Stale
                {
                  displayed.set(
                    task
                      .displayed()
                      .to_string()
                  );
                }
              }
            ))
          }
        );
        move || task.borrow_mut().cancel()
      }
    );
  }

  html! {
      <span class={props.class.clone()} aria-label={props.text.clone()}>
          { (*displayed).clone() }
      </span>
  }
}
