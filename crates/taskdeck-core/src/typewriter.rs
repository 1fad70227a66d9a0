//! Reveals a string one character per tick.
//!
//! Every run gets a fresh [`Generation`]. Ticks carry the generation they
//! were scheduled with; a tick from an earlier run is stale and never
//! touches the displayed text.

use tracing::{
  debug,
  trace
};

/// A live repeating timer. Cancelling consumes the handle.
pub trait TimerHandle {
  fn cancel(self);
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub struct Generation(u64);

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TickOutcome {
  Advanced,
  Finished,
  Stale
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct Typewriter {
  text:       String,
  revealed:   usize,
  total:      usize,
  speed_ms:   u32,
  generation: Generation
}

impl Typewriter {
  /// Clears the display and begins a new run.
  pub fn restart(
    &mut self,
    text: &str,
    speed_ms: u32
  ) -> Generation {
    self.generation =
      Generation(self.generation.0 + 1);
    self.text = text.to_string();
    self.total = text.chars().count();
    self.revealed = 0;
    self.speed_ms = speed_ms;
    self.generation
  }

  /// Retires the current run so its queued ticks become stale.
  pub fn retire(&mut self) {
    self.generation =
      Generation(self.generation.0 + 1);
  }

  pub fn advance(
    &mut self,
    generation: Generation
  ) -> TickOutcome {
    if generation != self.generation {
      return TickOutcome::Stale;
    }
    if self.revealed < self.total {
      self.revealed += 1;
    }
    if self.revealed >= self.total {
      TickOutcome::Finished
    } else {
      TickOutcome::Advanced
    }
  }

  pub fn displayed(&self) -> &str {
    let end = self
      .text
      .char_indices()
      .nth(self.revealed)
      .map(|(index, _)| index)
      .unwrap_or(self.text.len());
    &self.text[..end]
  }

  pub fn is_complete(&self) -> bool {
    self.revealed >= self.total
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn speed_ms(&self) -> u32 {
    self.speed_ms
  }

  pub fn generation(&self) -> Generation {
    self.generation
  }
}

/// A [`Typewriter`] plus the single timer driving it.
#[derive(Debug)]
pub struct TypewriterTask<H: TimerHandle> {
  state: Typewriter,
  timer: Option<H>
}

impl<H: TimerHandle> Default
  for TypewriterTask<H>
{
  fn default() -> Self {
    Self {
      state: Typewriter::default(),
      timer: None
    }
  }
}

impl<H: TimerHandle> TypewriterTask<H> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cancels any run in flight and starts over from an empty display.
  /// `schedule` receives the run's generation and the tick period and
  /// returns the timer it created. Empty text completes without one.
  pub fn start<F>(
    &mut self,
    text: &str,
    speed_ms: u32,
    schedule: F
  ) -> Generation
  where
    F: FnOnce(Generation, u32) -> H
  {
    self.cancel_timer();
    let generation =
      self.state.restart(text, speed_ms);
    debug!(
      chars = self.state.total,
      speed_ms,
      ?generation,
      "starting typewriter"
    );
    if !self.state.is_complete() {
      self.timer =
        Some(schedule(generation, speed_ms));
    }
    generation
  }

  pub fn tick(
    &mut self,
    generation: Generation
  ) -> TickOutcome {
    let outcome =
      self.state.advance(generation);
    match outcome {
      | TickOutcome::Finished => {
        self.cancel_timer();
        debug!(
          ?generation,
          "typewriter finished"
        );
      }
      | TickOutcome::Stale => {
        trace!(
          ?generation,
          current = ?self.state.generation,
          "ignored stale tick"
        );
      }
      | TickOutcome::Advanced => {}
    }
    outcome
  }

  /// Teardown: stops the timer and makes any already-queued tick stale.
  pub fn cancel(&mut self) {
    self.cancel_timer();
    self.state.retire();
  }

  pub fn displayed(&self) -> &str {
    self.state.displayed()
  }

  pub fn is_running(&self) -> bool {
    self.timer.is_some()
  }

  pub fn state(&self) -> &Typewriter {
    &self.state
  }

  fn cancel_timer(&mut self) {
    if let Some(timer) = self.timer.take()
    {
      timer.cancel();
    }
  }
}

impl<H: TimerHandle> Drop
  for TypewriterTask<H>
{
  fn drop(&mut self) {
    self.cancel_timer();
  }
}

#[cfg(test)]
mod tests {
  use std::cell::{
    Cell,
    RefCell
  };
  use std::rc::Rc;

  use super::*;

  #[derive(Debug)]
  struct FakeTimer {
    live: Rc<Cell<usize>>
  }

  impl TimerHandle for FakeTimer {
    fn cancel(self) {
      self.live.set(self.live.get() - 1);
    }
  }

  struct FakeClock {
    live:      Rc<Cell<usize>>,
    scheduled: Rc<RefCell<Vec<Generation>>>
  }

  impl FakeClock {
    fn new() -> Self {
      Self {
        live:      Rc::new(Cell::new(0)),
        scheduled: Rc::default()
      }
    }

    fn schedule(
      &self
    ) -> impl FnOnce(Generation, u32) -> FakeTimer
    {
      let live = self.live.clone();
      let scheduled =
        self.scheduled.clone();
      move |generation, _speed| {
        scheduled
          .borrow_mut()
          .push(generation);
        live.set(live.get() + 1);
        FakeTimer { live }
      }
    }

    fn scheduled(&self) -> Vec<Generation> {
      self.scheduled.borrow().clone()
    }
  }

  fn run_to_end(
    task: &mut TypewriterTask<FakeTimer>,
    generation: Generation
  ) -> Vec<String> {
    let mut frames = Vec::new();
    loop {
      let outcome = task.tick(generation);
      frames
        .push(task.displayed().to_string());
      if outcome != TickOutcome::Advanced {
        break;
      }
    }
    frames
  }

  #[test]
  fn reveals_one_character_per_tick() {
    let clock = FakeClock::new();
    let mut task = TypewriterTask::new();
    let generation = task.start(
      "Walter",
      150,
      clock.schedule()
    );

    assert_eq!(task.displayed(), "");
    let frames =
      run_to_end(&mut task, generation);
    assert_eq!(frames, vec![
      "W", "Wa", "Wal", "Walt", "Walte",
      "Walter"
    ]);
    assert!(!task.is_running());
    assert_eq!(clock.live.get(), 0);
  }

  #[test]
  fn restart_discards_the_previous_run() {
    let clock = FakeClock::new();
    let mut task = TypewriterTask::new();
    let first = task.start(
      "Walter",
      150,
      clock.schedule()
    );
    task.tick(first);
    task.tick(first);

    let second =
      task.start("Walt", 150, clock.schedule());
    assert_eq!(task.displayed(), "");
    assert_eq!(clock.live.get(), 1);

    let mut frames = Vec::new();
    for generation in
      [first, second, first, second]
    {
      task.tick(generation);
      frames.push(
        task.displayed().to_string()
      );
    }
    assert_eq!(frames, vec![
      "", "W", "W", "Wa"
    ]);

    let rest =
      run_to_end(&mut task, second);
    assert_eq!(
      rest.last().map(String::as_str),
      Some("Walt")
    );
    assert!(rest.iter().all(|frame| {
      "Walt".starts_with(frame.as_str())
    }));
    assert_eq!(clock.live.get(), 0);
    assert_eq!(clock.scheduled(), vec![
      first, second
    ]);
  }

  #[test]
  fn empty_text_completes_without_a_timer(
  ) {
    let clock = FakeClock::new();
    let mut task = TypewriterTask::new();
    task.start("", 150, clock.schedule());
    assert!(task.state().is_complete());
    assert!(!task.is_running());
    assert!(clock.scheduled().is_empty());
  }

  #[test]
  fn teardown_stops_the_timer_and_makes_ticks_stale(
  ) {
    let clock = FakeClock::new();
    let mut task = TypewriterTask::new();
    let generation = task.start(
      "Walter",
      150,
      clock.schedule()
    );
    task.tick(generation);
    task.cancel();

    assert_eq!(clock.live.get(), 0);
    assert_eq!(
      task.tick(generation),
      TickOutcome::Stale
    );
    assert_eq!(task.displayed(), "W");
  }

  #[test]
  fn dropping_the_task_cancels_its_timer(
  ) {
    let clock = FakeClock::new();
    {
      let mut task = TypewriterTask::new();
      task.start(
        "Walter",
        150,
        clock.schedule()
      );
      assert_eq!(clock.live.get(), 1);
    }
    assert_eq!(clock.live.get(), 0);
  }

  #[test]
  fn never_splits_a_multibyte_character(
  ) {
    let mut task =
      TypewriterTask::<FakeTimer>::new();
    let clock = FakeClock::new();
    let generation =
      task.start("né✓", 10, clock.schedule());
    let frames =
      run_to_end(&mut task, generation);
    assert_eq!(frames, vec![
      "n", "né", "né✓"
    ]);
  }
}
