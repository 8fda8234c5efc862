use tracing::{trace, warn};

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{TimelineContext, TimelineEvent, TimelineObserver};

use super::{FrameScheduler, TimelineEngine};

impl<S: FrameScheduler> TimelineEngine<S> {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn TimelineObserver>) -> TimelineResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(TimelineError::InvalidInput(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.contains_key(&observer_id) {
            warn!(observer_id = %observer_id, "duplicate observer registration rejected");
            return Err(TimelineError::InvalidInput(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id)
    }

    pub(super) fn observer_context(&self) -> TimelineContext {
        TimelineContext {
            scroll_left: self.state.scroll_left(),
            viewport_width: self.state.viewport_width(),
            px_per_year: self.state.px_per_year(),
            center_year: self.state.center_year(),
            visible_range: self.visible_range(),
            active_interval: self.state.active_interval(),
            gesture_mode: self.gesture_mode(),
        }
    }

    /// Notifies observers in registration order.
    pub(super) fn emit_event(&mut self, event: TimelineEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        trace!(?event, observers = self.observers.len(), "emit timeline event");
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }
}
