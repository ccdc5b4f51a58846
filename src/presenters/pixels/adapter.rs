use std::sync::{Mutex, PoisonError};

use crate::controllers::interactive::events::explorer_event::ExplorerEvent;
use crate::controllers::interactive::ports::presenter::ExplorerPresenterPort;

/// Queues controller output until the event loop draws the next frame.
#[derive(Debug, Default)]
pub struct PixelsAdapter {
    events: Mutex<Vec<ExplorerEvent>>,
}

impl ExplorerPresenterPort for PixelsAdapter {
    fn present(&self, event: ExplorerEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl PixelsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<ExplorerEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
