use crate::controllers::interactive::events::explorer_event::ExplorerEvent;

pub trait ExplorerPresenterPort: Send + Sync {
    fn present(&self, event: ExplorerEvent);
}
