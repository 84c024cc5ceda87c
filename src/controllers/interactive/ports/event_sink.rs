use crate::controllers::interactive::events::explorer_event::ExplorerEvent;

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ExplorerEvent);
}

impl<F> EventSink for F
where
    F: Fn(ExplorerEvent) + Send + Sync,
{
    fn emit(&self, event: ExplorerEvent) {
        self(event);
    }
}
