mod generate;

pub use self::generate::*;

pub trait InternalEvent {
    fn emit_logs(&self) {}
}

pub fn emit(event: impl InternalEvent) {
    event.emit_logs();
}

#[macro_export]
macro_rules! emit {
    ($event:expr) => {
        $crate::internal_events::emit($event)
    };
}
