use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_ENABLED.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_verbose() {
            println!($($arg)*);
        }
    };
}
