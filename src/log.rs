use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

#[inline]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    () => {
        eprintln!("{} {}:{}", chrono::Local::now().time(), file!(), line!())
    };
    ($($arg:tt)*) => {
        eprintln!("{} {}:{}\t{}", chrono::Local::now().time(), file!(), line!(), format_args!($($arg)*))
    };
}

/// Same as [`log!`], but only with `--verbose`.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::log::is_verbose() {
            $crate::log!($($arg)*)
        }
    };
}
