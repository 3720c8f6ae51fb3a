//! Fatal exit paths: [`die!`](crate::die) for broken internal
//! invariants (aborts, core-dumpable), [`fatal!`](crate::fatal) for
//! expected runtime failures (clean failure exit).
//!
//! Both append a trailing newline to the message, so callers should
//! not end their format strings with one.

use std::fmt;
use std::process;

pub fn die(args: fmt::Arguments) -> ! {
    eprintln!("{args}");
    process::abort()
}

pub fn fatal(args: fmt::Arguments) -> ! {
    eprintln!("{args}");
    process::exit(1)
}

#[macro_export]
macro_rules! die {
    ($($arg:tt)*) => {
        $crate::fatal::die(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::fatal::fatal(::std::format_args!($($arg)*))
    };
}
