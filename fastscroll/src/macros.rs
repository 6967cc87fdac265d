// Internal logging. With `feature = "tracing"` every event goes to `tracing` under the
// `fastscroll` target; without it the macros expand to nothing and arguments are not evaluated.

#[cfg(feature = "tracing")]
macro_rules! fevent {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "fastscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fevent {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! ftrace {
    ($($tt:tt)*) => {
        fevent!(trace, $($tt)*)
    };
}

macro_rules! fwarn {
    ($($tt:tt)*) => {
        fevent!(warn, $($tt)*)
    };
}
