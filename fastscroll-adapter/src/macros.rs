// Controller events share the core crate's `fastscroll` target so one filter covers both crates.

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

macro_rules! fdebug {
    ($($tt:tt)*) => {
        fevent!(debug, $($tt)*)
    };
}
