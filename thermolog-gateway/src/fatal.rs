use std::panic;

/// Exit status used when a panic ends the process.
pub const PANIC_EXIT_CODE: i32 = 1;

/// Makes any panic, including one inside a request handler, end the process.
///
/// The stores are guarded by std mutexes; a handler that panics while
/// holding them would otherwise leave the server running with every store
/// poisoned. The previously installed hook still runs first, so the
/// color-eyre report is printed before exiting.
pub fn exit_on_panic() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        previous(info);
        tracing::error!(panic = %info, "unhandled fault, exiting");
        std::process::exit(PANIC_EXIT_CODE);
    }));
}
