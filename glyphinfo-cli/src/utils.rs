use std::error::Error;

/// Report a fatal error and exit with status 1
///
/// Our errors already spell out their cause in their message, so the
/// `source()` chain is not printed again.
pub(crate) fn die(doing: &str, err: impl Error) -> ! {
    eprintln!("Error {}: {}", doing, err);
    std::process::exit(1);
}
