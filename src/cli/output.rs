//! Handles all user-facing output for the CLI.
//!
//! Progress and summary lines go to stdout; warnings and errors go to
//! stderr. Color failures are ignored, the text always prints.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints a plain progress/status line.
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Prints a green success line.
pub fn success(msg: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    println!("{}", msg);
    let _ = stdout.reset();
}

/// Prints a yellow warning line to stderr.
pub fn warn(msg: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
    eprintln!("Warning: {}", msg);
    let _ = stderr.reset();
}

/// Prints a red bold error line to stderr.
pub fn error(msg: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    eprintln!("Error: {}", msg);
    let _ = stderr.reset();
}
