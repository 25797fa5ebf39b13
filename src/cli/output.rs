//! User-facing output for the CLI: plain results on stdout, coloured diffs.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints converted text to stdout with a trailing newline.
pub fn print_document(text: &str) {
    println!("{text}");
}

/// Prints a line diff from `current` to `canonical`, headed by the file name.
pub fn print_format_diff(name: &str, current: &str, canonical: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    println!("--- {name} is not in canonical form ---");
    let _ = stdout.reset();

    let changeset = Changeset::new(current, canonical, "\n");
    print_diff(&mut stdout, &changeset.diffs);
    let _ = stdout.reset();
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn print_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        match diff {
            Difference::Same(ref x) => {
                let _ = stdout.reset();
                for line in x.lines() {
                    println!(" {line}");
                }
            }
            Difference::Add(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                for line in x.lines() {
                    println!("+{line}");
                }
            }
            Difference::Rem(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                for line in x.lines() {
                    println!("-{line}");
                }
            }
        }
    }
}
