//! Interactive prompt loop for alternate colour suggestions.

use std::io::{BufRead, Write};

use contrastscan::MIN_COMPLIANT_RATIO;
use contrastscan::config::Settings;
use contrastscan::search::{SearchPolicy, find_alternate};
use rand::Rng;

use crate::args::utils::{make_rng, prompt_line};

/// Prompt for the colour to replace.
const COLOR_PROMPT: &str = "Need options for accessible colors?\nEnter one of the non-compliant colors to get an alternate pairing: ";
/// Prompt for the optional ratio ceiling.
const RATIO_PROMPT: &str = "Want the pairing under a certain contrast ratio? Enter a value (at least 4.5) or press enter: ";
/// Prompt for another suggestion.
const AGAIN_PROMPT: &str = "Need another option? (y/n): ";

/// What: Parse the ratio answer.
///
/// Output:
/// - 4.5 for an empty answer, the parsed number otherwise, `None` when not a number.
fn parse_ratio(answer: &str) -> Option<f64> {
    if answer.is_empty() {
        Some(MIN_COMPLIANT_RATIO)
    } else {
        answer.parse().ok()
    }
}

/// What: Run the question/answer loop over arbitrary streams.
///
/// Inputs:
/// - `input`/`output`: Terminal streams (or test buffers).
/// - `policy`: Attempt cap per suggestion.
/// - `rng`: Random source.
///
/// Output:
/// - `Ok(())` once the user is done or input ends; suggestions and search errors are
///   written to `output`.
///
/// # Errors
/// - Reading `input` or writing `output` failed; the session stops at that point.
///
/// Details:
/// - Asks for a colour and ratio once, prints a suggestion, then repeats the suggestion while
///   the user answers `y`. A failed search ends the loop.
pub fn run_session<I: BufRead, O: Write, R: Rng>(
    input: &mut I,
    output: &mut O,
    policy: &SearchPolicy,
    rng: &mut R,
) -> std::io::Result<()> {
    let Some(color) = prompt_line(input, output, COLOR_PROMPT)? else {
        return Ok(());
    };
    let Some(answer) = prompt_line(input, output, RATIO_PROMPT)? else {
        return Ok(());
    };
    let Some(ratio) = parse_ratio(&answer) else {
        writeln!(output, "Not a number: {answer}")?;
        return Ok(());
    };
    loop {
        match find_alternate(&color, ratio, policy, rng) {
            Ok(c) => writeln!(output, "{c}")?,
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(());
            }
        }
        match prompt_line(input, output, AGAIN_PROMPT)? {
            Some(a) if a.eq_ignore_ascii_case("y") => {}
            _ => return Ok(()),
        }
    }
}

/// What: Run the interactive session on the process's stdin/stdout.
///
/// Details:
/// - A terminal I/O failure ends the session and is logged.
pub fn handle_interactive(settings: &Settings) {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let mut rng = make_rng(settings.seed);
    if let Err(err) = run_session(&mut input, &mut output, &settings.search_policy(), &mut rng) {
        tracing::warn!(error = %err, "interactive session ended on I/O error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Run a session over canned input and return everything written.
    fn session(answers: &str) -> String {
        let mut input = std::io::Cursor::new(answers.to_string());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);
        run_session(&mut input, &mut out, &SearchPolicy::default(), &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Writer that accepts `budget` bytes and then fails like a closed pipe.
    struct ClosingOutput {
        budget: usize,
    }

    impl Write for ClosingOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Lines of output that look like suggested colours.
    fn suggestions(out: &str) -> Vec<String> {
        out.split(['\n', ' '])
            .filter(|t| t.len() == 7 && t.starts_with('#'))
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    /// What: Default ratio and repeat requests.
    ///
    /// Inputs:
    /// - Colour `#fff`, empty ratio, then `y`, `Y`, `n`.
    ///
    /// Output:
    /// - Three compliant suggestions.
    fn repeats_while_user_says_yes() {
        let out = session("#fff\n\ny\nY\nn\n");
        let found = suggestions(&out);
        assert_eq!(found.len(), 3, "{out}");
        for c in found {
            assert!(contrastscan::contrast("#fff", &c).unwrap() > MIN_COMPLIANT_RATIO);
        }
    }

    #[test]
    /// What: Bad answers end the session with a message.
    ///
    /// Inputs:
    /// - A ratio that is not a number; a ratio below 4.5.
    ///
    /// Output:
    /// - Error text and no suggestions.
    fn bad_answers_end_session() {
        let out = session("#fff\nlots\n");
        assert!(out.contains("Not a number: lots"));
        let out = session("#fff\n3\n");
        assert!(out.contains("below the minimum"));
        assert!(suggestions(&out).is_empty());
    }

    #[test]
    /// What: Output failure stops the session.
    ///
    /// Inputs:
    /// - Endless `y` answers and an output that closes after the first two prompts.
    ///
    /// Output:
    /// - `BrokenPipe` error instead of an endless loop; remaining input is left unread.
    fn closed_output_stops_session() {
        let answers = format!("#fff\n\n{}", "y\n".repeat(1000));
        let mut input = std::io::Cursor::new(answers.clone());
        let mut out = ClosingOutput {
            budget: COLOR_PROMPT.len() + RATIO_PROMPT.len(),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let err =
            run_session(&mut input, &mut out, &SearchPolicy::default(), &mut rng).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert!(input.position() < answers.len() as u64);
    }

    #[test]
    /// What: Ratio answer parsing.
    ///
    /// Inputs:
    /// - Empty, numeric and non-numeric answers.
    ///
    /// Output:
    /// - 4.5, the number, `None`.
    fn parse_ratio_answers() {
        assert_eq!(parse_ratio(""), Some(4.5));
        assert_eq!(parse_ratio("7"), Some(7.0));
        assert_eq!(parse_ratio("x"), None);
    }
}
