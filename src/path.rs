//! SVG path data parsing and serialization.
//!
//! SVG path syntax: https://www.w3.org/TR/SVG/paths.html
//!
//! The grammar here is deliberately shallow: a path is an ordered sequence of
//! (command letter, argument list) pairs, and nothing normalizes the argument
//! counts. A command carrying repeated coordinate groups (implicit command
//! repetition) keeps all of them in one [`PathCommand`]; consumers that care
//! about argument meaning index the role table cyclically.

use crate::error::TidyError;
use crate::number::Precision;

/// One path command as written: the letter (case preserved, so the
/// absolute/relative distinction survives) and its numeric arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub letter: char,
    pub args: Vec<f64>,
}

/// The path command alphabet, both cases.
pub(crate) fn is_command_letter(c: char) -> bool {
    matches!(
        c,
        'A' | 'C'
            | 'H'
            | 'L'
            | 'M'
            | 'Q'
            | 'S'
            | 'T'
            | 'V'
            | 'Z'
            | 'a'
            | 'c'
            | 'h'
            | 'l'
            | 'm'
            | 'q'
            | 's'
            | 't'
            | 'v'
            | 'z'
    )
}

/// Split a blob of numeric text on whitespace and commas, dropping empties.
pub(crate) fn split_values(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parse path data into its command sequence.
///
/// Text before the first command letter is ignored; a string with no command
/// letters yields an empty sequence. An argument token that does not parse as
/// a float is fatal for the document and reported with the command letter, the
/// command's index in the path, and the offending token.
pub fn parse_path_data(d: &str) -> Result<Vec<PathCommand>, TidyError> {
    let mut commands = Vec::new();
    let mut current: Option<(char, usize)> = None;

    for (i, c) in d.char_indices() {
        if is_command_letter(c) {
            if let Some((letter, start)) = current.take() {
                let index = commands.len();
                commands.push(parse_command(letter, &d[start..i], index)?);
            }
            current = Some((c, i + c.len_utf8()));
        }
    }
    if let Some((letter, start)) = current {
        let index = commands.len();
        commands.push(parse_command(letter, &d[start..], index)?);
    }

    Ok(commands)
}

fn parse_command(letter: char, blob: &str, index: usize) -> Result<PathCommand, TidyError> {
    let mut args = Vec::new();
    for token in split_values(blob) {
        let value = token
            .parse::<f64>()
            .map_err(|_| TidyError::InvalidPathNumber {
                command: letter,
                index,
                token: token.to_string(),
            })?;
        args.push(value);
    }
    Ok(PathCommand { letter, args })
}

/// Serialize a command sequence back to path data.
///
/// Each argument is passed through `transform` (identity for a plain
/// re-serialization) and then formatted via [`Precision`]. The letter is
/// emitted followed by its space-joined arguments; commands are concatenated.
pub fn serialize_path_data(
    commands: &[PathCommand],
    precision: Precision,
    mut transform: impl FnMut(char, usize, f64) -> f64,
) -> String {
    let mut out = String::new();
    for cmd in commands {
        out.push(cmd.letter);
        for (i, &arg) in cmd.args.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&precision.format_f64(transform(cmd.letter, i, arg)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_path() {
        let commands = parse_path_data("M10 20 L30 40").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].letter, 'M');
        assert_eq!(commands[0].args, vec![10.0, 20.0]);
        assert_eq!(commands[1].letter, 'L');
        assert_eq!(commands[1].args, vec![30.0, 40.0]);
    }

    #[test]
    fn test_parse_comma_separated_relative() {
        let commands = parse_path_data("m10,20 l-5,.5").unwrap();
        assert_eq!(commands[0].letter, 'm');
        assert_eq!(commands[1].letter, 'l');
        assert_eq!(commands[1].args, vec![-5.0, 0.5]);
    }

    #[test]
    fn test_parse_implicit_repeats_stay_on_command() {
        let commands = parse_path_data("M10 20 30 40 50 60").unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].args.len(), 6);
    }

    #[test]
    fn test_parse_close_path_has_no_args() {
        let commands = parse_path_data("M0 0L10 10Z").unwrap();
        assert_eq!(commands[2].letter, 'Z');
        assert!(commands[2].args.is_empty());
    }

    #[test]
    fn test_parse_no_letters_is_empty() {
        assert!(parse_path_data("10 20 30").unwrap().is_empty());
        assert!(parse_path_data("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_token_is_structured_error() {
        let err = parse_path_data("M10 20 L30 4x0").unwrap_err();
        match err {
            TidyError::InvalidPathNumber {
                command,
                index,
                token,
            } => {
                assert_eq!(command, 'L');
                assert_eq!(index, 1);
                assert_eq!(token, "4x0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serialize_identity() {
        let commands = parse_path_data("M 10.00 20.50 L 30 40 Z").unwrap();
        let out = serialize_path_data(&commands, Precision::Places(1), |_, _, v| v);
        assert_eq!(out, "M10 20.5L30 40Z");
    }

    #[test]
    fn test_serialize_applies_transform() {
        let commands = parse_path_data("L1 2").unwrap();
        let out = serialize_path_data(&commands, Precision::Places(0), |_, i, v| {
            v + if i % 2 == 0 { 10.0 } else { 20.0 }
        });
        assert_eq!(out, "L11 22");
    }
}
