//! Command-line arguments.

use clap::Parser;
use line_select::{Position, Selection};
use std::path::PathBuf;

/// Apply one line selection command to a file and print the result as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "line-select",
    version,
    about,
    long_about = None,
    after_help = "Log filter: LINE_SELECT_LOG or RUST_LOG (default: warn)"
)]
pub struct Args {
    /// Text file to operate on
    pub file: PathBuf,

    /// Command name (e.g. expandSelectionsDownByLine) or a namespaced command id
    pub command: String,

    /// Selection as LINE:CHAR (caret) or ANCHOR_LINE:CHAR-ACTIVE_LINE:CHAR, zero-based.
    /// Repeat for multiple selections; defaults to a caret at 0:0
    #[arg(long = "select", value_parser = parse_selection)]
    pub selections: Vec<Selection>,

    /// Run the command this many times
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,

    /// Viewport height in lines; enables scroll tracking
    #[arg(long)]
    pub viewport_height: Option<usize>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Selections to start from, with the default caret when none were given.
    pub fn initial_selections(&self) -> Vec<Selection> {
        if self.selections.is_empty() {
            vec![Selection::collapsed(Position::default())]
        } else {
            self.selections.clone()
        }
    }
}

fn parse_position(text: &str) -> Result<Position, String> {
    let (line, character) = text
        .split_once(':')
        .ok_or_else(|| format!("invalid position '{}', expected LINE:CHAR", text))?;
    let line = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid line in '{}'", text))?;
    let character = character
        .trim()
        .parse()
        .map_err(|_| format!("invalid character in '{}'", text))?;
    Ok(Position::new(line, character))
}

fn parse_selection(text: &str) -> Result<Selection, String> {
    match text.split_once('-') {
        Some((anchor, active)) => Ok(Selection::new(
            parse_position(anchor)?,
            parse_position(active)?,
        )),
        None => Ok(Selection::collapsed(parse_position(text)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["line-select", "doc.txt", "expandSelectionsDownByLine"])
            .unwrap();
        assert_eq!(args.file, PathBuf::from("doc.txt"));
        assert_eq!(args.command, "expandSelectionsDownByLine");
        assert!(args.selections.is_empty());
        assert_eq!(
            args.initial_selections(),
            vec![Selection::collapsed(Position::new(0, 0))]
        );
        assert_eq!(args.repeat, 1);
    }

    #[test]
    fn test_parse_options() {
        let args = Args::try_parse_from([
            "line-select",
            "--select",
            "2:1-0:3",
            "doc.txt",
            "--select",
            "4:0",
            "retractSelectionsFromTop",
            "--repeat",
            "3",
            "--viewport-height",
            "20",
            "--config",
            "cfg.json",
        ])
        .unwrap();

        assert_eq!(
            args.initial_selections(),
            vec![
                Selection::new(Position::new(2, 1), Position::new(0, 3)),
                Selection::collapsed(Position::new(4, 0)),
            ]
        );
        assert_eq!(args.repeat, 3);
        assert_eq!(args.viewport_height, Some(20));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
    }

    #[test]
    fn test_missing_command_is_rejected() {
        assert!(Args::try_parse_from(["line-select", "doc.txt"]).is_err());
    }

    #[test]
    fn test_bad_selection() {
        assert!(parse_selection("1-2").is_err());
        assert!(Args::try_parse_from(["line-select", "a", "b", "--select", "x"]).is_err());
        assert!(Args::try_parse_from(["line-select", "a", "b", "--bogus"]).is_err());
    }
}
