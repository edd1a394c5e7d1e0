//! Input acquisition for one run.
//!
//! A session gathers point text and route text, either from command-line
//! overrides or from interactive prompts, and parses both.

use crate::data::{
    parse_points, parse_route, ParseOptions, Point, PointSource, Route, DEFAULT_ROUTE,
};
use crate::error::Result;
use crate::plot::{render, Figure};
use crate::prompt::{prompt_with_default, read_line_prompt};
use crate::tour::{self, SolveMethod};
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Filename prompt text.
pub const FILENAME_PROMPT: &str = "Enter filename (press Enter to use default string): ";

/// Route prompt text, shown with the default appended.
pub const ROUTE_PROMPT: &str = "Enter route";

/// How a session obtains its inputs.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Points file given up front; skips the filename prompt.
    pub points_file: Option<PathBuf>,
    /// Route text given up front; skips the route prompt.
    pub route: Option<String>,
    /// Use the built-in points and route without prompting.
    pub use_defaults: bool,
    /// Compute the route instead of asking for it.
    pub solve: Option<SolveMethod>,
    /// Point parser options.
    pub parse: ParseOptions,
}

/// Parsed inputs for one run.
#[derive(Debug, Clone)]
pub struct Session {
    /// Where the points came from.
    pub source: PointSource,
    /// Parsed points, in input order.
    pub points: Vec<Point>,
    /// Parsed or computed route.
    pub route: Route,
}

impl Session {
    /// Gather and parse inputs, prompting on `output` and reading `input`
    /// for anything not supplied in `options`.
    ///
    /// Points are parsed before the route prompt is shown.
    pub fn acquire<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        options: &SessionOptions,
    ) -> Result<Self> {
        let source = if options.use_defaults {
            PointSource::Builtin
        } else if let Some(path) = &options.points_file {
            PointSource::File(path.clone())
        } else {
            PointSource::from_response(&read_line_prompt(input, output, FILENAME_PROMPT)?)
        };

        let text = source.load()?;
        let points = parse_points(&text, &options.parse)?;

        let route = if let Some(method) = options.solve {
            tour::solve(&points, method)?
        } else {
            let text = if options.use_defaults {
                DEFAULT_ROUTE.to_string()
            } else if let Some(route) = &options.route {
                route.clone()
            } else {
                prompt_with_default(input, output, ROUTE_PROMPT, DEFAULT_ROUTE)?
            };
            parse_route(&text)?
        };

        Ok(Self {
            source,
            points,
            route,
        })
    }

    /// Render the session onto a fresh figure.
    pub fn figure(&self) -> Result<Figure> {
        let mut figure = Figure::new();
        render(&mut figure, &self.points, &self.route)?;
        Ok(figure)
    }

    /// Summarize the session, validating the route.
    pub fn summary(&self) -> Result<Summary> {
        Ok(Summary {
            source: self.source.label(),
            points: self.points.len(),
            segments: self.route.len(),
            length: tour::tour_length(&self.points, &self.route)?,
            route: self.route.to_string(),
        })
    }
}

/// Facts about a loaded route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Label of the point source.
    pub source: String,
    /// Number of points.
    pub points: usize,
    /// Number of drawn segments, closing edge included.
    pub segments: usize,
    /// Closed tour length.
    pub length: f64,
    /// Route in arrow notation.
    pub route: String,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "source: {}", self.source)?;
        writeln!(f, "points: {}", self.points)?;
        writeln!(f, "route: {}", self.route)?;
        writeln!(f, "segments: {}", self.segments)?;
        write!(f, "length: {:.3}", self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEFAULT_POINTS;
    use crate::error::RoutePlotError;
    use std::io::Cursor;

    fn run(stdin: &str, options: &SessionOptions) -> (Result<Session>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let session = Session::acquire(&mut input, &mut output, options);
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_answers_use_builtin_data() {
        let (session, shown) = run("\n\n", &SessionOptions::default());
        let session = session.unwrap();

        assert_eq!(session.source, PointSource::Builtin);
        assert_eq!(session.points.len(), 14);
        assert_eq!(session.route, parse_route(DEFAULT_ROUTE).unwrap());
        assert!(shown.starts_with(FILENAME_PROMPT));
        assert!(shown.contains("Enter route (press Enter to use default: '7 -> 0"));

        let figure = session.figure().unwrap();
        assert_eq!(figure.segments().len(), 15);
    }

    #[test]
    fn defaults_flag_skips_prompts() {
        let options = SessionOptions {
            use_defaults: true,
            ..Default::default()
        };
        let (session, shown) = run("", &options);
        assert_eq!(session.unwrap().points.len(), 14);
        assert!(shown.is_empty());
    }

    #[test]
    fn prompted_file_and_route() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0\n3 0\n3 4").unwrap();
        let stdin = format!("{}\n2 -> 1 -> 0\n", file.path().display());

        let (session, _) = run(&stdin, &SessionOptions::default());
        let session = session.unwrap();
        assert_eq!(session.route.indices(), &[2, 1, 0]);

        let summary = session.summary().unwrap();
        assert_eq!(summary.points, 3);
        assert_eq!(summary.segments, 3);
        assert_eq!(summary.length, 12.0);
    }

    #[test]
    fn bad_points_fail_before_route_prompt() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0 zero").unwrap();
        let stdin = format!("{}\n", file.path().display());

        let (session, shown) = run(&stdin, &SessionOptions::default());
        assert!(matches!(session, Err(RoutePlotError::PointParse { .. })));
        assert!(!shown.contains(ROUTE_PROMPT));
    }

    #[test]
    fn out_of_range_route_fails_at_render() {
        let options = SessionOptions {
            use_defaults: false,
            route: Some("0 -> 14".to_string()),
            ..Default::default()
        };
        let (session, _) = run("\n", &options);
        let session = session.unwrap();
        assert!(matches!(
            session.figure(),
            Err(RoutePlotError::IndexOutOfRange { index: 14, len: 14, .. })
        ));
    }

    #[test]
    fn solve_replaces_route_prompt() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_POINTS.lines().take(5).collect::<Vec<_>>().join("\n").as_bytes())
            .unwrap();
        let options = SessionOptions {
            points_file: Some(file.path().to_path_buf()),
            solve: Some(SolveMethod::BranchAndBound),
            ..Default::default()
        };

        let (session, shown) = run("", &options);
        let session = session.unwrap();
        assert!(shown.is_empty());
        assert_eq!(session.route.len(), 5);
        assert_eq!(session.route.indices()[0], 0);
    }
}
