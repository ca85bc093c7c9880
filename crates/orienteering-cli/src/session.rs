//! Command execution against a loaded terrain map.

use crate::command::{Command, HELP};
use anyhow::Result;
use orienteering_core::render;
use orienteering_core::{QueryError, TerrainMap, Waypoint};
use serde_json::{json, Value};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A terrain map plus how results are presented.
pub struct Session {
    map: TerrainMap,
    format: OutputFormat,
}

impl Session {
    pub fn new(map: TerrainMap, format: OutputFormat) -> Self {
        Self { map, format }
    }

    pub fn map(&self) -> &TerrainMap {
        &self.map
    }

    /// Run one command and return its output. `QUIT` produces nothing.
    pub fn execute(&self, command: &Command) -> String {
        tracing::debug!(?command, "executing");
        match self.format {
            OutputFormat::Text => self.execute_text(command),
            OutputFormat::Json => match self.execute_json(command) {
                Some(value) => format!("{value:#}\n"),
                None => String::new(),
            },
        }
    }

    /// Read commands line by line until `QUIT` or end of input. Parse
    /// errors, including lines that are not valid UTF-8, are printed and
    /// the loop continues.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write, prompt: &str) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(output, "{prompt}")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if !self.handle_line(&line, &mut output)? {
                break;
            }
        }
        Ok(())
    }

    /// Run each line as a command, in order, stopping at `QUIT`. A line
    /// that fails to parse prints an error and the rest still run.
    pub fn run_commands<S: AsRef<str>>(&self, lines: &[S], mut output: impl Write) -> Result<()> {
        for line in lines {
            if !self.handle_line(line.as_ref(), &mut output)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns false once `QUIT` is read.
    fn handle_line(&self, line: &str, output: &mut impl Write) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(false),
            Ok(command) => output.write_all(self.execute(&command).as_bytes())?,
            Err(err) => writeln!(output, "Error: {err}")?,
        }
        Ok(true)
    }

    fn execute_text(&self, command: &Command) -> String {
        match command {
            Command::Map => render::render_grid(&self.map),
            Command::Points => render::render_points(&self.map),
            Command::Routes => render::render_routes(&self.map),
            Command::Route(name) => match self.map.route(name) {
                Some(route) => render::render_route(route),
                None => render::render_query_error(&QueryError::RouteNotFound(name.clone())),
            },
            Command::Length(name) => match self.map.route_length(name) {
                Ok(length) => render::render_length(name, length),
                Err(err) => render::render_query_error(&err),
            },
            Command::Rise(point) => match self.map.greatest_rise(point) {
                Ok(rise) => render::render_rise(point, &rise),
                Err(err) => render::render_query_error(&err),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn execute_json(&self, command: &Command) -> Option<Value> {
        let value = match command {
            Command::Map => {
                let bounds = self.map.bounds();
                json!({
                    "width": bounds.width,
                    "height": bounds.height,
                    "waypoints": self.waypoints(),
                })
            }
            Command::Points => json!(self.waypoints()),
            Command::Routes => json!(self.map.route_names()),
            Command::Route(name) => match self.map.route(name) {
                Some(route) => json!({ "route": name, "waypoints": route.points() }),
                None => error_json(&QueryError::RouteNotFound(name.clone())),
            },
            Command::Length(name) => match self.map.route_length(name) {
                Ok(length) => json!({ "route": name, "length": length }),
                Err(err) => error_json(&err),
            },
            Command::Rise(point) => match self.map.greatest_rise(point) {
                Ok(rise) => json!({ "point": point, "rise": rise }),
                Err(err) => error_json(&err),
            },
            Command::Help => json!({ "help": HELP }),
            Command::Quit => return None,
        };
        Some(value)
    }

    fn waypoints(&self) -> Vec<&Waypoint> {
        self.map.waypoints().iter().collect()
    }
}

fn error_json(err: &QueryError) -> Value {
    json!({ "error": err.to_string() })
}
