use crate::app::session::{Notice, RouteForm, RouteSession};
use crate::core::export::{self, ExportFormat};
use crate::domain::model::{RouteFilter, Selector};
use crate::utils::error::{ErrorCategory, GraphError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  city <name>                                              add a city
  route <origin> | <destination> | <company> | <time> | <price>  add a route
  cities                                                   list cities
  companies                                                list companies
  routes                                                   list routes matching the filter
  filter <origin> | <destination> | <company>              set the filter (any = no restriction)
  filter clear                                             reset the filter
  export <csv|tsv|json>                                    print matching routes
  help                                                     show this message
  quit                                                     leave the shell

Arguments are separated by '|', so names containing '|' cannot be entered here.
Leaving origin or destination of 'route' empty uses the first and second city.";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    City(String),
    Route(RouteForm),
    Cities,
    Companies,
    Routes,
    Filter(RouteFilter),
    FilterClear,
    Export(ExportFormat),
    Help,
    Quit,
}

fn split_args(args: &str, expected: usize, usage: &str) -> Result<Vec<String>> {
    let parts: Vec<String> = args.split('|').map(|part| part.trim().to_string()).collect();
    if parts.len() != expected {
        return Err(GraphError::validation(format!("Usage: {}", usage)));
    }
    Ok(parts)
}

impl ShellCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, args) = match line.split_once(char::is_whitespace) {
            Some((keyword, args)) => (keyword, args.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "city" => ShellCommand::City(args.to_string()),
            "route" => {
                let parts = split_args(
                    args,
                    5,
                    "route <origin> | <destination> | <company> | <time> | <price>",
                )?;
                let [origin, destination, company, time, price]: [String; 5] = parts
                    .try_into()
                    .map_err(|_| GraphError::validation("route expects five fields"))?;
                ShellCommand::Route(RouteForm {
                    origin,
                    destination,
                    company,
                    time,
                    price,
                })
            }
            "cities" => ShellCommand::Cities,
            "companies" => ShellCommand::Companies,
            "routes" => ShellCommand::Routes,
            "filter" if args.eq_ignore_ascii_case("clear") => ShellCommand::FilterClear,
            "filter" => {
                let parts = split_args(args, 3, "filter <origin> | <destination> | <company>")?;
                let selector = |raw: &str| raw.parse::<Selector>().unwrap_or_default();
                ShellCommand::Filter(RouteFilter {
                    origin: selector(&parts[0]),
                    destination: selector(&parts[1]),
                    company: selector(&parts[2]),
                })
            }
            "export" => ShellCommand::Export(args.parse()?),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(GraphError::UnknownCommand {
                    command: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }
}

/// Line-oriented front end over a [`RouteSession`].
pub struct RouteShell<R: BufRead, W: Write> {
    session: RouteSession,
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> RouteShell<R, W> {
    pub fn new(session: RouteSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            prompt: true,
        }
    }

    /// Disables the `> ` prompt, which is useful when input is piped.
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    pub fn session(&self) -> &RouteSession {
        &self.session
    }

    pub fn into_session(self) -> RouteSession {
        self.session
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "🚌 {} cities, {} routes loaded. Type 'help' for commands.",
            self.session.graph().city_count(),
            self.session.graph().route_count()
        )?;

        let mut line = String::new();
        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Rejected shell input {:?}: {}", line.trim(), e);
                    writeln!(self.output, "{}", Notice::error(e.user_friendly_message()))?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.category() == ErrorCategory::Input => {
                    writeln!(self.output, "{}", Notice::error(e.user_friendly_message()))?;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!("Shell finished");
        Ok(())
    }

    /// Runs a single command. Returns `false` when the shell should stop.
    pub fn execute(&mut self, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::City(name) => {
                let notice = self.session.submit_city(&name);
                writeln!(self.output, "{}", notice)?;
            }
            ShellCommand::Route(mut form) => {
                if let Some((origin, destination)) = self.session.default_endpoints() {
                    if form.origin.trim().is_empty() {
                        form.origin = origin;
                    }
                    if form.destination.trim().is_empty() {
                        form.destination = destination;
                    }
                }
                let notice = self.session.submit_route(&form);
                writeln!(self.output, "{}", notice)?;
            }
            ShellCommand::Cities => {
                let summaries = self.session.city_summaries();
                if summaries.is_empty() {
                    writeln!(
                        self.output,
                        "No cities registered. Add a city to get started."
                    )?;
                }
                for summary in summaries {
                    writeln!(self.output, "{} ({})", summary.name, summary.label())?;
                }
            }
            ShellCommand::Companies => {
                for company in self.session.filter_options().companies {
                    writeln!(self.output, "{}", company)?;
                }
            }
            ShellCommand::Routes => {
                let entries = self.session.visible_routes();
                if entries.is_empty() {
                    writeln!(self.output, "No routes match the selected filters")?;
                }
                for entry in &entries {
                    writeln!(self.output, "{}", entry)?;
                }
            }
            ShellCommand::Filter(filter) => {
                self.session.set_filter(filter);
                let active = self.session.filter();
                writeln!(
                    self.output,
                    "{}",
                    Notice::info(format!(
                        "Filter: origin={} destination={} company={}",
                        active.origin, active.destination, active.company
                    ))
                )?;
            }
            ShellCommand::FilterClear => {
                self.session.set_filter(RouteFilter::any());
                writeln!(self.output, "{}", Notice::info("Filter cleared"))?;
            }
            ShellCommand::Export(format) => {
                let rendered = export::render_routes(&self.session.visible_routes(), format)?;
                writeln!(self.output, "{}", rendered.trim_end())?;
            }
            ShellCommand::Help => writeln!(self.output, "{}", HELP)?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}
