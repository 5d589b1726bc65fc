//! Start-up configuration.
//!
//! Whatever the command line leaves open (scenario, trail) is asked for on the
//! terminal before the window opens.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, SimError};
use crate::sim::scenario::{Preset, Scenario};
use crate::sim::trail::Viewport;
use crate::sim::units::{Float, DEFAULT_PIXELS_PER_AU, DEFAULT_WINDOW_SIZE};

#[derive(Parser, Debug)]
#[command(name = "orbital_modeller", about = "Interactive Newtonian orbit modeller")]
pub(crate) struct Args {
    /// Preset to start from, asked for interactively when omitted
    #[arg(short, long, value_enum)]
    pub(crate) scenario: Option<Preset>,

    /// Load the scenario from a YAML file instead of a preset
    #[arg(short = 'f', long, conflicts_with = "scenario")]
    pub(crate) scenario_file: Option<PathBuf>,

    /// Draw each body's recent path
    #[arg(long, conflicts_with = "no_trail")]
    pub(crate) trail: bool,

    /// Do not draw trails
    #[arg(long)]
    pub(crate) no_trail: bool,

    /// Run without a window and print the final state
    #[arg(long)]
    pub(crate) headless: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value_t = 365)]
    pub(crate) ticks: u64,

    /// Log diagnostics every this many headless ticks, 0 disables
    #[arg(long, default_value_t = 30)]
    pub(crate) report_every: u64,

    /// Window edge length in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub(crate) window_size: Float,

    /// Screen pixels per astronomical unit
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_AU)]
    pub(crate) pixels_per_au: Float,
}

impl Args {
    pub(crate) fn trail(&self) -> Option<bool> {
        if self.trail {
            Some(true)
        } else if self.no_trail || self.headless {
            Some(false)
        } else {
            None
        }
    }

    pub(crate) fn viewport(&self) -> Viewport {
        Viewport::new(self.window_size, self.pixels_per_au)
    }
}

pub(crate) struct Startup {
    pub(crate) scenario: Scenario,
    pub(crate) draw_trail: bool,
}

/// Settles the scenario and trail choice, prompting on the terminal if needed.
///
/// Returns `None` when the user picks exit.
pub(crate) fn resolve(args: &Args) -> Result<Option<Startup>> {
    let known = match (&args.scenario_file, args.scenario) {
        (Some(path), _) => Some(Scenario::from_yaml_file(path)?),
        (None, Some(preset)) => Some(Scenario::preset(preset)),
        (None, None) => None,
    };

    match (known, args.trail()) {
        (Some(scenario), Some(draw_trail)) => Ok(Some(Startup {
            scenario,
            draw_trail,
        })),
        (known, trail) => {
            let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
            let (preset, draw_trail) = match prompt.ask(known.is_none(), trail)? {
                Selection::Exit => return Ok(None),
                Selection::Chosen { preset, draw_trail } => (preset, draw_trail),
            };
            let scenario = match (known, preset) {
                (Some(scenario), _) => scenario,
                (None, Some(preset)) => Scenario::preset(preset),
                (None, None) => {
                    return Err(SimError::InvalidChoice("no scenario selected".to_owned()))
                }
            };
            Ok(Some(Startup {
                scenario,
                draw_trail,
            }))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MenuChoice {
    Preset(Preset),
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Selection {
    Chosen {
        preset: Option<Preset>,
        draw_trail: bool,
    },
    Exit,
}

fn exit_number() -> u32 {
    Preset::ALL.len() as u32 + 1
}

pub(crate) fn parse_menu_choice(input: &str) -> Result<MenuChoice> {
    let trimmed = input.trim();
    let number: u32 = trimmed
        .parse()
        .map_err(|_| SimError::InvalidChoice(trimmed.to_owned()))?;
    if number == exit_number() {
        return Ok(MenuChoice::Exit);
    }
    Preset::from_menu_number(number)
        .map(MenuChoice::Preset)
        .ok_or_else(|| SimError::InvalidChoice(trimmed.to_owned()))
}

pub(crate) fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_uppercase().as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(SimError::InvalidChoice(other.to_owned())),
    }
}

pub(crate) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for (i, preset) in Preset::ALL.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, preset.title())?;
        }
        writeln!(self.output, "{}: Exit", exit_number())?;
        Ok(())
    }

    fn not_valid(&mut self, error: &SimError) -> Result<()> {
        log::debug!("{}", error);
        writeln!(self.output, "Not valid")?;
        Ok(())
    }

    /// Asks for whatever is missing until every answer is valid.
    ///
    /// A bad answer restarts the questions from the top. Closed input counts as exit.
    pub(crate) fn ask(&mut self, need_scenario: bool, trail: Option<bool>) -> Result<Selection> {
        if need_scenario {
            self.print_menu()?;
        }

        loop {
            let preset = if need_scenario {
                let Some(line) = self.read_line("\nSelect model: ")? else {
                    return Ok(Selection::Exit);
                };
                match parse_menu_choice(&line) {
                    Ok(MenuChoice::Exit) => return Ok(Selection::Exit),
                    Ok(MenuChoice::Preset(preset)) => Some(preset),
                    Err(error) => {
                        self.not_valid(&error)?;
                        continue;
                    }
                }
            } else {
                None
            };

            let draw_trail = match trail {
                Some(draw_trail) => draw_trail,
                None => {
                    let Some(line) = self.read_line("Draw trail? (y/n): ")? else {
                        return Ok(Selection::Exit);
                    };
                    match parse_yes_no(&line) {
                        Ok(draw_trail) => draw_trail,
                        Err(error) => {
                            self.not_valid(&error)?;
                            continue;
                        }
                    }
                }
            };

            return Ok(Selection::Chosen { preset, draw_trail });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(script: &str, need_scenario: bool, trail: Option<bool>) -> (Selection, String) {
        let mut output = Vec::new();
        let selection = Prompt::new(script.as_bytes(), &mut output)
            .ask(need_scenario, trail)
            .unwrap();
        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn menu_choices_parse() {
        assert_eq!(
            parse_menu_choice("3\n").unwrap(),
            MenuChoice::Preset(Preset::EarthSun)
        );
        assert_eq!(parse_menu_choice(" 5 ").unwrap(), MenuChoice::Exit);
        assert!(parse_menu_choice("0").is_err());
        assert!(parse_menu_choice("6").is_err());
        assert!(parse_menu_choice("sun").is_err());
        assert!(parse_menu_choice("").is_err());
    }

    #[test]
    fn yes_no_is_case_insensitive() {
        assert!(parse_yes_no("y\n").unwrap());
        assert!(parse_yes_no("Y").unwrap());
        assert!(!parse_yes_no("n").unwrap());
        assert!(parse_yes_no("yes").is_err());
    }

    #[test]
    fn valid_answers_are_accepted() {
        let (selection, output) = ask("2\ny\n", true, None);
        assert_eq!(
            selection,
            Selection::Chosen {
                preset: Some(Preset::TwoSuns),
                draw_trail: true
            }
        );
        assert!(output.contains("1: Solar system"));
        assert!(output.contains("5: Exit"));
        assert!(!output.contains("Not valid"));
    }

    #[test]
    fn invalid_answers_are_reported_and_asked_again() {
        let (selection, output) = ask("seven\n9\n1\nmaybe\n4\nn\n", true, None);
        println!("{}", output);
        assert_eq!(output.matches("Not valid").count(), 3);
        assert_eq!(
            selection,
            Selection::Chosen {
                preset: Some(Preset::EarthMovingSun),
                draw_trail: false
            }
        );
    }

    #[test]
    fn exit_option_and_closed_input_exit() {
        assert_eq!(ask("5\n", true, None).0, Selection::Exit);
        assert_eq!(ask("", true, None).0, Selection::Exit);
        assert_eq!(ask("3\n", true, None).0, Selection::Exit);
    }

    #[test]
    fn known_answers_are_not_asked() {
        let (selection, output) = ask("", false, Some(true));
        assert_eq!(
            selection,
            Selection::Chosen {
                preset: None,
                draw_trail: true
            }
        );
        assert!(output.is_empty());

        let (selection, output) = ask("n\n", false, None);
        assert_eq!(
            selection,
            Selection::Chosen {
                preset: None,
                draw_trail: false
            }
        );
        assert!(!output.contains("Select model"));
    }

    #[test]
    fn command_line_flags_parse() {
        let args = Args::try_parse_from([
            "orbital_modeller",
            "--scenario",
            "earth-moving-sun",
            "--trail",
            "--pixels-per-au",
            "100",
        ])
        .unwrap();
        assert_eq!(args.scenario, Some(Preset::EarthMovingSun));
        assert_eq!(args.trail(), Some(true));
        assert_eq!(args.viewport().distance_scale, 100. / crate::sim::units::AU);

        let args = Args::try_parse_from(["orbital_modeller", "--headless"]).unwrap();
        assert_eq!(args.trail(), Some(false));
        assert_eq!(args.scenario, None);

        assert!(Args::try_parse_from(["orbital_modeller", "--trail", "--no-trail"]).is_err());
    }
}
