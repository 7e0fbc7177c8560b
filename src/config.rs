//! Run configuration for the estimator and the command-line front end.

use serde::Deserialize;
use std::path::PathBuf;

/// Known map-space configuration threaded into the estimation pipeline.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct FitParams {
    /// Easting of the center of the upper-left pixel.
    pub origin_easting: f64,
    /// Northing of the center of the upper-left pixel.
    pub origin_northing: f64,
    /// Factor converting source map units into meters (or whatever unit the
    /// caller wants the world file in). 1.0 leaves units untouched; use
    /// 1/20.1168 for chains.
    #[serde(default = "default_units_to_meters")]
    pub units_to_meters: f64,
}

fn default_units_to_meters() -> f64 {
    1.0
}

/// A fully parsed command line.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub params: FitParams,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Print fit diagnostics to stdout.
    pub debug: bool,
    /// Optional path for the JSON fit report.
    pub json_out: Option<PathBuf>,
}

/// Outcome of CLI parsing: either a run to perform or a help request.
#[derive(Clone, Debug)]
pub enum CliCommand {
    Run(RunConfig),
    Help,
}

pub fn usage(program: &str) -> String {
    format!(
        "{program} [options] input.csv output.wld\n\
         \n\
         \x20   Options:\n\
         \x20   -h, --help        prints this message\n\
         \x20   -x, --originx     easting of the projected coordinates of the upper left pixel\n\
         \x20   -y, --originy     northing of the projected coordinates of the upper left pixel\n\
         \x20   -u, --tometers    multiplication factor to get source units into meters\n\
         \x20   -j, --json        write the full fit report as JSON to the given path\n\
         \x20   -d, --debug       print fit diagnostics to stdout"
    )
}

/// Parses command-line arguments (without the program name).
///
/// `--originx` and `--originy` are required; their absence is reported
/// before any file is touched.
pub fn parse_cli<I>(program: &str, args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = String>,
{
    let mut origin_easting = None;
    let mut origin_northing = None;
    let mut units_to_meters = default_units_to_meters();
    let mut debug = false;
    let mut json_out = None;
    let mut positional: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-d" | "--debug" => debug = true,
            "-x" | "--originx" => {
                origin_easting = Some(parse_f64(&option_value(&mut args, &arg)?, &arg)?);
            }
            "-y" | "--originy" => {
                origin_northing = Some(parse_f64(&option_value(&mut args, &arg)?, &arg)?);
            }
            "-u" | "--tometers" => {
                units_to_meters = parse_f64(&option_value(&mut args, &arg)?, &arg)?;
            }
            "-j" | "--json" => {
                json_out = Some(PathBuf::from(option_value(&mut args, &arg)?));
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option {other}\n\n{}", usage(program)));
            }
            _ => positional.push(arg),
        }
    }

    let origin_easting = origin_easting
        .ok_or_else(|| format!("missing required option --originx\n\n{}", usage(program)))?;
    let origin_northing = origin_northing
        .ok_or_else(|| format!("missing required option --originy\n\n{}", usage(program)))?;

    if positional.len() != 2 {
        return Err(format!(
            "expected input.csv and output.wld, found {} positional argument(s)\n\n{}",
            positional.len(),
            usage(program)
        ));
    }
    let output = PathBuf::from(positional.pop().unwrap_or_default());
    let input = PathBuf::from(positional.pop().unwrap_or_default());

    Ok(CliCommand::Run(RunConfig {
        params: FitParams {
            origin_easting,
            origin_northing,
            units_to_meters,
        },
        input,
        output,
        debug,
        json_out,
    }))
}

fn option_value<I>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| format!("option {flag} requires a value"))
}

fn parse_f64(text: &str, flag: &str) -> Result<f64, String> {
    text.parse()
        .map_err(|e| format!("invalid value {text:?} for {flag}: {e}"))
}
