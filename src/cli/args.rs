//! CLI argument parsing

use crate::models::{ComplianceStandard, CompressionLevel, Configuration};
use crate::services::aggregate::SortBy;
use crate::services::compliance;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Size(SizeArgs),
    Scenarios(ScenariosArgs),
    Diff(DiffArgs),
    Template(TemplateArgs),
}

/// Knob overrides applied on top of a snapshot or the defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnobArgs {
    pub retention: Option<u32>,
    pub hot_days: Option<u32>,
    pub tiered: bool,
    pub compression: Option<CompressionLevel>,
    pub replication: Option<u32>,
    pub growth: Option<f64>,
    pub growth_years: Option<u8>,
    pub peak_factor: Option<f64>,
    pub compliance: Option<ComplianceStandard>,
    pub encryption: bool,
    pub high_availability: bool,
}

impl KnobArgs {
    /// Apply overrides. A compliance standard is applied first so explicit
    /// flags still win over its defaults.
    pub fn apply_to(&self, config: &mut Configuration) {
        if let Some(standard) = self.compliance {
            compliance::apply(standard, config);
        }
        if let Some(days) = self.retention {
            config.retention_period = days;
        }
        if let Some(days) = self.hot_days {
            config.hot_cold_split = true;
            config.hot_storage_days = days;
        }
        if self.tiered {
            config.hot_cold_split = true;
        }
        if let Some(level) = self.compression {
            config.compression_level = level;
        }
        if let Some(factor) = self.replication {
            config.replication_factor = factor;
        }
        if let Some(pct) = self.growth {
            config.include_growth = true;
            config.annual_growth = pct;
        }
        if let Some(years) = self.growth_years {
            config.include_growth = true;
            config.growth_years = years;
        }
        if let Some(factor) = self.peak_factor {
            config.peak_factor = factor;
        }
        if self.encryption {
            config.encryption = true;
        }
        if self.high_availability {
            config.high_availability = true;
        }
    }
}

#[derive(Debug, Clone)]
pub struct SizeArgs {
    pub snapshot: Option<String>,
    pub inventory: Option<String>,
    pub knobs: KnobArgs,
    pub name: Option<String>,
    pub save: Option<String>,
    pub pricing: Option<String>,
    pub vendors: bool,
    pub top: usize,
    pub sort: SortBy,
    pub json: bool,
}

impl Default for SizeArgs {
    fn default() -> Self {
        Self {
            snapshot: None,
            inventory: None,
            knobs: KnobArgs::default(),
            name: None,
            save: None,
            pricing: None,
            vendors: false,
            top: 10,
            sort: SortBy::Eps,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenariosArgs {
    pub category: Option<String>,
    pub pricing: Option<String>,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct DiffArgs {
    pub from: String,
    pub to: String,
    pub json: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateArgs {
    pub output: Option<String>,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "size" => Command::Size(parse_size_args(&args[2..])?),
        "scenarios" => Command::Scenarios(parse_scenarios_args(&args[2..])?),
        "diff" => Command::Diff(parse_diff_args(&args[2..])?),
        "template" => Command::Template(parse_template_args(&args[2..])?),
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

/// Take the value following option `args[*i]`, advancing the cursor.
fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn take_parsed<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    what: &str,
) -> Result<T, String> {
    let flag = args[*i].clone();
    let raw = take_value(args, i)?;
    raw.parse()
        .map_err(|_| format!("{flag} must be {what}, got '{raw}'"))
}

/// Consume a knob option if `args[*i]` is one. Returns `Ok(false)` otherwise.
fn parse_knob(args: &[String], i: &mut usize, knobs: &mut KnobArgs) -> Result<bool, String> {
    match args[*i].as_str() {
        "--retention" => {
            let days: u32 = take_parsed(args, i, "a number of days")?;
            if days == 0 {
                return Err("--retention must be greater than zero".to_string());
            }
            knobs.retention = Some(days);
        }
        "--hot-days" => knobs.hot_days = Some(take_parsed(args, i, "a number of days")?),
        "--tiered" => knobs.tiered = true,
        "--compression" => {
            let raw = take_value(args, i)?;
            knobs.compression = Some(raw.parse::<CompressionLevel>()?);
        }
        "--replication" => {
            let factor: u32 = take_parsed(args, i, "a positive integer")?;
            if factor == 0 {
                return Err("--replication must be at least 1".to_string());
            }
            knobs.replication = Some(factor);
        }
        "--growth" => {
            let pct: f64 = take_parsed(args, i, "a percentage")?;
            if !pct.is_finite() || pct < 0.0 {
                return Err("--growth must be a non-negative percentage".to_string());
            }
            knobs.growth = Some(pct);
        }
        "--growth-years" => {
            let years: u8 = take_parsed(args, i, "a number of years")?;
            if !(1..=Configuration::MAX_GROWTH_YEARS).contains(&years) {
                return Err(format!(
                    "--growth-years must be between 1 and {}",
                    Configuration::MAX_GROWTH_YEARS
                ));
            }
            knobs.growth_years = Some(years);
        }
        "--peak-factor" => {
            let factor: f64 = take_parsed(args, i, "a number")?;
            if !factor.is_finite() || factor < 1.0 {
                return Err("--peak-factor must be at least 1".to_string());
            }
            knobs.peak_factor = Some(factor);
        }
        "--compliance" => {
            let raw = take_value(args, i)?;
            knobs.compliance = Some(raw.parse::<ComplianceStandard>()?);
        }
        "--encryption" => knobs.encryption = true,
        "--ha" | "--high-availability" => knobs.high_availability = true,
        _ => return Ok(false),
    }
    Ok(true)
}

fn parse_size_args(args: &[String]) -> Result<SizeArgs, String> {
    let mut size_args = SizeArgs::default();
    let mut i = 0;

    while i < args.len() {
        if parse_knob(args, &mut i, &mut size_args.knobs)? {
            i += 1;
            continue;
        }

        match args[i].as_str() {
            "--inventory" => size_args.inventory = Some(take_value(args, &mut i)?.to_string()),
            "--name" => size_args.name = Some(take_value(args, &mut i)?.to_string()),
            "--save" => size_args.save = Some(take_value(args, &mut i)?.to_string()),
            "--pricing" => size_args.pricing = Some(take_value(args, &mut i)?.to_string()),
            "--vendors" => size_args.vendors = true,
            "--top" => size_args.top = take_parsed(args, &mut i, "a number")?,
            "--sort" => {
                let raw = take_value(args, &mut i)?;
                size_args.sort = SortBy::from_label(raw)
                    .ok_or_else(|| format!("Invalid sort: {raw}. Use 'eps' or 'quantity'"))?;
            }
            "--json" => size_args.json = true,
            arg if !arg.starts_with("--") => {
                if size_args.snapshot.is_none() {
                    size_args.snapshot = Some(arg.to_string());
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    match (&size_args.snapshot, &size_args.inventory) {
        (None, None) => {
            Err("Missing input: give a SNAPSHOT file or --inventory <CSV>".to_string())
        }
        (Some(_), Some(_)) => {
            Err("Use either a SNAPSHOT file or --inventory, not both".to_string())
        }
        _ => Ok(size_args),
    }
}

fn parse_scenarios_args(args: &[String]) -> Result<ScenariosArgs, String> {
    let mut scenario_args = ScenariosArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--category" => scenario_args.category = Some(take_value(args, &mut i)?.to_string()),
            "--pricing" => scenario_args.pricing = Some(take_value(args, &mut i)?.to_string()),
            "--json" => scenario_args.json = true,
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(scenario_args)
}

fn parse_diff_args(args: &[String]) -> Result<DiffArgs, String> {
    let mut files: Vec<String> = Vec::new();
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            a if !a.starts_with("--") => files.push(a.to_string()),
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }

    match <[String; 2]>::try_from(files) {
        Ok([from, to]) => Ok(DiffArgs { from, to, json }),
        Err(files) if files.len() < 2 => {
            Err("Missing required arguments: BEFORE_SNAPSHOT AFTER_SNAPSHOT".to_string())
        }
        Err(files) => Err(format!("Unexpected argument: {}", files[2])),
    }
}

fn parse_template_args(args: &[String]) -> Result<TemplateArgs, String> {
    let mut template_args = TemplateArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => template_args.output = Some(take_value(args, &mut i)?.to_string()),
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(template_args)
}
