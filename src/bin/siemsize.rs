//! SIEM Sizing CLI (siemsize) - Main binary entry point

use siemsize::cli::args::{Command, DiffArgs, ScenariosArgs, SizeArgs, TemplateArgs, parse_args};
use siemsize::cli::output::{
    ReportOptions, format_diff, format_json, format_scenario_table, format_text,
    format_vendor_table,
};
use siemsize::io::inventory::{read_inventory, render_template};
use siemsize::io::snapshot::{SavedConfiguration, read_snapshot, write_snapshot};
use siemsize::services::scenario::{self, SizingRequest};
use siemsize::services::vendor::{VendorRequirements, compare_vendors};
use siemsize::{Configuration, Error, PriceTable};
use std::io::IsTerminal;
use std::process;

const EXIT_OK: i32 = 0;
const EXIT_USAGE: i32 = 2;
const EXIT_ADVISORY_ERRORS: i32 = 3;
const EXIT_IO: i32 = 4;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug siemsize size --inventory devices.csv
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(EXIT_USAGE);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Size(size_args) => handle_size(size_args),
        Command::Scenarios(scenario_args) => handle_scenarios(scenario_args),
        Command::Diff(diff_args) => handle_diff(diff_args),
        Command::Template(template_args) => handle_template(template_args),
    };

    process::exit(exit_code);
}

fn exit_code_for(err: &Error) -> i32 {
    match err {
        Error::InvalidInput(_) | Error::InvalidInventory { .. } => EXIT_USAGE,
        Error::Io(_) | Error::Json(_) | Error::InvalidSnapshot(_) => EXIT_IO,
    }
}

fn report_error(context: &str, err: &Error) -> i32 {
    eprintln!("Error: {context}: {err}");
    if let Error::InvalidInventory { errors } = err {
        for line in errors {
            eprintln!("  {line}");
        }
    }
    exit_code_for(err)
}

fn load_prices(path: Option<&str>) -> Result<PriceTable, i32> {
    let Some(path) = path else {
        return Ok(PriceTable::default());
    };

    let loaded = std::fs::read_to_string(path)
        .map_err(Error::from)
        .and_then(|text| serde_json::from_str::<PriceTable>(&text).map_err(Error::from));

    loaded.map_err(|e| report_error(&format!("cannot load pricing from {path}"), &e))
}

fn handle_size(args: &SizeArgs) -> i32 {
    let prices = match load_prices(args.pricing.as_deref()) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let (name, devices, mut config) = if let Some(path) = &args.snapshot {
        match read_snapshot(path) {
            Ok(saved) => (saved.name, saved.devices, saved.configuration),
            Err(e) => return report_error(&format!("cannot read snapshot {path}"), &e),
        }
    } else if let Some(path) = &args.inventory {
        match read_inventory(path) {
            Ok(devices) => (path.clone(), devices, Configuration::default()),
            Err(e) => return report_error(&format!("cannot read inventory {path}"), &e),
        }
    } else {
        eprintln!("Error: a snapshot file or --inventory is required");
        return EXIT_USAGE;
    };
    let name = args.name.clone().unwrap_or(name);

    args.knobs.apply_to(&mut config);

    let result = match siemsize::size_deployment(&devices, &config, &prices) {
        Ok(r) => r,
        Err(e) => return report_error("cannot size deployment", &e),
    };

    let vendors = args
        .vendors
        .then(|| compare_vendors(&VendorRequirements::from_result(&result, &config)));

    if args.json {
        println!("{}", format_json(&name, &result, vendors.as_deref()));
    } else {
        let opts = ReportOptions {
            top: args.top,
            sort: args.sort,
            color: std::io::stdout().is_terminal(),
        };
        print!("{}", format_text(&name, &devices, &config, &result, opts));
        if let Some(quotes) = &vendors {
            print!("{}", format_vendor_table(quotes));
        }
    }

    if let Some(path) = &args.save {
        let has_errors = result.has_errors();
        let snapshot = SavedConfiguration::new(name, devices, config).with_results(result);
        if let Err(e) = write_snapshot(path, &snapshot) {
            return report_error(&format!("cannot save snapshot to {path}"), &e);
        }
        eprintln!("Snapshot saved: {path}");
        if has_errors {
            return EXIT_ADVISORY_ERRORS;
        }
        return EXIT_OK;
    }

    if result.has_errors() {
        EXIT_ADVISORY_ERRORS
    } else {
        EXIT_OK
    }
}

fn handle_scenarios(args: &ScenariosArgs) -> i32 {
    let prices = match load_prices(args.pricing.as_deref()) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let scenarios = match &args.category {
        Some(category) => scenario::by_category(category),
        None => scenario::all(),
    };

    if scenarios.is_empty() {
        eprintln!(
            "Error: no scenarios in category '{}'. Categories: {}",
            args.category.as_deref().unwrap_or_default(),
            scenario::categories().join(", ")
        );
        return EXIT_USAGE;
    }

    let requests: Vec<SizingRequest> = scenarios.iter().map(scenario::Scenario::request).collect();
    let sized = scenario::size_batch(&requests, &prices);

    if args.json {
        let rows: Vec<serde_json::Value> = scenarios
            .iter()
            .zip(&sized)
            .map(|(s, (_, result))| {
                serde_json::json!({
                    "id": s.id,
                    "name": s.name,
                    "category": s.category,
                    "results": result,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        );
    } else {
        print!("{}", format_scenario_table(&sized));
    }

    EXIT_OK
}

fn handle_diff(args: &DiffArgs) -> i32 {
    let mut loaded = Vec::with_capacity(2);
    for path in [&args.from, &args.to] {
        match read_snapshot(path) {
            Ok(saved) => loaded.push(saved),
            Err(e) => return report_error(&format!("cannot read snapshot {path}"), &e),
        }
    }

    let diff = match siemsize::services::diff::compare(&loaded[0], &loaded[1]) {
        Ok(d) => d,
        Err(e) => return report_error("cannot compare snapshots", &e),
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&diff).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print!("{}", format_diff(&diff));
    }

    EXIT_OK
}

fn handle_template(args: &TemplateArgs) -> i32 {
    let csv = render_template();

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, csv) {
                return report_error(&format!("cannot write template to {path}"), &Error::from(e));
            }
            eprintln!("Template written: {path}");
        }
        None => print!("{csv}"),
    }

    EXIT_OK
}

fn print_help() {
    println!("SIEM Sizing CLI (siemsize) - Size SIEM/XDR infrastructure from a device inventory");
    println!();
    println!("USAGE:");
    println!("    siemsize size <SNAPSHOT> [OPTIONS]");
    println!("    siemsize size --inventory <CSV> [OPTIONS]");
    println!("    siemsize scenarios [OPTIONS]");
    println!("    siemsize diff <BEFORE> <AFTER> [--json]");
    println!("    siemsize template [--output <CSV>]");
    println!();
    println!("COMMANDS:");
    println!("    size        Compute volume, storage, topology, growth and cost estimates");
    println!("    scenarios   Size the built-in deployment presets side by side");
    println!("    diff        Compare two saved configuration snapshots");
    println!("    template    Print a blank device inventory CSV");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("SIZE OPTIONS:");
    println!("    --inventory <CSV>         Read devices from CSV (DeviceType,Quantity,EPS)");
    println!("    --retention <DAYS>        Retention period (default: 90)");
    println!("    --hot-days <DAYS>         Enable hot/cold tiering with DAYS on hot storage");
    println!("    --tiered                  Enable hot/cold tiering (default hot days: 30)");
    println!("    --compression <LEVEL>     none|standard|high (default: standard)");
    println!("    --replication <N>         Replication factor (default: 2)");
    println!("    --growth <PCT>            Project annual growth of PCT percent");
    println!("    --growth-years <N>        Projection horizon, 1-3 years (default: 3)");
    println!("    --peak-factor <X>         Peak-to-average EPS ratio (default: 1.3)");
    println!("    --compliance <STD>        GDPR|CCPA|PIPEDA|HIPAA|PCI_DSS|SOC2|NONE");
    println!("    --encryption              Require encryption at rest");
    println!("    --ha                      Require high availability");
    println!("    --pricing <JSON>          Override unit prices");
    println!("    --vendors                 Append an illustrative vendor cost comparison");
    println!("    --save <FILE>             Save inputs and results as a JSON snapshot");
    println!("    --name <NAME>             Name used in the report and snapshot");
    println!("    --top <K>                 Show top K event sources (default: 10)");
    println!("    --sort <FIELD>            Sort sources by eps|quantity (default: eps)");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("SCENARIOS OPTIONS:");
    println!("    --category <NAME>         Only size presets in this category");
    println!("    --pricing <JSON>          Override unit prices");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("EXIT CODES:");
    println!("    0  success    2  invalid input    3  error advisories    4  file error");
    println!();
    println!("EXAMPLES:");
    println!("    siemsize template --output devices.csv");
    println!("    siemsize size --inventory devices.csv --retention 365 --compliance PCI_DSS --save plan.json");
    println!("    siemsize size plan.json --growth 25 --vendors");
    println!("    siemsize diff plan-v1.json plan-v2.json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("siemsize {VERSION}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
