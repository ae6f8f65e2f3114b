// src/cli.rs
use std::{ env, error::Error, path::PathBuf };

use crate::{
    config::options::{ AppOptions, Category, ExportFormat, UnitType },
    core::{ catalog::COMBINED_OPTIONS, structure::display_label },
    csv::to_export_string,
    file, geo,
    runner::{ self, Query, TableOutcome },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    ListStates,
    ListStructures,
    Query,
}

#[derive(Clone, Debug)]
pub struct CliArgs {
    pub command: Command,
    pub options: AppOptions,
    pub query: Query,
    /// Print to stdout when None
    pub out: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    match args.command {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Command::ListStates => {
            for s in geo::STATES.iter() {
                println!("{},{},{}", s.name, s.lat, s.lon);
            }
            Ok(())
        }
        Command::ListStructures => list_structures(&args),
        Command::Query => query(&args),
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<CliArgs, Box<dyn Error>> {
    let mut command = Command::Query;
    let mut options = AppOptions::default();
    let mut query = Query::default();
    let mut out = None;

    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--state" => {
                let v = args.next().ok_or("Missing value for --state")?;
                let st = geo::states::find_ci(&v).ok_or_else(|| format!("Unknown state: {v}"))?;
                options.browse.state = s!(st.name); }
            "--units" => {
                let v = args.next().ok_or("Missing value for --units")?;
                options.browse.unit_type = UnitType::parse(&v).ok_or_else(|| format!("Unknown unit type: {v}"))?; }
            "--category" => {
                let v = args.next().ok_or("Missing value for --category")?;
                options.browse.category = Category::parse(&v).ok_or_else(|| format!("Unknown category: {v}"))?; }
            "--data-dir" => options.browse.data_dir = PathBuf::from(args.next().ok_or("Missing data directory")?),
            "--structure" => query.structure = Some(args.next().ok_or("Missing value for --structure")?),
            "--bedrooms" => query.bedrooms = Some(args.next().ok_or("Missing value for --bedrooms")?),
            "--value" => query.value_tenure = Some(args.next().ok_or("Missing value for --value")?),
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?; }
            "--no-headers" => options.export.include_headers = false,
            "--list-states" => command = Command::ListStates,
            "--list-structures" => command = Command::ListStructures,
            "-h" | "--help" => command = Command::Help,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if let Some(p) = &out {
        options.export.set_path(&p.to_string_lossy());
    }

    Ok(CliArgs { command, options, query, out })
}

fn list_structures(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let browse = &args.options.browse;
    let raw = match runner::load_raw(browse)? {
        Ok(raw) => Some(raw),
        Err(no_data) => {
            eprintln!("{no_data}");
            None
        }
    };

    for (i, opt) in COMBINED_OPTIONS.iter().enumerate() {
        match &raw {
            Some(raw) => {
                let ranges = raw.bedroom_ranges(opt);
                let beds: Vec<&str> = ranges.iter().map(|b| display_label(b)).collect();
                println!("{:>2}  {}  [{}]", i + 1, opt.label, beds.join(", "));
            }
            None => println!("{:>2}  {}", i + 1, opt.label),
        }
    }
    if let Some(raw) = &raw {
        if raw.excluded_rows() > 0 {
            eprintln!("{} row(s) with an unrecognized Structure were skipped", raw.excluded_rows());
        }
    }
    Ok(())
}

fn query(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let opts = &args.options;
    match runner::run(&opts.browse, &args.query)? {
        TableOutcome::NoData(no_data) => {
            logf!("CLI: {}", no_data);
            println!("{no_data}");
            Ok(())
        }
        TableOutcome::Rows { headers, rows } => {
            match &args.out {
                Some(_) => {
                    let path = file::write_export(&opts.export, &headers, &rows)?;
                    eprintln!("Wrote {} rows to {}", rows.len(), path.display());
                }
                None => {
                    print!("{}", to_export_string(&headers, &rows, opts.export.include_headers, opts.export.delim()));
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn parses_full_query() {
        let a = parse_args(argv(&[
            "--state", "new york", "--units", "newer", "--category", "psc",
            "--structure", "4", "--bedrooms", "2 BR", "--format", "tsv", "--no-headers",
        ])).unwrap();
        assert_eq!(a.command, Command::Query);
        assert_eq!(a.options.browse.state, "New York");
        assert_eq!(a.options.browse.unit_type, UnitType::NewerUnits);
        assert_eq!(a.options.browse.category, Category::PublicSchoolChildren);
        assert_eq!(a.query.structure.as_deref(), Some("4"));
        assert_eq!(a.options.export.format, ExportFormat::Tsv);
        assert!(!a.options.export.include_headers);
        assert!(a.out.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args(argv(&["--state", "Atlantis"])).is_err());
        assert!(parse_args(argv(&["--units"])).is_err());
        assert!(parse_args(argv(&["--format", "xml"])).is_err());
        assert!(parse_args(argv(&["--bogus"])).is_err());
    }

    #[test]
    fn out_sets_export_path() {
        let a = parse_args(argv(&["-o", "res/x.tsv"])).unwrap();
        assert_eq!(a.options.export.out_path(), PathBuf::from("res").join("x.tsv"));
    }
}
