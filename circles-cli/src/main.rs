//! circles CLI - who to invite, circle by circle.
//!
//! Features:
//! - Filtered, optionally depth-bounded traversal from the best friends
//! - Lockstep pairing of two traversals (e.g. men and women)
//! - Per-circle grouping and unreached-people report
//! - Optional circles.toml next to the people file
//! - Graphviz DOT and JSON graph export

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use circles_core::{
    generate_dot, graph_to_json, init_structured_logging, load_config, load_people, log_error,
    log_info, log_warn, pair_up, print_invitations_json, print_invitations_plain, print_json,
    print_plain, print_unreached,
    BoundedGraphIterator, Circles, CirclesConfig, CircleTraversal, Filter, GraphIterator,
    PersonIndex,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Circle-by-circle friendship traversal")]
pub struct Cli {
    /// Path to a JSON people file
    path: String,

    /// Filter kind: any, male or female
    #[arg(long)]
    filter: Option<String>,

    /// Field compared by an `any` filter: name or gender
    #[arg(long)]
    field: Option<String>,

    /// Value compared by an `any` filter
    #[arg(long)]
    value: Option<String>,

    /// Deepest circle to emit (0 = best friends only)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Pair the traversal with a second one using this filter kind
    #[arg(long, value_name = "FILTER")]
    pair_with: Option<String>,

    /// Deepest circle for the paired traversal
    #[arg(long)]
    pair_max_depth: Option<usize>,

    /// Group output by circle
    #[arg(long)]
    by_circle: bool,

    /// List people no traversal can reach
    #[arg(long)]
    unreached: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Print the friendship graph as visualizer JSON instead of a traversal
    #[arg(long, conflicts_with_all = ["dot", "dot_file"])]
    graph_json: bool,

    /// Generate Graphviz DOT output for the friendship graph
    #[arg(long)]
    dot: bool,

    /// Write DOT output to a specified file instead of stdout
    #[arg(long)]
    dot_file: Option<String>,
}

/// Settings after merging CLI flags over circles.toml.
#[derive(Debug)]
struct Settings {
    filter: Filter,
    max_depth: Option<usize>,
    json: bool,
}

/// Resolves filter, bound and output format. Flags win over the config file.
fn resolve_settings(cli: &Cli, cfg: Option<&CirclesConfig>) -> Result<Settings> {
    let filter = match &cli.filter {
        Some(kind) => Filter::from_parts(kind, cli.field.as_deref(), cli.value.as_deref())?,
        None if cli.field.is_some() || cli.value.is_some() => {
            Filter::from_parts("any", cli.field.as_deref(), cli.value.as_deref())?
        }
        None => match cfg {
            Some(cfg) => cfg.filter()?,
            None => Filter::default(),
        },
    };

    Ok(Settings {
        filter,
        max_depth: cli.max_depth.or(cfg.and_then(|c| c.max_depth)),
        json: cli.json || cfg.is_some_and(|c| c.wants_json()),
    })
}

/// Rejects output combinations that would corrupt stdout.
fn check_outputs(cli: &Cli, settings: &Settings) -> Result<()> {
    if cli.dot && cli.dot_file.is_none() && settings.json {
        return Err(anyhow!(
            "--dot with JSON output needs --dot-file, stdout would no longer be valid JSON"
        ));
    }
    Ok(())
}

/// Flags that are accepted but have no effect in this invocation.
fn ignored_flags(cli: &Cli) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if cli.pair_max_depth.is_some() && cli.pair_with.is_none() {
        ignored.push("--pair-max-depth has no effect without --pair-with");
    }
    if cli.pair_with.is_some() && cli.by_circle {
        ignored.push("--by-circle has no effect with --pair-with");
    }
    if cli.pair_with.is_some() && cli.unreached {
        ignored.push("--unreached has no effect with --pair-with");
    }
    ignored
}

/// Builds a traversal over `index`, bounded when `max_depth` is set.
fn make_traversal<'a>(
    index: &'a PersonIndex,
    filter: Filter,
    max_depth: Option<usize>,
) -> Box<dyn CircleTraversal<'a> + 'a> {
    match max_depth {
        Some(max) => Box::new(BoundedGraphIterator::new(index, filter, max)),
        None => Box::new(GraphIterator::new(index, filter)),
    }
}

/// Security: Validates output file paths to prevent path traversal attacks.
///
/// Rejects absolute paths, `..` components and null bytes.
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);

    if p.is_absolute() {
        return Err(anyhow!("Output path must be relative, not absolute: {}", path));
    }

    if p.components().any(|c| matches!(c, std::path::Component::ParentDir)) {
        return Err(anyhow!("Path traversal (..) not allowed in output paths: {}", path));
    }

    Ok(p)
}

fn run(cli: &Cli) -> Result<()> {
    let people_path = Path::new(&cli.path);
    let config_dir = people_path.parent().unwrap_or_else(|| Path::new("."));
    let cfg = load_config(config_dir)
        .with_context(|| format!("Failed to load config from {}", config_dir.display()))?;
    if cfg.is_some() {
        log_info(&format!("using circles.toml from {}", config_dir.display()));
    }
    let settings = resolve_settings(cli, cfg.as_ref())?;
    check_outputs(cli, &settings)?;
    for flag in ignored_flags(cli) {
        log_warn(flag);
    }

    let people = load_people(people_path)
        .with_context(|| format!("Failed to load people from {}", cli.path))?;
    log_info(&format!("loaded {} people from {}", people.len(), cli.path));
    let circles = Circles::new(people)
        .with_filter(settings.filter.clone())
        .max_depth(settings.max_depth);

    if cli.graph_json {
        println!("{}", serde_json::to_string_pretty(&graph_to_json(circles.index()))?);
        return Ok(());
    }

    if let Some(kind) = &cli.pair_with {
        let second_filter: Filter = kind.parse()?;
        let mut first = circles.traversal();
        let mut second = make_traversal(circles.index(), second_filter, cli.pair_max_depth);
        let list = pair_up(first.as_mut(), second.as_mut());
        if settings.json {
            print_invitations_json(&list);
        } else {
            print_invitations_plain(&list);
        }
    } else {
        let report = circles.analyze();
        if settings.json {
            print_json(&report);
        } else {
            print_plain(&report, cli.by_circle);
            if cli.unreached {
                print_unreached(&report);
            }
        }
    }

    if cli.dot {
        let dot = generate_dot(circles.index());
        match &cli.dot_file {
            Some(file) => {
                let safe_path = validate_output_path(file)?;
                fs::write(&safe_path, &dot)
                    .with_context(|| format!("DOT write failed to {}", safe_path.display()))?;
            }
            None => println!("{}", dot),
        }
    }

    Ok(())
}

fn main() {
    init_structured_logging();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log_error(&format!("{:#}", e));
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["circles", "people.json"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_default_settings() {
        let s = resolve_settings(&cli(&[]), None).unwrap();
        assert_eq!(s.filter, Filter::default());
        assert_eq!(s.max_depth, None);
        assert!(!s.json);
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = CirclesConfig {
            filter: Some("female".to_string()),
            max_depth: Some(3),
            ..Default::default()
        };
        let s = resolve_settings(&cli(&["--filter", "male", "--max-depth", "0"]), Some(&cfg))
            .unwrap();
        assert_eq!(s.filter, Filter::Male);
        assert_eq!(s.max_depth, Some(0));
    }

    #[test]
    fn test_config_used_when_no_flags() {
        let cfg = CirclesConfig {
            filter: Some("female".to_string()),
            max_depth: Some(2),
            ..Default::default()
        };
        let s = resolve_settings(&cli(&[]), Some(&cfg)).unwrap();
        assert_eq!(s.filter, Filter::Female);
        assert_eq!(s.max_depth, Some(2));
    }

    #[test]
    fn test_field_without_filter_implies_any() {
        let s = resolve_settings(&cli(&["--field", "gender", "--value", "male"]), None).unwrap();
        assert_eq!(s.filter, Filter::any(circles_core::Field::Gender, "male"));
    }

    #[test]
    fn test_invalid_filter_kind() {
        let err = resolve_settings(&cli(&["--filter", "robot"]), None).unwrap_err();
        assert!(err.to_string().contains("robot"));
    }

    #[test]
    fn test_graph_json_conflicts_with_dot() {
        assert!(Cli::try_parse_from(["circles", "people.json", "--graph-json", "--dot"]).is_err());
        assert!(Cli::try_parse_from([
            "circles",
            "people.json",
            "--graph-json",
            "--dot-file",
            "g.dot"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["circles", "people.json", "--graph-json"]).is_ok());
    }

    #[test]
    fn test_dot_on_stdout_rejected_with_json() {
        let c = cli(&["--json", "--dot"]);
        let s = resolve_settings(&c, None).unwrap();
        let err = check_outputs(&c, &s).unwrap_err();
        assert!(err.to_string().contains("--dot-file"));

        let c = cli(&["--json", "--dot", "--dot-file", "graph.dot"]);
        let s = resolve_settings(&c, None).unwrap();
        assert!(check_outputs(&c, &s).is_ok());

        let c = cli(&["--dot"]);
        let s = resolve_settings(&c, None).unwrap();
        assert!(check_outputs(&c, &s).is_ok());
    }

    #[test]
    fn test_dot_on_stdout_rejected_with_json_from_config() {
        let cfg = CirclesConfig {
            output: Some(circles_core::OutputConfig {
                format: Some("json".to_string()),
            }),
            ..Default::default()
        };
        let c = cli(&["--dot"]);
        let s = resolve_settings(&c, Some(&cfg)).unwrap();
        assert!(check_outputs(&c, &s).is_err());
    }

    #[test]
    fn test_ignored_flags() {
        assert!(ignored_flags(&cli(&[])).is_empty());
        assert_eq!(
            ignored_flags(&cli(&["--pair-max-depth", "1"])),
            vec!["--pair-max-depth has no effect without --pair-with"]
        );
        assert_eq!(
            ignored_flags(&cli(&["--pair-with", "female", "--by-circle", "--unreached"])).len(),
            2
        );
    }

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path("graph.dot").is_ok());
        assert!(validate_output_path("out/graph.dot").is_ok());
        assert!(validate_output_path("/etc/passwd").is_err());
        assert!(validate_output_path("../graph.dot").is_err());
        assert!(validate_output_path("a\0b").is_err());
    }
}
