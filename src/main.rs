use anyhow::{anyhow, bail, Context, Result};
use env_logger::{self as logger};
use serde_json::json;
use std::env;
use winpath::config::{OutputFormat, Settings};
use winpath::env_util::{CONFIG_ENV, JSON_ENV, PLATFORM_ENV};
use winpath::grammar::Platform;
use winpath::{rhai_engine, root, search_pattern, split, trim, HostResolver};

const WINPATH_DEBUG_LOG: &str = "WINPATH_DEBUG_LOG";
const WINPATH_DEBUG_LOG_STYLE: &str = "WINPATH_DEBUG_LOG_STYLE";

fn init_logging() {
    if env::var(WINPATH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(WINPATH_DEBUG_LOG)
                .write_style(WINPATH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn usage() -> String {
    format!(
        "Usage: winpath [--platform <windows|posix>] [--json] <command> <operand>\n\
         \n\
         Commands:\n\
         \x20 root <path>             length of the root prefix\n\
         \x20 split <path>            directory and final segment\n\
         \x20 dirname <path>          directory part, empty at the root\n\
         \x20 check-pattern <pattern> reject patterns that climb with \"..\"\n\
         \x20 trim <path>             strip file-system blanks\n\
         \x20 full <path>             trim, then resolve through the host\n\
         \x20 script <file.rhai>      run a Rhai script with the path functions\n\
         \n\
         Environment:\n\
         \x20 {CONFIG_ENV}            config file (default: <config dir>/winpath/config.toml)\n\
         \x20 {PLATFORM_ENV}          grammar override (windows|posix)\n\
         \x20 {JSON_ENV}              emit JSON when truthy (1/true/yes/on)\n\
         \x20 {WINPATH_DEBUG_LOG}     env_logger filter for diagnostics\n"
    )
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: String,
    operand: String,
    platform: Option<Platform>,
    json: bool,
}

/// `None` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Invocation>> {
    let mut positional = Vec::new();
    let mut platform = None;
    let mut json = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => json = true,
            "--platform" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--platform requires a value"))?;
                platform = Some(
                    value
                        .parse::<Platform>()
                        .map_err(|violation| anyhow!("--platform: {violation}"))?,
                );
            }
            "--" => {
                positional.extend(iter.by_ref().cloned());
            }
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(command), Some(operand), None) =
        (positional.next(), positional.next(), positional.next())
    else {
        bail!("expected exactly one command and one operand\n\n{}", usage());
    };
    Ok(Some(Invocation {
        command,
        operand,
        platform,
        json,
    }))
}

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = parse_args(&args)? else {
        print!("{}", usage());
        return Ok(());
    };

    let mut settings = Settings::load()?;
    if let Some(platform) = invocation.platform {
        settings.platform = platform;
    }
    if invocation.json {
        settings.output = OutputFormat::Json;
    }
    log::debug!("running {} with {settings:?}", invocation.command);

    run(&settings, &invocation.command, &invocation.operand)
}

fn run(settings: &Settings, command: &str, operand: &str) -> Result<()> {
    let grammar = settings.platform.grammar();
    let as_json = settings.output == OutputFormat::Json;

    match command {
        "root" => {
            let len = root::root_length(grammar, operand)?;
            let revise = root::should_revise_directory_path_to_current(grammar, operand);
            if as_json {
                emit(json!({
                    "path": operand,
                    "root_length": len,
                    "root": &operand[..len],
                    "revise_to_current": revise,
                }));
            } else {
                println!("{len}");
            }
        }
        "split" => {
            let parts = split::split_directory_file(grammar, operand)?;
            if as_json {
                emit(json!({ "path": operand, "split": parts }));
            } else {
                println!("directory: {}", parts.directory);
                match parts.file {
                    Some(file) => println!("file: {file}"),
                    None => println!("file: (none)"),
                }
            }
        }
        "dirname" => {
            let directory = split::directory_name(grammar, operand)?;
            if as_json {
                emit(json!({ "path": operand, "directory": directory }));
            } else if let Some(directory) = directory {
                println!("{directory}");
            }
        }
        "check-pattern" => {
            search_pattern::check_search_pattern(grammar, operand)?;
            if as_json {
                emit(json!({ "pattern": operand, "valid": true }));
            } else {
                println!("ok");
            }
        }
        "trim" => {
            let trimmed = trim::trim(operand);
            if as_json {
                emit(json!({ "path": operand, "trimmed": trimmed }));
            } else {
                println!("{trimmed}");
            }
        }
        "full" => {
            let resolved = trim::full_path(grammar, &HostResolver, Some(operand))?;
            if as_json {
                emit(json!({
                    "path": operand,
                    "full_path": resolved,
                    "separator": grammar.directory_separator().to_string(),
                }));
            } else {
                println!("{resolved}");
            }
        }
        "script" => {
            let source = fs_err::read_to_string(operand)
                .with_context(|| format!("failed to read script {operand}"))?;
            let value = rhai_engine::run_script(settings.platform, &source)?;
            if !value.is_unit() {
                println!("{value}");
            }
        }
        other => bail!("unknown command `{other}`\n\n{}", usage()),
    }
    Ok(())
}

fn emit(value: serde_json::Value) {
    println!("{value}");
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Invocation};
    use winpath::grammar::Platform;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_command_operand_and_options() {
        let parsed = parse_args(&args(&["--platform", "posix", "split", "/a/b", "--json"]))
            .expect("valid args")
            .expect("not help");
        assert_eq!(
            parsed,
            Invocation {
                command: String::from("split"),
                operand: String::from("/a/b"),
                platform: Some(Platform::Posix),
                json: true,
            }
        );
    }

    #[test]
    fn double_dash_allows_dash_prefixed_operands() {
        let parsed = parse_args(&args(&["trim", "--", "--odd"]))
            .expect("valid args")
            .expect("not help");
        assert_eq!(parsed.operand, "--odd");
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(&args(&["root", "--help"]))
            .expect("valid args")
            .is_none());
    }

    #[test]
    fn rejects_missing_operand_and_unknown_options() {
        assert!(parse_args(&args(&["root"])).is_err());
        assert!(parse_args(&args(&["root", "a", "b"])).is_err());
        assert!(parse_args(&args(&["--verbose", "root", "a"])).is_err());
        assert!(parse_args(&args(&["--platform"])).is_err());
        assert!(parse_args(&args(&["--platform", "vms", "root", "a"])).is_err());
    }
}
