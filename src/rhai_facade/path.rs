use crate::grammar::Platform;
use crate::resolve::HostResolver;
use crate::rhai_facade_validation::{path_error, to_script_int, RhaiResult};
use crate::{root, search_pattern, split, trim};
use rhai::{Dynamic, Engine, ImmutableString, Map};

pub fn register(engine: &mut Engine, platform: Platform) {
    engine.register_fn("path_grammar_info", move || grammar_info(platform));
    engine.register_fn("path_root_length", move |path: &str| {
        root_length(platform, path)
    });
    engine.register_fn("path_is_rooted", move |path: &str| is_rooted(platform, path));
    engine.register_fn("path_revise_to_current", move |path: &str| {
        root::should_revise_directory_path_to_current(platform.grammar(), path)
    });
    engine.register_fn("path_split", move |path: &str| split_path(platform, path));
    engine.register_fn("path_directory_name", move |path: &str| {
        directory_name(platform, path)
    });
    engine.register_fn("path_check_search_pattern", move |pattern: &str| {
        check_search_pattern(platform, pattern)
    });
    engine.register_fn("path_trim", path_trim);
    engine.register_fn("path_full", move |path: &str| full_path(platform, path));
}

fn string(value: &str) -> Dynamic {
    Dynamic::from(ImmutableString::from(value))
}

fn grammar_info(platform: Platform) -> Map {
    let grammar = platform.grammar();
    let mut out = Map::new();
    out.insert("platform".into(), string(platform.name()));
    out.insert(
        "directory_separator".into(),
        Dynamic::from(grammar.directory_separator()),
    );
    out.insert(
        "alt_directory_separator".into(),
        Dynamic::from(grammar.alt_directory_separator()),
    );
    out.insert(
        "volume_separator".into(),
        grammar.volume_separator().map_or(Dynamic::UNIT, Dynamic::from),
    );
    out
}

fn root_length(platform: Platform, path: &str) -> RhaiResult<i64> {
    let len = root::root_length(platform.grammar(), path).map_err(path_error)?;
    to_script_int("root length", len)
}

fn is_rooted(platform: Platform, path: &str) -> RhaiResult<bool> {
    root::is_path_rooted(platform.grammar(), path).map_err(path_error)
}

fn split_path(platform: Platform, path: &str) -> RhaiResult<Map> {
    let parts = split::split_directory_file(platform.grammar(), path).map_err(path_error)?;
    let mut out = Map::new();
    out.insert("directory".into(), string(parts.directory));
    out.insert("file".into(), parts.file.map_or(Dynamic::UNIT, string));
    Ok(out)
}

fn directory_name(platform: Platform, path: &str) -> RhaiResult<Dynamic> {
    let name = split::directory_name(platform.grammar(), path).map_err(path_error)?;
    Ok(name.map_or(Dynamic::UNIT, string))
}

fn check_search_pattern(platform: Platform, pattern: &str) -> RhaiResult<()> {
    search_pattern::check_search_pattern(platform.grammar(), pattern).map_err(path_error)
}

fn path_trim(path: &str) -> String {
    trim::trim(path).to_string()
}

fn full_path(platform: Platform, path: &str) -> RhaiResult<String> {
    trim::full_path(platform.grammar(), &HostResolver, Some(path)).map_err(path_error)
}
