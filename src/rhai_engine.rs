use crate::grammar::Platform;
use anyhow::{anyhow, Result};
use rhai::{Dynamic, Engine};

pub fn build_engine(platform: Platform) -> Engine {
    let mut engine = Engine::new();
    crate::rhai_facade::register(&mut engine, platform);
    engine
}

pub fn run_script(platform: Platform, source: &str) -> Result<Dynamic> {
    let engine = build_engine(platform);
    engine
        .eval::<Dynamic>(source)
        .map_err(|err| anyhow!("script failed: {err}"))
}

pub fn exported_api_names() -> Vec<&'static str> {
    vec![
        "path_grammar_info",
        "path_root_length",
        "path_is_rooted",
        "path_revise_to_current",
        "path_split",
        "path_directory_name",
        "path_check_search_pattern",
        "path_trim",
        "path_full",
    ]
}
