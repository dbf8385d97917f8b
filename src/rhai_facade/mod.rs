use crate::grammar::Platform;
use rhai::Engine;

mod path;

pub fn register(engine: &mut Engine, platform: Platform) {
    path::register(engine, platform);
}
