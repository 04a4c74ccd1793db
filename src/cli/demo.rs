use crate::cli::run::{finish, replay};
use crate::config::Config;
use crate::scenario::demo;

pub fn run(config: &Config) -> i32 {
    finish(demo::scenario().and_then(|s| replay(&s, config)), config)
}
