//! Scoped TERM override

use std::env;

use gridterm::session::{EnvOverride, TERM_VAR};
use gridterm::Config;

#[test]
fn configured_term_is_applied_then_restored() {
    let previous = env::var_os(TERM_VAR);
    let config = Config::default();
    {
        let guard = EnvOverride::term(config.session.term_override());
        assert!(guard.is_applied());
        assert_eq!(env::var(TERM_VAR).unwrap(), "xterm-256color");
    }
    assert_eq!(env::var_os(TERM_VAR), previous);
}

#[test]
fn empty_term_config_leaves_term_alone() {
    let mut config = Config::default();
    config.session.term = String::new();
    let guard = EnvOverride::term(config.session.term_override());
    assert!(!guard.is_applied());
}
