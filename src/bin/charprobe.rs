// Author: Lukas Bower

//! Entry point for the plain-char signedness probe binary.
//!
//! All checking happens while this program is compiled; a build that reaches
//! the point of running it has already passed. The process stays silent at
//! the default log level and exits with the default success status.

use char_probe::{features, Signedness};

fn main() {
    env_logger::init();
    features::emit_expectation_audit();
    log::debug!("plain char is {} on this target", Signedness::of_char());
}
