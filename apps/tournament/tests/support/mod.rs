#![allow(dead_code)]


pub use tournament_test_support::float::assert_approx;

pub fn init_logging() {
    tournament_test_support::logging::init();
}
