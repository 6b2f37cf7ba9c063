#![allow(dead_code)]

use std::error::Error;

pub use taskorder_test_utils::{init_tracing, position_of};

pub type TestResult = Result<(), Box<dyn Error>>;
