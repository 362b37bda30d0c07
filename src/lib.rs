//! Generates `usb_benchmark.txt`, a file of serial-console commands used to benchmark file
//! transfer to a device.
//!
//! The file starts and ends with the `echo state.upTime` command. Between them are 10,000
//! comment lines, each a `;` followed by 128 symbols drawn uniformly from `A-Z0-9`. Every line
//! ends with `\r\n`.
//!
//! ```no_run
//! let summary = usb_benchmark::generate()?;
//! assert_eq!(summary.lines, 10_002);
//! # Ok::<(), usb_benchmark::Error>(())
//! ```

pub mod alphabet;
mod error;
pub mod generator;
pub mod logging;
#[cfg(feature = "rand")]
mod rand_support;
mod rng;


pub use error::{Error, Result};
pub use generator::{generate, generate_at, write_benchmark, Summary};
#[cfg(feature = "rand")]
pub use rand_support::Alphanumeric36;
pub use rng::{Generator, RandomRange, Rng};
