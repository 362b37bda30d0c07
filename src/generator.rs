use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    alphabet,
    error::{Error, Result},
    rng::Rng,
};

/// Name of the generated file, created in the current working directory by [`generate`].
pub const FILE_NAME: &str = "usb_benchmark.txt";

/// The command written as the first and the last line.
pub const SENTINEL: &str = "echo state.upTime";

/// Number of random filler lines between the two sentinels.
pub const FILLER_LINES: usize = 10_000;

/// Number of random symbols following the `;` of a filler line.
pub const PAYLOAD_LEN: usize = 128;

/// Terminator written after every line, including the last one.
pub const LINE_ENDING: &str = "\r\n";

/// Prefix that turns a filler line into a comment on the device.
pub const COMMENT: u8 = b';';

/// Total number of lines in a generated file.
pub const TOTAL_LINES: usize = FILLER_LINES + 2;

const FILLER_LINE_BYTES: usize = 1 + PAYLOAD_LEN + LINE_ENDING.len();

/// What a successful run wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Where the file was written. Empty when the output was not a file.
    pub path: PathBuf,
    pub lines: usize,
    pub bytes: u64,
}

impl Summary {
    /// The size every generated file has.
    pub const EXPECTED_BYTES: u64 =
        (2 * (SENTINEL.len() + LINE_ENDING.len()) + FILLER_LINES * FILLER_LINE_BYTES) as u64;
}

/// Writes the sentinel, [`FILLER_LINES`] random comment lines and the sentinel again to
/// `writer`, then flushes it.
///
/// The returned summary has an empty `path` and I/O failures are reported as
/// [`Error::Output`]. Use [`generate_at`] to write a file.
///
/// # Example
/// ```
/// # use usb_benchmark::{generator, Rng};
/// let mut output = Vec::new();
/// let summary = generator::write_benchmark(&mut output, &Rng::new()).unwrap();
/// assert_eq!(summary.lines, generator::TOTAL_LINES);
/// assert_eq!(output.len() as u64, summary.bytes);
/// ```
pub fn write_benchmark<W: Write>(writer: W, rng: &Rng) -> Result<Summary> {
    write_lines(writer, rng, None)
}

/// Creates or truncates the file at `path` and writes a benchmark file into it.
///
/// Nothing is retried and a partially written file is left in place on failure.
pub fn generate_at<P: AsRef<Path>>(path: P) -> Result<Summary> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened benchmark file");

    let rng = Rng::new();
    let summary = write_lines(BufWriter::new(file), &rng, Some(path))?;
    info!(
        path = %summary.path.display(),
        lines = summary.lines,
        bytes = summary.bytes,
        "benchmark file written"
    );
    Ok(summary)
}

/// Writes [`FILE_NAME`] in the current working directory.
pub fn generate() -> Result<Summary> {
    generate_at(FILE_NAME)
}

fn write_lines<W: Write>(mut writer: W, rng: &Rng, path: Option<&Path>) -> Result<Summary> {
    let write_error = |source| match path {
        Some(path) => Error::Write {
            path: path.to_path_buf(),
            source,
        },
        None => Error::Output { source },
    };

    let sentinel = [SENTINEL, LINE_ENDING].concat();
    let mut line = [0u8; FILLER_LINE_BYTES];
    line[0] = COMMENT;
    line[1 + PAYLOAD_LEN..].copy_from_slice(LINE_ENDING.as_bytes());

    writer.write_all(sentinel.as_bytes()).map_err(write_error)?;
    for _ in 0..FILLER_LINES {
        alphabet::fill(rng, &mut line[1..=PAYLOAD_LEN]);
        writer.write_all(&line).map_err(write_error)?;
    }
    writer.write_all(sentinel.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(Summary {
        path: path.map(Path::to_path_buf).unwrap_or_default(),
        lines: TOTAL_LINES,
        bytes: Summary::EXPECTED_BYTES,
    })
}
