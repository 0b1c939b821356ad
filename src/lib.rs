use std::{
    error,
    fmt::Display,
    io::{self, BufRead, Write},
};

use clap::Parser;

pub mod cycle;
pub mod deck;

#[derive(Debug)]
pub enum Error {
    InvalidDeckSize(usize),
    InvalidCutSize(usize, usize), // (given cut size, deck size it was checked against)
    AbortedInput,
    EmptyFrequencySet,
    PeriodOverflow,
    IOError(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDeckSize(size) => {
                write!(f, "Invalid deck size({}), expect a value greater than 1.", size)
            }
            Error::InvalidCutSize(cut, size) => write!(
                f,
                "Invalid cut size({}), expect a value greater than 0 and less than the deck size({}).",
                cut, size
            ),
            Error::AbortedInput => write!(f, "Input aborted before a valid value was given."),
            Error::EmptyFrequencySet => {
                write!(f, "No frequency was collected, the frequency set is empty.")
            }
            Error::PeriodOverflow => write!(
                f,
                "Overflow happened when combining frequencies into the deck period."
            ),
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::IOError(value)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub deck_size: Option<usize>,
    pub cut_size: Option<usize>,
}

pub fn read_deck_size<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<usize, Error> {
    writeln!(writer, "Please select a deck size:")?;
    loop {
        match read_int(reader)? {
            None => writeln!(writer, "Please enter integer values for a deck size:")?,
            Some(n) if n < 2 => {
                writeln!(writer, "Please enter a value greater than 1 for a deck size:")?
            }
            Some(n) => return Ok(usize::try_from(n).unwrap()),
        }
    }
}

pub fn read_cut_size<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    deck_size: usize,
) -> Result<usize, Error> {
    writeln!(
        writer,
        "Please select a cut size less than the deck size to shuffle with:"
    )?;
    loop {
        match read_int(reader)? {
            None => writeln!(writer, "Please enter integer values for a cut size:")?,
            Some(n) if n < 1 => {
                writeln!(writer, "Please enter a value greater than 0 for a cut size:")?
            }
            Some(n) => {
                let cut = usize::try_from(n).unwrap();
                if cut >= deck_size {
                    writeln!(
                        writer,
                        "Please enter a value less than the deck size for the cut:"
                    )?;
                } else {
                    return Ok(cut);
                }
            }
        }
    }
}

// Ok(None) means the line didn't hold an integer, callers re-prompt on it.
fn read_int<R: BufRead>(reader: &mut R) -> Result<Option<i64>, Error> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(Error::AbortedInput);
    }

    Ok(buf.trim().parse::<i64>().ok())
}

#[test]
fn test_read_deck_size_retries_until_valid() {
    let mut input = b"twelve\n1\n12\n".as_slice();
    let mut output = Vec::new();
    let size = read_deck_size(&mut input, &mut output).unwrap();
    assert!(size == 12);

    let prompts = String::from_utf8(output).unwrap();
    assert!(prompts.contains("Please select a deck size:"));
    assert!(prompts.contains("Please enter integer values for a deck size:"));
    assert!(prompts.contains("Please enter a value greater than 1 for a deck size:"));
}

#[test]
fn test_read_cut_size_retries_until_valid() {
    let mut input = b"five\n0\n12\n5\n".as_slice();
    let mut output = Vec::new();
    let cut = read_cut_size(&mut input, &mut output, 12).unwrap();
    assert!(cut == 5);

    let prompts = String::from_utf8(output).unwrap();
    assert!(prompts.contains("Please select a cut size less than the deck size to shuffle with:"));
    assert!(prompts.contains("Please enter integer values for a cut size:"));
    assert!(prompts.contains("Please enter a value greater than 0 for a cut size:"));
    assert!(prompts.contains("Please enter a value less than the deck size for the cut:"));
}

#[test]
fn test_read_aborts_on_closed_input() {
    let mut output = Vec::new();
    assert!(matches!(
        read_deck_size(&mut b"".as_slice(), &mut output),
        Err(Error::AbortedInput)
    ));
    assert!(matches!(
        read_cut_size(&mut b"not a cut\n".as_slice(), &mut output, 12),
        Err(Error::AbortedInput)
    ));
}

#[test]
fn test_read_accepts_surrounding_whitespace() {
    let mut output = Vec::new();
    let size = read_deck_size(&mut b"  52\t\n".as_slice(), &mut output).unwrap();
    assert!(size == 52);
}
