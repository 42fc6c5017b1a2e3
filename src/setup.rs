//! Start-up prompt: pick a random board or a pattern file before the
//! terminal switches to the alternate screen.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use term_life::core::discover_patterns;

/// How the board gets its first generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedChoice {
    Random,
    Pattern(PathBuf),
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("reading from stdin")? == 0 {
        bail!("stdin closed before the simulation was set up");
    }
    Ok(line.trim().to_string())
}

/// Ask until the answer is `random` or `load`.
pub fn ask_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    loop {
        let answer = read_answer(
            input,
            out,
            "To play from a random seed, type random. To load, type load: ",
        )?;
        match answer.to_lowercase().as_str() {
            "random" => return Ok(true),
            "load" => return Ok(false),
            _ => {}
        }
    }
}

/// List `files` by number and ask until a valid number is typed.
pub fn ask_file<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    files: &[PathBuf],
) -> Result<PathBuf> {
    for (i, f) in files.iter().enumerate() {
        writeln!(out, "{}: {}", i, f.display())?;
    }
    let mut prompt = "Type the number of the selected file to load it: ";
    loop {
        let answer = read_answer(input, out, prompt)?;
        if let Some(file) = answer.parse::<usize>().ok().and_then(|i| files.get(i)) {
            return Ok(file.clone());
        }
        prompt = "Enter a valid list number to load the selected file: ";
    }
}

/// Interactive seed selection.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    patterns_dir: &Path,
) -> Result<SeedChoice> {
    writeln!(out, "Welcome to Conway's Game of Life")?;
    if ask_mode(input, out)? {
        return Ok(SeedChoice::Random);
    }

    let files = discover_patterns(patterns_dir)?;
    if files.is_empty() {
        bail!("no pattern files (*.txt) in {}", patterns_dir.display());
    }
    writeln!(out, "Pattern files (in {}):", patterns_dir.display())?;
    ask_file(input, out, &files).map(SeedChoice::Pattern)
}

/// Block until an empty line is entered.
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let prompt = "Press ENTER to begin. During the simulation: P pauses, \
                  ENTER continues, Q quits. ";
    while !read_answer(input, out, prompt)?.is_empty() {}
    Ok(())
}
