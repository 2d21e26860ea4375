//! Text program images: one binary literal per line, `#` starts a comment.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::Word;


const COMMENT_MARKER: char = '#';
const MAX_LITERAL_DIGITS: usize = Word::BITS as usize;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Couldn't read program file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line}: '{literal}' isn't an 8-bit binary literal")]
    InvalidLiteral { line: usize, literal: String },
}

pub fn load_program<P>(path: P) -> Result<Vec<u8>, ImageError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let program = parse_image(&text)?;
    debug!("Loaded {} bytes from {}", program.len(), path.display());

    Ok(program)
}

pub fn parse_image(text: &str) -> Result<Vec<u8>, ImageError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let code = line
                .split(COMMENT_MARKER)
                .next()
                .unwrap_or_default()
                .trim();

            (!code.is_empty()).then(|| parse_literal(index + 1, code))
        })
        .collect()
}

fn parse_literal(line: usize, literal: &str) -> Result<Word, ImageError> {
    let invalid = || ImageError::InvalidLiteral {
        line,
        literal: literal.to_string(),
    };

    // from_str_radix would also take a sign, which isn't a binary digit.
    if literal.len() > MAX_LITERAL_DIGITS || !literal.chars().all(|c| c == '0' || c == '1') {
        return Err(invalid());
    }

    Word::from_str_radix(literal, 2).map_err(|_| invalid())
}
