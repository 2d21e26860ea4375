use std::{
    error::Error,
    io::{self, Write},
    str::FromStr,
};

use anyhow::anyhow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    // Not thrown directly by the arg reader
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Missing argument {0}")]
    MissingArgument(usize),

    #[error("Bad argument ({0})")]
    ParseError(String),
}

pub struct Command(String);

impl Command {
    /// Reads one command line from stdin, `None` once input is exhausted.
    pub fn prompt() -> anyhow::Result<Option<Self>> {
        print!("> ");
        io::stdout().flush()?;

        io::stdin()
            .lines()
            .next()
            .transpose()
            .map(|line| line.map(Self))
            .map_err(|e| anyhow!("Couldn't read command from stdin: {}", e))
    }

    pub fn args(&self) -> CommandArgs<impl Iterator<Item = &str>> {
        CommandArgs {
            iter: self.0.split_whitespace(),
            index: 0,
        }
    }
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}

pub struct CommandArgs<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    iter: I,
    index: usize,
}

impl<'a, I> CommandArgs<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn next(&mut self) -> Result<&'a str, CommandError> {
        self.index += 1;

        self.iter
            .next()
            .ok_or(CommandError::MissingArgument(self.index))
    }

    pub fn next_parsed<T>(&mut self) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        let arg_str = self.next()?;

        T::from_str(arg_str).map_err(|e| CommandError::ParseError(format!("{arg_str}: {e}")))
    }

    /// Parses the next argument if there is one, falling back to `default` otherwise.
    pub fn next_parsed_or<T>(&mut self, default: T) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        match self.next_parsed() {
            Err(CommandError::MissingArgument(_)) => Ok(default),
            result => result,
        }
    }

    pub fn remaining(self) -> usize {
        self.iter.count()
    }
}
