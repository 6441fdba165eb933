//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use clap::ArgMatches;
use crate::errors::GeoResult;

/// Represents an executable command in the application
///
/// Commands render their result to a string so they can be tested without
/// capturing stdout; `execute` prints it.
pub trait Command {
    /// Produce the command's output
    fn output(&self) -> GeoResult<String>;

    /// Execute the command, printing its output
    fn execute(&self) -> GeoResult<()> {
        let output = self.output()?;
        println!("{}", output);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &ArgMatches) -> GeoResult<Box<dyn Command>>;
}
