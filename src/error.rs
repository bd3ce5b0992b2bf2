/*
 * Error Module
 *
 * Errors raised while setting up the simulation. Nothing inside a running
 * simulation fails: collisions and ball retirement are normal control flow.
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A simulation parameter is outside the range the physics can handle
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParam {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The toolkit refused to open the main window
    #[error("failed to create window: {0}")]
    WindowCreation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
