//! Window chrome commands sent from the UI to the host process.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// One-way window action, identified on the wire by its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowCommand {
    Minimize,
    /// Maximize, or restore when already maximized.
    ToggleMaximize,
    Close,
}

impl WindowCommand {
    pub const ALL: [WindowCommand; 3] = [
        WindowCommand::Minimize,
        WindowCommand::ToggleMaximize,
        WindowCommand::Close,
    ];

    pub const fn route(self) -> &'static str {
        match self {
            WindowCommand::Minimize => "AppHandler.minimize",
            WindowCommand::ToggleMaximize => "AppHandler.toggleMaximize",
            WindowCommand::Close => "AppHandler.close",
        }
    }
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for WindowCommand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.route() == s)
            .ok_or_else(|| DomainError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_route_strings_when_parsing_then_maps_to_commands() {
        for cmd in WindowCommand::ALL {
            assert_eq!(cmd.to_string().parse::<WindowCommand>().unwrap(), cmd);
        }
        assert_eq!(
            "AppHandler.toggleMaximize".parse::<WindowCommand>().unwrap(),
            WindowCommand::ToggleMaximize
        );
    }

    #[test]
    fn given_unknown_route_when_parsing_then_error() {
        let err = "AppHandler.fullscreen".parse::<WindowCommand>().unwrap_err();
        assert!(err.to_string().contains("AppHandler.fullscreen"));
    }
}
