// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the converter UI.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives how the UI presents it.

use crate::error::SketchwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The upload was refused; nothing was processed.
    InputRejected,
    /// User must change something (settings, output location) and try again.
    ActionRequired,
    /// Non-fatal: the sketch on screen is still valid.
    Warning,
    /// Something went wrong inside the app.
    Internal,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives colour in UI).
    pub severity: Severity,
}

impl HumanError {
    /// Colour used for the status banner.
    pub fn colour(&self) -> &'static str {
        match self.severity {
            Severity::InputRejected => "#ff3b30",
            Severity::ActionRequired => "#ff9500",
            Severity::Warning => "#ffcc00",
            Severity::Internal => "#8e8e93",
        }
    }
}

/// Convert a `SketchwerkError` into a `HumanError` the user can act on.
pub fn humanize_error(err: &SketchwerkError) -> HumanError {
    match err {
        SketchwerkError::Decode(_) => HumanError {
            message: "That image couldn't be opened.".into(),
            suggestion: "The file may be damaged. Try opening it in another program, or choose a different photo.".into(),
            severity: Severity::InputRejected,
        },

        SketchwerkError::UnsupportedFormat(detail) => HumanError {
            message: "This type of image isn't supported.".into(),
            suggestion: format!("Please upload a JPEG or PNG file. (Got: {detail})"),
            severity: Severity::InputRejected,
        },

        SketchwerkError::ChannelShape { channels } => HumanError {
            message: "This image has no colour channels.".into(),
            suggestion: format!(
                "The image has {channels} channel(s). Upload a colour photo, or allow grayscale images in Settings."
            ),
            severity: Severity::InputRejected,
        },

        SketchwerkError::InvalidSettings(detail) => HumanError {
            message: "The sketch settings aren't valid.".into(),
            suggestion: format!("Open Settings and check the values you entered. ({detail})"),
            severity: Severity::ActionRequired,
        },

        SketchwerkError::DimensionMismatch { .. } => HumanError {
            message: "The sketch couldn't be made from this image.".into(),
            suggestion: "Try converting again. If this keeps happening, please report it.".into(),
            severity: Severity::Internal,
        },

        SketchwerkError::Encode(_) => HumanError {
            message: "The sketch couldn't be prepared for display.".into(),
            suggestion: "Try converting again. If this keeps happening, please report it.".into(),
            severity: Severity::Internal,
        },

        SketchwerkError::Export { path, .. } => HumanError {
            message: "The sketch couldn't be saved.".into(),
            suggestion: format!(
                "Check that {path} is writable, or pick another output location in Settings. The sketch on screen is unaffected."
            ),
            severity: Severity::Warning,
        },

        SketchwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or try copying the file to a different location first.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Warning,
                }
            }
        }

        SketchwerkError::Serialization(_) => HumanError {
            message: "The settings file couldn't be read or written.".into(),
            suggestion: "Your settings were reset to defaults. Save them again from Settings.".into(),
            severity: Severity::Warning,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_rejects_input() {
        let human = humanize_error(&SketchwerkError::Decode("bad huffman table".into()));
        assert_eq!(human.severity, Severity::InputRejected);
    }

    #[test]
    fn unsupported_format_mentions_detail() {
        let human = humanize_error(&SketchwerkError::UnsupportedFormat("GIF".into()));
        assert_eq!(human.severity, Severity::InputRejected);
        assert!(human.suggestion.contains("GIF"));
    }

    #[test]
    fn grayscale_rejection_points_at_settings() {
        let human = humanize_error(&SketchwerkError::ChannelShape { channels: 1 });
        assert_eq!(human.severity, Severity::InputRejected);
        assert!(human.suggestion.contains("Settings"));
    }

    #[test]
    fn export_failure_is_only_a_warning() {
        let err = SketchwerkError::Export {
            path: "/readonly/sketch.png".into(),
            reason: "permission denied".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Warning);
        assert!(human.suggestion.contains("/readonly/sketch.png"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = SketchwerkError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }
}
