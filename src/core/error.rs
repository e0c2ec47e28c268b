//! Error handling for webresource
//!
//! All failures of the resource subsystem belong to a single family, [`ResourceError`],
//! with one variant per failure mode. Errors are raised where they are detected and never
//! recovered internally; resolving and rendering are all-or-nothing.
//!
//! For command line output, [`user_friendly_error`] wraps any [`anyhow::Error`] into an
//! [`ErrorContext`] that adds details and a suggestion on how to fix the problem.
//!
//! # Examples
//!
//! ```rust,no_run
//! use webresource::core::{ResourceError, user_friendly_error};
//!
//! let error = ResourceError::UnsupportedAlgorithm { name: "md5".to_string() };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::resource::ResourceRef;

/// The error type of resource construction, resolution and rendering.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A resource or group could not be constructed.
    ///
    /// Raised for resources with neither file nor URL, for attributes the resource kind
    /// does not support and for group members of unknown type.
    #[error("Invalid resource definition: {message}")]
    Construction {
        message: String,
    },

    /// Two or more resources share a name.
    ///
    /// `counts` holds every resolved resource name with its number of occurrences, in
    /// first-seen order.
    #[error("Conflicting resource names: [{}]", conflicting_names(.counts).join(", "))]
    Conflict {
        counts: Vec<(String, usize)>,
    },

    /// A resource depends on a name that no included resource carries.
    #[error("Resource defines missing dependency: {resource}")]
    MissingDependency {
        resource: ResourceRef,
    },

    /// Resources that could not be ordered because their dependencies form a cycle.
    #[error("Resources define circular dependencies: [{}]", join_refs(.resources))]
    CircularDependency {
        resources: Vec<ResourceRef>,
    },

    /// Hash algorithm name not one of `sha256`, `sha384`, `sha512`.
    #[error("Unsupported hash algorithm '{name}', expected one of sha256, sha384, sha512")]
    UnsupportedAlgorithm {
        name: String,
    },

    /// Rendering requested for a resource kind without an HTML tag.
    #[error("Resource {resource} does not define an HTML tag and cannot be rendered")]
    AbstractOperation {
        resource: ResourceRef,
    },

    /// A resource file could not be read for hashing.
    #[error("Cannot read resource file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Names occurring more than once, for [`ResourceError::Conflict`]. Empty otherwise.
    pub fn conflicting(&self) -> Vec<&str> {
        match self {
            Self::Conflict { counts } => conflicting_names(counts),
            _ => Vec::new(),
        }
    }
}

fn conflicting_names(counts: &[(String, usize)]) -> Vec<&str> {
    counts.iter().filter(|(_, count)| *count > 1).map(|(name, _)| name.as_str()).collect()
}

fn join_refs(resources: &[ResourceRef]) -> String {
    resources.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// An error with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: anyhow::Error,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        for cause in self.error.chain().skip(1) {
            eprintln!("  {}: {}", "caused by".dimmed(), cause);
        }

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Attach details and suggestions to an error for display on the command line.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let resource_error = error.chain().find_map(|cause| cause.downcast_ref::<ResourceError>());
    if let Some(resource_error) = resource_error {
        let (details, suggestion) = describe(resource_error);
        return ErrorContext::new(error).with_details(details).with_suggestion(suggestion);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(error)
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(error)
                    .with_suggestion("Check the file permissions and ownership");
            }
            _ => {}
        }
    }

    let toml_error = error.chain().any(|cause| cause.is::<toml::de::Error>());
    if toml_error {
        return ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax of the manifest. Verify quotes, brackets and member tables")
            .with_details("Each resource or group is declared as a [[members]] table with a `kind` key");
    }

    ErrorContext::new(error)
}

fn describe(error: &ResourceError) -> (String, String) {
    match error {
        ResourceError::Construction { .. } => (
            "Resources need either a `resource` file in an absolute directory or an external `url`; group members must be resources or groups".to_string(),
            "Fix the resource declaration named in the message".to_string(),
        ),
        ResourceError::Conflict { .. } => (
            format!("Conflicting names: {}", error.conflicting().join(", ")),
            "Give every included resource a unique name, or exclude one of the duplicates".to_string(),
        ),
        ResourceError::MissingDependency { resource } => (
            format!("'{}' depends on '{}' which is not part of the resolved resources", resource.name, resource.depends),
            "Declare the dependency or check that it is not excluded by an include flag".to_string(),
        ),
        ResourceError::CircularDependency { resources } => (
            format!(
                "Unresolvable resources: {}",
                resources.iter().map(|r| r.name.as_str()).collect::<Vec<_>>().join(", ")
            ),
            "Remove one of the `depends` links that form the cycle".to_string(),
        ),
        ResourceError::UnsupportedAlgorithm { .. } => (
            "Resource hashing supports the SHA-2 family only".to_string(),
            "Use one of: sha256, sha384, sha512".to_string(),
        ),
        ResourceError::AbstractOperation { .. } => (
            "Generic resources take part in ordering but have no tag of their own".to_string(),
            "Declare the resource as script, link or style".to_string(),
        ),
        ResourceError::FileRead { path, .. } => (
            format!("Hashing requires reading {}", path.display()),
            "Check the resource directory and file name, or disable hashing for this resource".to_string(),
        ),
    }
}
