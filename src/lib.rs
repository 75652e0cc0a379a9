/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;

/// Recursive directory listing with hidden-entry filtering.
pub mod walker;

/// Template discovery: leaf templates vs template groups.
pub mod catalog;

/// An abstraction over how a template is duplicated into a new project.
pub mod fetcher;

/// Ignore patterns applied when copying templates.
pub mod ignore;

/// Sentinel replacement in a freshly fetched project.
pub mod initializer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Clone orchestration over a template workspace.
pub mod project;
