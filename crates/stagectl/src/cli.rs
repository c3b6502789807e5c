/*! Command-line definition. */

use clap::Parser;

/// List Stage Manager groups and focus their windows.
///
/// With no arguments, prints every stage group and its member windows.
/// With a group index, focuses that group's first window; an optional
/// second index picks another window within the group.
#[derive(Debug, Parser)]
#[command(name = "stagectl", version, about)]
pub(crate) struct Cli {
  /// Group index to focus (omit to list all groups)
  pub(crate) group: Option<usize>,

  /// Window index within the group (defaults to the first window)
  pub(crate) window: Option<usize>,

  /// Print discovered groups as JSON instead of focusing anything
  #[arg(long, conflicts_with_all = ["group", "window"])]
  pub(crate) json: bool,
}
