/*!
stagectl - list Stage Manager groups and focus their windows.

Thin orchestration over `stagekit`: parse arguments, run one discovery
snapshot, then either print the groups or focus one selected window.
*/

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  run(Cli::parse())
}

#[cfg(target_os = "macos")]
fn run(cli: Cli) -> ExitCode {
  use stagekit::platform::{MacOS, Platform};

  let platform = MacOS;
  if !platform.has_permissions() {
    log::warn!(
      "accessibility permissions not granted; grant access under \
       System Settings > Privacy & Security > Accessibility"
    );
  }

  let groups = stagekit::stage_groups(&platform);

  if cli.json {
    return match serde_json::to_string_pretty(&groups) {
      Ok(json) => {
        println!("{json}");
        ExitCode::SUCCESS
      }
      Err(err) => {
        log::error!("failed to serialize groups: {err}");
        ExitCode::FAILURE
      }
    };
  }

  match cli.group {
    None => {
      let mut stdout = std::io::stdout();
      if stagekit::render_groups(&platform, &groups, &mut stdout).is_err() {
        return ExitCode::FAILURE;
      }
      ExitCode::SUCCESS
    }
    Some(group) => {
      let window = cli.window.unwrap_or(0);
      match stagekit::focus_selection(&platform, &groups, group, window) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
          println!("{err}");
          ExitCode::FAILURE
        }
      }
    }
  }
}

#[cfg(not(target_os = "macos"))]
fn run(_cli: Cli) -> ExitCode {
  eprintln!("stagectl requires macOS: Stage Manager is a macOS feature");
  ExitCode::FAILURE
}
