/*!
stagekit - Stage Manager group discovery and window activation.

Walks the accessibility tree of macOS's Stage Manager service to
recover the current stage groups, correlates their window ids with
the window-server registry for owner metadata, and focuses a chosen
window through the accessibility layer.

```ignore
use stagekit::{platform::MacOS, stage_groups, focus_selection};

let platform = MacOS;
let groups = stage_groups(&platform);
focus_selection(&platform, &groups, 0, 0)?;
```

Discovery and activation are best-effort by design: the accessibility
tree belongs to another process and can change under us at any point,
so platform-level failures degrade to empty results and no-ops rather
than errors. The only surfaced errors are out-of-range selections.
*/

mod activator;
mod resolver;
mod role;
mod switcher;
mod types;

pub mod platform;

pub use role::Role;
pub use types::*;

pub use activator::{activate, focus};
pub use resolver::stage_groups;
pub use switcher::{focus_selection, render_groups};
