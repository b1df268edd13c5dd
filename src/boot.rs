use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::SiteConfig;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/data",
    "website/static",
    "website/static/css",
    "website/static/js",
    "website/templates",
];

/// Critical template files. The page cannot render without these
const CRITICAL_TEMPLATES: &[&str] = &["website/templates/index.html.tera"];

/// Static assets the page links to
const STATIC_ASSETS: &[&str] = &["website/static/css/site.css", "website/static/js/site.js"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing assets and data, and
/// aborts if the page template is absent.
pub fn run(config: &SiteConfig) {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Critical templates ──────────────────────────
    for file in CRITICAL_TEMPLATES {
        if !Path::new(file).exists() {
            error!("  MISSING critical template: {}", file);
            errors += 1;
        }
    }

    // ── 3. Static assets ───────────────────────────────
    for file in STATIC_ASSETS {
        if !Path::new(file).exists() {
            warn!("  Missing static asset: {} (page will be unstyled or static)", file);
            warnings += 1;
        }
    }

    // ── 4. Data file ───────────────────────────────────
    if !config.data_path.exists() {
        warn!(
            "  Data file {} not found (embedded data will be served)",
            config.data_path.display()
        );
        warnings += 1;
    }

    // ── 5. Contact address ─────────────────────────────
    if config.contact_email.is_empty() {
        warn!("  portfolio.contact_email is empty (contact form will not send)");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
