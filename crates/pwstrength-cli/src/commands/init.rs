//! The `pwstrength init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("pwstrength.toml").exists() {
        println!("pwstrength.toml already exists, skipping.");
    } else {
        std::fs::write("pwstrength.toml", SAMPLE_CONFIG)?;
        println!("Created pwstrength.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: pwstrength criteria");
    println!("  2. Run: pwstrength check 'P@ssw0rd'");
    println!("  3. Run: pwstrength session --report html");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pwstrength configuration

# Pause before showing a verdict, in milliseconds.
analysis_delay_ms = 0

# Width of the terminal strength meter (4-80).
meter_width = 20

# "text" or "json"
default_format = "text"

# Where `pwstrength session --report` writes files.
report_dir = "./pwstrength-reports"
"#;
