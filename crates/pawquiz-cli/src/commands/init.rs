//! The `pawquiz init` command.

use anyhow::Result;

use pawquiz_core::sample::SAMPLE_QUIZ;

pub fn execute() -> Result<()> {
    // Create pawquiz.toml
    if std::path::Path::new("pawquiz.toml").exists() {
        println!("pawquiz.toml already exists, skipping.");
    } else {
        std::fs::write("pawquiz.toml", SAMPLE_CONFIG)?;
        println!("Created pawquiz.toml");
    }

    // Create sample question set
    std::fs::create_dir_all("quizzes")?;
    let sample_path = std::path::Path::new("quizzes/sample.toml");
    if sample_path.exists() {
        println!("quizzes/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_QUIZ)?;
        println!("Created quizzes/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizzes/sample.toml or add your own question sets");
    println!("  2. Run: pawquiz validate --quiz quizzes");
    println!("  3. Run: pawquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pawquiz configuration

quiz_file = "quizzes/sample.toml"
reduced_motion = false
progress_bar_width = 20
show_mascot = true
"#;
