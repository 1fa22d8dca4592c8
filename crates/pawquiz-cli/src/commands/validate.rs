//! The `pawquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pawquiz_core::model::QuestionSet;
use pawquiz_core::parser::{load_quiz_directory, parse_question_set, validate_question_set};

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let sets = if quiz_path.is_dir() {
        load_quiz_directory(&quiz_path)?
    } else {
        vec![parse_question_set(&quiz_path)?]
    };

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for set in &sets {
        println!("Quiz: {} [{}] ({} questions)", set.title, set.id, set.len());
        if !set.is_empty() {
            println!("{}", question_table(set));
        }

        for problem in validate_question_set(set) {
            let level = if problem.is_fatal() {
                total_errors += 1;
                "ERROR"
            } else {
                total_warnings += 1;
                "WARNING"
            };
            println!("  [{}] {level}: {problem}", problem.question_id());
        }
    }

    if total_errors == 0 && total_warnings == 0 {
        println!("All question sets valid.");
    } else {
        println!("\n{total_errors} error(s), {total_warnings} warning(s) found.");
    }

    anyhow::ensure!(
        total_errors == 0,
        "{total_errors} question set error(s) must be fixed before playing"
    );
    Ok(())
}

fn question_table(set: &QuestionSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Prompt", "Options", "Correct"]);

    for (n, question) in set.questions.iter().enumerate() {
        let correct: Vec<&str> = question
            .options
            .iter()
            .filter(|o| o.correct)
            .map(|o| o.text.as_str())
            .collect();
        table.add_row(vec![
            Cell::new(n + 1),
            Cell::new(&question.id),
            Cell::new(&question.prompt),
            Cell::new(question.options.len()),
            Cell::new(if correct.is_empty() {
                "-".to_string()
            } else {
                correct.join(", ")
            }),
        ]);
    }

    table
}
