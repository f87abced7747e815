use colored::Colorize;
use libquiz::question::CHOICES_PER_QUESTION;
use libquiz::{Question, QuizStore};
use log::debug;
use std::io::{self, Write};
use text_io::try_read;

#[derive(Debug, PartialEq)]
enum Choice {
    Option(usize),
    DontKnow,
    Quit,
}

impl Choice {
    fn from_str(choices_count: usize, input: &str) -> Choice {
        match input.trim() {
            "q" => Choice::Quit,
            input => match input.parse::<usize>() {
                Ok(num) if (1..=choices_count).contains(&num) => Choice::Option(num - 1),
                Ok(_) => {
                    println!(
                        "{}",
                        format!("There are only {} options available!", choices_count)
                            .bright_red()
                    );
                    Choice::DontKnow
                }
                Err(_) => Choice::DontKnow,
            },
        }
    }
}

fn prompt(label: &str) -> String {
    print!("{} ", label.cyan());
    let _ = io::stdout().flush();
    // Unreadable input (EOF, invalid UTF-8) counts as a blank line.
    let line: String = try_read!("{}\n").unwrap_or_default();
    line.trim_end_matches('\r').to_string()
}

/// Prompts for one form field. Blank input keeps `current`.
fn prompt_field(label: &str, current: &str) -> String {
    let label = if current.is_empty() {
        format!("{label}:")
    } else {
        format!("{label} [{current}]:")
    };
    let input = prompt(&label);
    if input.trim().is_empty() {
        current.to_string()
    } else {
        input
    }
}

/// 1-based number of the correct choice, `?` when the question has none.
fn choice_number(question: &Question) -> String {
    question
        .correct_index
        .map_or_else(|| "?".to_string(), |index| (index + 1).to_string())
}

pub fn confirm(question: &str) -> bool {
    let answer = prompt(&format!("{question} (y/N)"));
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

pub fn print_questions(store: &QuizStore) {
    println!(
        "{}",
        format!("==========> Questions ({}) <==========", store.len()).cyan()
    );
    if store.is_empty() {
        println!("{}", "No questions yet. Add some to get started.".yellow());
        return;
    }
    for (idx, question) in store.questions().iter().enumerate() {
        println!("{}", question.headline(idx).bold());
        println!(
            "    Correct: Choice {}  {}",
            choice_number(question),
            format!("(id {})", question.id).dimmed()
        );
    }
}

/// Fills the authoring form from the terminal and submits it. Returns whether
/// a question was added.
pub fn author(store: &mut QuizStore) -> bool {
    let heading = if store.form.is_empty() {
        "==========> New question <=========="
    } else {
        "==========> Edit question (blank keeps the current value) <=========="
    };
    println!("{}", heading.cyan());

    store.form.question = prompt_field("Question", &store.form.question);
    for idx in 0..CHOICES_PER_QUESTION {
        let current = store.form.choices[idx].clone();
        let text = prompt_field(&format!("Choice {}", idx + 1), &current);
        store.form.set_choice(idx, text);
    }
    let current = (store.form.correct_index + 1).to_string();
    let correct = prompt_field(
        &format!("Correct choice (1-{})", CHOICES_PER_QUESTION),
        &current,
    );
    // Anything that is not 1-4 is left for validation to reject.
    store.form.correct_index = match correct.trim().parse::<usize>() {
        Ok(num) => num.checked_sub(1).unwrap_or(CHOICES_PER_QUESTION),
        Err(_) => CHOICES_PER_QUESTION,
    };
    debug!("[Author] Form: {:?}", store.form);

    match store.submit_form() {
        Ok(question) => {
            println!(
                "{}",
                format!("Added {:?} (id {}).", question.question, question.id).bright_green()
            );
            true
        }
        Err(err) => {
            println!("{}", err.to_string().bright_red());
            false
        }
    }
}

fn reveal(question: &Question) {
    println!(
        "{}",
        format!(
            "The correct choice was {}. ({})",
            choice_number(question),
            question.correct_choice().unwrap_or("?")
        )
        .green()
    );
}

/// Student mode: one pass over the quiz with feedback after every answer.
pub fn take(store: &mut QuizStore) {
    if store.is_empty() {
        println!(
            "{}",
            "No quiz is available. Ask your teacher to create questions first.".yellow()
        );
        return;
    }
    store.reset_answers();
    let questions = store.questions().to_vec();
    let total = questions.len();

    for (idx, question) in questions.iter().enumerate() {
        let leading = format!("{}/{}. ", idx + 1, total);
        println!(
            "{}{}",
            leading.cyan(),
            question.question.as_str().black().bold().on_white()
        );
        let indent = " ".repeat(leading.len());
        for (i, choice) in question.choices.iter().enumerate() {
            println!("{}{}. {}", indent, format!("{}", i + 1).bold(), choice);
        }

        let choice_string = prompt(&format!(
            "Answer (1-{}, q to quit prematurely and anything else to skip):",
            question.choices.len()
        ));
        let choice = Choice::from_str(question.choices.len(), &choice_string);
        debug!("choice: {:?}", choice);

        match choice {
            Choice::Option(num) => {
                if store.select_answer(&question.id, num).correct {
                    println!("{}", "Correct!".bright_green());
                } else {
                    println!("{}", "Incorrect!".bright_red());
                    reveal(question);
                }
            }
            Choice::DontKnow => {
                println!("{}", "Skipped.".yellow());
                reveal(question);
            }
            Choice::Quit => {
                println!("{}", "Quitting Early!".cyan());
                break;
            }
        }
        let score = store.compute_score();
        println!(
            "{}",
            format!("Score: {} / {}", score.correct_count, score.total).dimmed()
        );
    }

    let score = store.compute_score();
    println!("{}", "==========> Results <==========".cyan());
    println!("Score: {} / {}", score.correct_count, score.total);
    println!("Percent: {}%", score.percent);
    println!("Summary: {}", store.performance_summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_parsing() {
        assert_eq!(Choice::from_str(4, "q"), Choice::Quit);
        assert_eq!(Choice::from_str(4, "1"), Choice::Option(0));
        assert_eq!(Choice::from_str(4, " 4 "), Choice::Option(3));
        assert_eq!(Choice::from_str(4, "5"), Choice::DontKnow);
        assert_eq!(Choice::from_str(4, "0"), Choice::DontKnow);
        assert_eq!(Choice::from_str(2, "3"), Choice::DontKnow);
        assert_eq!(Choice::from_str(4, "no idea"), Choice::DontKnow);
    }
}
