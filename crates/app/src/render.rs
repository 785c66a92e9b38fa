//! Plain-text rendering of shell screens.

use std::fmt::Write as _;

use quiz_core::model::QuestionOutcome;
use quiz_core::progression::LevelStatus;
use services::{CategoryOverview, CategorySummary, QuestionView, ResultsView};

use crate::shell::Screen;

const BAR_WIDTH: usize = 20;

/// Elapsed seconds as `m:ss`.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Render a screen plus an optional one-line notice.
#[must_use]
pub fn render_screen(screen: &Screen, notice: Option<&str>) -> String {
    let mut out = match screen {
        Screen::Home(categories) => render_home(categories),
        Screen::Category(overview) => render_category(overview),
        Screen::Quiz(view) => render_question(view),
        Screen::Results(view) => render_results(view),
        Screen::Fallback { message } => render_fallback(message),
    };
    if let Some(notice) = notice {
        let _ = writeln!(out, "\n! {notice}");
    }
    out
}

fn render_home(categories: &[CategorySummary]) -> String {
    let mut out = String::from("Quiz\nPick a category to see its levels.\n\n");
    for (i, category) in categories.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} [{}]  {}/{} levels completed, {} questions",
            i + 1,
            category.name,
            category.difficulty,
            category.completed_levels,
            category.level_count,
            category.question_count,
        );
        let _ = writeln!(out, "     {}", category.description);
    }
    out.push_str("\n<number> open category | go <path> | q quit\n");
    out
}

fn level_status_label(status: LevelStatus) -> String {
    match status {
        LevelStatus::Locked => "locked".to_owned(),
        LevelStatus::Available => "start".to_owned(),
        LevelStatus::Completed {
            percentage: Some(percentage),
        } => format!("retake, last {}", format_percentage(percentage)),
        LevelStatus::Completed { percentage: None } => "retake".to_owned(),
    }
}

fn render_category(overview: &CategoryOverview) -> String {
    let summary = &overview.summary;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", summary.name, summary.difficulty);
    let _ = writeln!(out, "{}", summary.description);
    let _ = writeln!(
        out,
        "{}/{} levels completed\n",
        summary.completed_levels, summary.level_count
    );
    for card in &overview.levels {
        let _ = writeln!(
            out,
            "  {:>2}. {:<10} {} questions  [{}]",
            card.level_number,
            card.title,
            card.question_count,
            level_status_label(card.status),
        );
    }
    out.push_str("\n<number> start level | b back | h home | q quit\n");
    out
}

fn render_question(view: &QuestionView) -> String {
    let progress = &view.progress;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Question {} of {}  {} {:.0}%  {}",
        progress.question_number,
        progress.total,
        progress_bar(progress.fraction),
        progress.fraction * 100.0,
        format_elapsed(view.question_elapsed_seconds),
    );
    let _ = writeln!(out, "\n{}\n", view.prompt);

    for (i, option) in view.options.iter().enumerate() {
        let marker = match (view.selected, view.correct_option) {
            (Some(_), Some(correct)) if correct == i => "  <- correct",
            (Some(selected), _) if selected == i => "  <- your answer",
            _ => "",
        };
        let _ = writeln!(out, "  {}. {option}{marker}", i + 1);
    }

    if view.is_revealed() {
        let verdict = if view.is_correct == Some(true) {
            "Correct!"
        } else {
            "Incorrect."
        };
        let _ = writeln!(out, "\n{verdict}");
        if let Some(explanation) = &view.explanation {
            let _ = writeln!(out, "{explanation}");
        }
        let next = if view.is_last { "finish" } else { "next question" };
        let _ = writeln!(out, "\nn {next} | x exit | q quit");
    } else {
        out.push_str("\n<number> answer | x exit | q quit\n");
    }
    out
}

fn outcome_mark(outcome: QuestionOutcome) -> char {
    match outcome {
        QuestionOutcome::Correct => '+',
        QuestionOutcome::Incorrect => 'x',
        QuestionOutcome::Unanswered => '.',
    }
}

fn render_results(view: &ResultsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.band.message());
    let _ = writeln!(out, "{} - Level {}\n", view.category_name, view.level_number);
    let _ = writeln!(
        out,
        "Score: {}/{} ({})",
        view.correct_count,
        view.total_questions,
        format_percentage(view.score_percentage)
    );
    let _ = writeln!(
        out,
        "Correct: {}  Incorrect: {}  Time: {}",
        view.correct_count,
        view.incorrect_count,
        format_elapsed(view.elapsed_seconds)
    );

    let grid: Vec<String> = view
        .review
        .iter()
        .map(|item| format!("{}{}", item.number, outcome_mark(item.outcome)))
        .collect();
    let _ = writeln!(out, "Review: {}", grid.join(" "));

    out.push('\n');
    if view.next_level.is_some() {
        out.push_str("n next level | ");
    }
    out.push_str("r retake | l levels | h home | q quit\n");
    out
}

fn render_fallback(message: &str) -> String {
    format!("Nothing here\n{message}\n\nPress enter to go home | q quit\n")
}
