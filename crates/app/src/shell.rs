//! Route-driven terminal front-end.
//!
//! The shell owns the active quiz session and the one-shot results slot; every
//! screen is built from the presentation-agnostic views of `services`.

use quiz_core::session::QuizSession;
use services::sessions::build_results_view;
use services::{
    AdvanceResult, AppServices, CategoryOverview, CategorySummary, Missing, QuestionView,
    QuizError, ResultsSlot, ResultsView, Route,
};
use tracing::debug;

use crate::render::render_screen;

/// What is on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(Vec<CategorySummary>),
    Category(CategoryOverview),
    Quiz(QuestionView),
    Results(ResultsView),
    Fallback { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

enum Command {
    Navigate(Route),
    Select(usize),
    Advance,
    Notice(String),
    Exit,
}

pub struct Shell {
    services: AppServices,
    route: Route,
    screen: Screen,
    active: Option<QuizSession>,
    results: ResultsSlot,
    notice: Option<String>,
}

impl Shell {
    /// Open the shell at `route`.
    pub async fn open(services: AppServices, route: Route) -> Self {
        let mut shell = Self {
            services,
            route: Route::Home,
            screen: Screen::Home(Vec::new()),
            active: None,
            results: ResultsSlot::new(),
            notice: None,
        };
        shell.navigate(route).await;
        shell
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn render(&self) -> String {
        render_screen(&self.screen, self.notice.as_deref())
    }

    /// Resolve `route` into a screen. Leaving a quiz abandons it.
    pub async fn navigate(&mut self, route: Route) {
        if let Some(session) = self.active.take() {
            self.services.quiz_loop().abandon(session);
        }

        debug!(route = %route, "navigating");
        self.screen = match &route {
            Route::Home => Screen::Home(self.services.overview().home().await),
            Route::Category { category_id } => {
                match self.services.overview().category(category_id).await {
                    Ok(overview) => Screen::Category(overview),
                    Err(err) => fallback(&err),
                }
            }
            Route::Quiz {
                category_id,
                level_id,
            } => self.enter_quiz(category_id, level_id).await,
            Route::Results {
                category_id,
                level_id,
            } => {
                let summary = self.results.take_for(category_id, level_id);
                match build_results_view(
                    &self.services.catalogue(),
                    category_id,
                    level_id,
                    summary,
                ) {
                    Ok(view) => Screen::Results(view),
                    Err(err) => fallback(&err),
                }
            }
            Route::NotFound { path } => fallback(&QuizError::NotFound(Missing::Route(path.clone()))),
        };
        self.route = route;
    }

    async fn enter_quiz(&mut self, category_id: &str, level_id: &str) -> Screen {
        let quiz_loop = self.services.quiz_loop();
        match quiz_loop.start_quiz(category_id, level_id).await {
            Ok(started) => {
                if started.is_retake {
                    self.notice = Some("Retaking a completed level".to_owned());
                }
                let view = quiz_loop.question_view(&started.session);
                self.active = Some(started.session);
                match view {
                    Some(view) => Screen::Quiz(view),
                    None => Screen::Fallback {
                        message: "this level has no questions".to_owned(),
                    },
                }
            }
            Err(err) => fallback(&err),
        }
    }

    /// Apply one line of input.
    pub async fn handle(&mut self, input: &str) -> Flow {
        self.notice = None;
        match self.command(input.trim()) {
            Command::Exit => return Flow::Exit,
            Command::Navigate(route) => self.navigate(route).await,
            Command::Select(index) => self.select(index),
            Command::Advance => self.advance().await,
            Command::Notice(text) => self.notice = Some(text),
        }
        Flow::Continue
    }

    fn command(&self, input: &str) -> Command {
        match input {
            "q" | "quit" => return Command::Exit,
            "h" | "home" => return Command::Navigate(Route::Home),
            _ => {}
        }
        if let Some(path) = input.strip_prefix("go ") {
            return Command::Navigate(Route::parse(path));
        }

        match &self.screen {
            Screen::Home(categories) => match choice(input, categories.len()) {
                Some(i) => Command::Navigate(Route::category(categories[i].id.as_str())),
                None => unknown(input),
            },
            Screen::Category(overview) => {
                if matches!(input, "b" | "back") {
                    return Command::Navigate(Route::Home);
                }
                match choice(input, overview.levels.len()) {
                    Some(i) => {
                        let card = &overview.levels[i];
                        if card.status.is_unlocked() {
                            Command::Navigate(Route::quiz(
                                overview.summary.id.as_str(),
                                card.level_id.as_str(),
                            ))
                        } else {
                            Command::Notice(format!(
                                "Level {} is locked; complete level {} first",
                                card.level_number,
                                card.level_number.saturating_sub(1)
                            ))
                        }
                    }
                    None => unknown(input),
                }
            }
            Screen::Quiz(view) => match input {
                "" | "n" | "next" => Command::Advance,
                "x" | "exit" => match &self.active {
                    Some(session) => Command::Navigate(Route::category(session.category_id().as_str())),
                    None => Command::Navigate(Route::Home),
                },
                _ => match choice(input, view.options.len()) {
                    Some(i) => Command::Select(i),
                    None => unknown(input),
                },
            },
            Screen::Results(view) => match input {
                "n" | "next" => match &view.next_level {
                    Some(next) => Command::Navigate(Route::quiz(view.category_id.as_str(), next.as_str())),
                    None => Command::Notice("No next level offered for this score".to_owned()),
                },
                "r" | "retake" => Command::Navigate(Route::quiz(
                    view.category_id.as_str(),
                    view.level_id.as_str(),
                )),
                "l" | "levels" => Command::Navigate(Route::category(view.category_id.as_str())),
                _ => unknown(input),
            },
            Screen::Fallback { .. } => Command::Navigate(Route::Home),
        }
    }

    fn select(&mut self, index: usize) {
        let quiz_loop = self.services.quiz_loop();
        let Some(session) = self.active.as_mut() else {
            return;
        };
        if let Err(err) = quiz_loop.select_answer(session, index) {
            self.notice = Some(err.to_string());
        }
        self.refresh_question();
    }

    async fn advance(&mut self) {
        let quiz_loop = self.services.quiz_loop();
        let Some(session) = self.active.as_mut() else {
            return;
        };
        match quiz_loop.advance(session).await {
            Ok(AdvanceResult::NextQuestion { .. }) => self.refresh_question(),
            Ok(AdvanceResult::Completed(done)) => {
                self.active = None;
                let route = Route::results(
                    done.handoff.category_id.as_str(),
                    done.handoff.level_id.as_str(),
                );
                self.results.put(done.handoff);
                self.navigate(route).await;
                if !done.persisted {
                    self.notice = Some("Progress could not be saved".to_owned());
                }
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    fn refresh_question(&mut self) {
        let Some(session) = &self.active else {
            return;
        };
        if let Some(view) = self.services.quiz_loop().question_view(session) {
            self.screen = Screen::Quiz(view);
        }
    }
}

fn fallback(err: &QuizError) -> Screen {
    debug!(error = %err, "showing fallback screen");
    Screen::Fallback {
        message: err.to_string(),
    }
}

fn unknown(input: &str) -> Command {
    Command::Notice(format!("Unknown command: {input}"))
}

/// Parse a 1-based menu choice into an index below `len`.
fn choice(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}
