//! Twenty Questions: the player thinks of a material and the atlas guesses.

use flows::game::{ANSWERS_KEY, Answer, GameState, GameStep, MAX_QUESTIONS, parse_answers, play};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::catalog::use_catalog;
use crate::util::format::plural;
use crate::util::query::{href, material_href, use_query_lookup};

const PATH: &str = "/game";

#[component]
pub fn GamePage() -> impl IntoView {
    let catalog = use_catalog();
    let answers = use_query_lookup()(ANSWERS_KEY)
        .map(|raw| parse_answers(&raw))
        .unwrap_or_default();
    let state = play(catalog.store.materials(), &answers);

    let history = state
        .history
        .iter()
        .map(|turn| {
            view! {
                <li class="game__turn">
                    <span class="game__question">{turn.question.label()}</span>
                    " "
                    <strong>{turn.answer.label()}</strong>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text="Twenty Questions"/>
        <header class="page-header">
            <h1>"Twenty Questions"</h1>
            <p>
                {format!(
                    "Think of one of the {} materials in the atlas. Answer up to {MAX_QUESTIONS} questions and see if the atlas can name it.",
                    catalog.store.materials().len(),
                )}
            </p>
        </header>
        <section class="panel game">
            <ol class="game__history">{history}</ol>
            {step_view(&state)}
        </section>
    }
}

fn step_view(state: &GameState<'_>) -> AnyView {
    let undo = (!state.history.is_empty()).then(|| {
        view! { <a class="game__undo" href=href(PATH, &state.undo_pairs())>"Undo last answer"</a> }
    });

    match &state.step {
        GameStep::Ask { number, question, remaining } => view! {
            <div class="game__prompt">
                <p class="game__counter">
                    {format!("Question {number} of {MAX_QUESTIONS}")} " · "
                    {plural(*remaining, "candidate", "candidates")} " left"
                </p>
                <p class="game__ask">{question.label()}</p>
                <p class="game__answers">
                    <a class="btn" href=href(PATH, &state.answer_pairs(Answer::Yes))>"Yes"</a>
                    <a class="btn" href=href(PATH, &state.answer_pairs(Answer::No))>"No"</a>
                </p>
                {undo}
            </div>
        }
        .into_any(),
        GameStep::Guess { material } => view! {
            <div class="game__prompt">
                <p class="game__ask">
                    "Is it " <a href=material_href(&material.slug)>{material.name.clone()}</a> "?"
                </p>
                <p class="game__answers">
                    <a class="btn" href=PATH>"Play again"</a>
                </p>
                {undo}
            </div>
        }
        .into_any(),
        GameStep::Stumped => view! {
            <div class="game__prompt">
                <p class="game__ask">"Stumped. Nothing in the atlas fits those answers."</p>
                <p class="game__answers">
                    <a class="btn" href=PATH>"Start over"</a>
                </p>
            </div>
        }
        .into_any(),
    }
}
