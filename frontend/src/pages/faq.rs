use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config::{FAQ_PANEL_FADE_MS, FAQ_SCROLL_DELAY_MS};
use crate::faq::accordion::{panel_id, Accordion, CategoryFilter, ItemKey};
use crate::faq::content::{FaqCategory, FaqEntry, CATEGORIES};
use crate::faq::search::{entry_matches, highlight, normalize_query, show_no_results, Segment};
use crate::scroll::{covered_by_header, scroll_y, smooth_scroll_to};

fn marked(text: &'static str, query: &str) -> Html {
    highlight(text, query)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => html! { <>{text}</> },
            Segment::Mark(text) => html! { <mark>{text}</mark> },
        })
        .collect::<Html>()
}

/// Scrolls an expanded question out from under the fixed header.
fn reveal_question(id: &str) {
    let Some(question) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return;
    };
    let top = question.get_bounding_client_rect().top();
    if let Some(target) = covered_by_header(scroll_y(), top) {
        smooth_scroll_to(target);
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    item: ItemKey,
    entry: FaqEntry,
    is_open: bool,
    #[prop_or_default]
    query: String,
    on_toggle: Callback<ItemKey>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let item = props.item;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(item);
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "active"))}>
            <button
                id={props.item.question_id()}
                class="faq-question"
                aria-expanded={props.is_open.to_string()}
                onclick={toggle}
            >
                <h3 class="question-text">{ marked(props.entry.question, &props.query) }</h3>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{ marked(props.entry.answer, &props.query) }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    /// Shows the search box above the category tabs.
    #[prop_or(false)]
    pub searchable: bool,
    #[prop_or(CATEGORIES)]
    pub categories: &'static [FaqCategory],
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let categories = props.categories;
    let filter = use_state_eq(|| CategoryFilter::new(categories.first().map_or("", |c| c.id)));
    let accordion = use_state_eq(Accordion::default);
    let query = use_state_eq(String::new);
    let panel_entered = use_state_eq(|| true);

    let select_category = {
        let filter = filter.clone();
        let panel_entered = panel_entered.clone();
        Callback::from(move |category: &'static str| {
            let mut next = (*filter).clone();
            next.select(category);
            filter.set(next);

            panel_entered.set(false);
            let panel_entered = panel_entered.clone();
            let timeout = Timeout::new(FAQ_PANEL_FADE_MS, move || panel_entered.set(true));
            timeout.forget();
        })
    };

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |item: ItemKey| {
            let mut next = *accordion;
            let expanded = next.toggle(item);
            accordion.set(next);
            if expanded {
                let timeout = Timeout::new(FAQ_SCROLL_DELAY_MS, move || {
                    reveal_question(&item.question_id());
                });
                timeout.forget();
            }
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let term = normalize_query(&query).to_string();
    let searching = !term.is_empty();
    let visible_count: usize = categories
        .iter()
        .map(|cat| cat.entries.iter().filter(|e| entry_matches(e, &term)).count())
        .sum();

    let tabs = categories.iter().map(|cat| {
        let onclick = {
            let select_category = select_category.clone();
            let id = cat.id;
            Callback::from(move |_: MouseEvent| select_category.emit(id))
        };
        html! {
            <button
                class={classes!("faq-category", filter.is_active(cat.id).then(|| "active"))}
                data-category={cat.id}
                onclick={onclick}
            >
                <i class={cat.icon}></i>
                <span>{cat.label}</span>
            </button>
        }
    });

    let panels = categories.iter().enumerate().map(|(ci, cat)| {
        let id = panel_id(cat.id);
        let visible = if searching {
            cat.entries.iter().any(|e| entry_matches(e, &term))
        } else {
            filter.shows_panel(&id)
        };
        let entering = visible && !searching && !*panel_entered;

        html! {
            <div id={id} class={classes!("faq-content", visible.then(|| "active"), entering.then(|| "entering"))}>
                { for cat.entries.iter().enumerate().map(|(ei, entry)| {
                    let item = ItemKey::new(ci, ei);
                    let shown = entry_matches(entry, &term);
                    html! {
                        <div class={classes!("faq-item-slot", (!shown).then(|| "search-hidden"))}>
                            <FaqItem
                                item={item}
                                entry={*entry}
                                is_open={accordion.is_open(item)}
                                query={term.clone()}
                                on_toggle={on_toggle.clone()}
                            />
                        </div>
                    }
                }) }
            </div>
        }
    });

    html! {
        <div class="faq-page">
            <section class="page-hero faq-hero">
                <h1>{"الأسئلة الشائعة"}</h1>
                <p>{"كل ما تحتاج معرفته عن برنامج التدريب الميداني في مكان واحد"}</p>
            </section>

            <section class="faq-section">
                <div class="container">
                    if props.searchable {
                        <div class="faq-search-box">
                            <i class="fas fa-search"></i>
                            <input
                                id="faq-search"
                                type="search"
                                placeholder="ابحث في الأسئلة..."
                                value={(*query).clone()}
                                oninput={on_search}
                            />
                        </div>
                    }
                    <div class={classes!("faq-categories", searching.then(|| "searching"))}>
                        { for tabs }
                    </div>
                    { for panels }
                    if show_no_results(visible_count, &term) {
                        <div id="no-results-message" class="no-results">
                            <i class="fas fa-search"></i>
                            <h3>{"لا توجد نتائج"}</h3>
                            <p>{format!("لم نجد أي أسئلة تطابق بحثك عن \"{}\"", term)}</p>
                            <p>{"جرب كلمات مختلفة أو تصفح الفئات أعلاه"}</p>
                        </div>
                    }
                </div>
            </section>

            <style>
                {r#"
                .faq-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, var(--primary-700), var(--primary-500));
                    color: white;
                }

                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .faq-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }

                .faq-search-box {
                    position: relative;
                    margin-bottom: 2rem;
                }

                .faq-search-box i {
                    position: absolute;
                    top: 50%;
                    right: 1rem;
                    transform: translateY(-50%);
                    color: var(--gray-500);
                }

                .faq-search-box input {
                    width: 100%;
                    padding: 0.9rem 2.75rem 0.9rem 1rem;
                    border: 1px solid var(--gray-300);
                    border-radius: var(--radius-lg);
                    font-size: 1rem;
                }

                .faq-categories {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                    margin-bottom: 2.5rem;
                }

                .faq-categories.searching {
                    opacity: 0.5;
                }

                .faq-category {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid var(--primary-200);
                    border-radius: 999px;
                    background: white;
                    color: var(--primary-700);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .faq-category.active,
                .faq-category:hover {
                    background: var(--primary-600);
                    border-color: var(--primary-600);
                    color: white;
                }

                .faq-content {
                    display: none;
                    opacity: 1;
                    transform: translateY(0);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .faq-content.active {
                    display: block;
                }

                .faq-content.entering {
                    opacity: 0;
                    transform: translateY(20px);
                }

                .faq-item-slot.search-hidden {
                    display: none;
                }

                .faq-item {
                    background: white;
                    border: 1px solid var(--gray-200);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover,
                .faq-item.active {
                    border-color: var(--primary-300);
                    box-shadow: var(--shadow-md);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: start;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question h3 {
                    font-size: 1.1rem;
                    margin: 0;
                    color: var(--gray-800);
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--primary-600);
                    transition: transform 0.3s ease;
                }

                .faq-item.active .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    display: none;
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-item.active .faq-answer {
                    display: block;
                }

                .faq-answer p {
                    color: var(--gray-600);
                    line-height: 1.8;
                    margin: 0;
                }

                .faq-item mark {
                    background: var(--warning-light, #fef3c7);
                    padding: 0 2px;
                    border-radius: 2px;
                }

                .no-results {
                    text-align: center;
                    padding: 2rem;
                    color: var(--gray-500);
                }

                .no-results i {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    opacity: 0.5;
                }

                @media (max-width: 768px) {
                    .faq-hero {
                        padding: 4rem 1rem 3rem;
                    }

                    .faq-hero h1 {
                        font-size: 2.25rem;
                    }

                    .faq-section {
                        padding: 2rem 1rem;
                    }

                    .faq-question {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
