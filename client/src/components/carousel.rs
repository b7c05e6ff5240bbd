//! Auto-rotating image carousel.
//!
//! Every slide stays mounted; visibility is a class toggle so the CSS
//! opacity transition can fade between slides. The rotation timer lives as
//! long as the component: its cancellation guard is released in
//! `on_cleanup`, so a torn-down carousel never advances again.

use leptos::prelude::*;

use crate::state::carousel::{CarouselState, FADE_DURATION_MS, ROTATION_INTERVAL_MS, SLIDES};
use crate::util::cancel::CancelToken;
use crate::util::ticker::spawn_repeating;

/// Slide rotator with prev/next arrows and per-slide indicator buttons.
#[component]
pub fn Carousel() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::default());

    let rotation = CancelToken::new();
    spawn_repeating(ROTATION_INTERVAL_MS, rotation.clone(), move || {
        carousel.update(CarouselState::tick);
    });
    let rotation_guard = rotation.guard();
    on_cleanup(move || drop(rotation_guard));

    let fade_style = format!("transition-duration: {FADE_DURATION_MS}ms");

    view! {
        <div class="carousel">
            <div class="carousel__track">
                {SLIDES
                    .iter()
                    .map(|slide| {
                        let id = slide.id;
                        let slide_class = move || {
                            if carousel.get().is_active(id) {
                                "carousel__slide carousel__slide--active"
                            } else {
                                "carousel__slide"
                            }
                        };
                        view! {
                            <div class=slide_class style=fade_style.clone()>
                                <img class="carousel__image" src=slide.src alt=format!("Slide {id}")/>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="carousel__controls">
                <button
                    class="carousel__arrow"
                    type="button"
                    aria-label="Previous slide"
                    on:click=move |_| carousel.update(CarouselState::previous)
                >
                    "\u{276E}"
                </button>
                <button
                    class="carousel__arrow"
                    type="button"
                    aria-label="Next slide"
                    on:click=move |_| carousel.update(CarouselState::next)
                >
                    "\u{276F}"
                </button>
            </div>

            <div class="carousel__indicators" role="group" aria-label="slides">
                {SLIDES
                    .iter()
                    .map(|slide| {
                        let id = slide.id;
                        let dot_class = move || {
                            if carousel.get().is_active(id) {
                                "carousel__dot carousel__dot--active"
                            } else {
                                "carousel__dot"
                            }
                        };
                        view! {
                            <button
                                class=dot_class
                                type="button"
                                aria-label=format!("slide {id}")
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.select(id);
                                    });
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
