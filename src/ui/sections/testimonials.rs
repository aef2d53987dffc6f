use leptos::prelude::*;

use super::{SectionHeading, Stars};
use crate::core::Section;
use crate::core::content::{Stat, TESTIMONIAL_STATS, TESTIMONIALS, Testimonial};

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="bg-white p-6 md:p-8 shadow-sm hover:shadow-lg transition-shadow duration-300 rounded-lg">
            <div class="mb-4 md:mb-6 text-4xl md:text-6xl text-gray-200 font-serif leading-none" aria-hidden="true">
                "\""
            </div>
            <blockquote class="text-gray-700 leading-relaxed mb-6 md:mb-8 italic text-sm md:text-base">
                {testimonial.text}
            </blockquote>
            <figcaption class="border-t border-gray-100 pt-4 md:pt-6">
                <div class="font-light text-base md:text-lg tracking-wide text-gray-900">
                    {testimonial.name}
                </div>
                <div class="text-gray-500 text-xs md:text-sm tracking-wide mt-1">
                    {testimonial.location}
                </div>
            </figcaption>
        </figure>
    }
}

#[component]
fn StatBlock(stat: Stat) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-2xl md:text-3xl font-light text-gray-800 mb-2">{stat.value}</div>
            {stat.show_stars.then(|| view! {
                <div class="flex justify-center mb-2 md:mb-1">
                    <Stars/>
                </div>
            })}
            <div class="text-xs md:text-sm text-gray-600 leading-tight">{stat.label}</div>
        </div>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id=Section::Testimonials.id() class="py-12 md:py-24 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <SectionHeading
                    title="What Our Clients Say"
                    intro="Discover why clients across Pune choose Seven The Hair and Beauty Salon for their grooming and beauty needs."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial/> })
                        .collect_view()}
                </div>

                <div class="text-center mt-12 md:mt-16">
                    <div class="bg-white p-6 md:p-8 rounded-lg shadow-sm inline-block w-full max-w-2xl">
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 md:gap-8 sm:divide-x sm:divide-gray-200">
                            {TESTIMONIAL_STATS
                                .iter()
                                .map(|stat| view! { <StatBlock stat=*stat/> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
