use crate::components::sections::BlogResources::*;
use crate::components::sections::Features::*;
use crate::components::sections::Pricing::*;
use crate::components::sections::Testimonials::*;
use crate::components::sections::FAQ::*;
use crate::components::Hero::*;
use crate::components::Navbar::*;
use crate::components::Page::*;
use crate::components::ScrollReveal::*;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <Navbar/>
            <main class="flex-1">
                <Hero/>
                <SectionDivider/>
                <section id="features">
                    <FeaturesSection/>
                </section>
                <SectionDivider/>
                <section id="blog">
                    <BlogResourcesSection/>
                </section>
                <SectionDivider/>
                <section id="pricing">
                    <PricingSection/>
                </section>
                <SectionDivider/>
                <section id="testimonials">
                    <TestimonialsSection/>
                </section>
                <SectionDivider/>
                <section id="faq">
                    <FaqSection/>
                </section>
            </main>
            <ScrollRevealScript/>
        </Page>
    }
}

#[component]
fn SectionDivider() -> impl IntoView {
    view! {
        <div class="relative py-12 md:py-16 px-4 sm:px-6 lg:px-8">
            <div class="absolute inset-0 flex items-center justify-center" aria-hidden="true">
                <div class="w-full border-t border-edge/30 max-w-7xl mx-auto"></div>
            </div>
        </div>
    }
}
