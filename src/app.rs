//! GreenLoop Page Shell
//!
//! Assembles the landing page sections in document order.

use leptos::prelude::*;

use crate::components::{
    ContactSection, FaqSection, Features, Footer, Hero, HowItWorks, Navbar, StatsBand, WasteGuide,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <Features />
            <StatsBand />
            <WasteGuide />
            <HowItWorks />
            <FaqSection />
            <ContactSection />
        </main>
        <Footer />
    }
}
